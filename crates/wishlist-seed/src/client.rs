use anyhow::{Result, bail};
use reqwest::{Method, header::AUTHORIZATION};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use wishlist_types::api::{
    CreateItemRequest, LoginRequest, LoginResponse, RegisterRequest, ShareRequest, WishlistRequest,
};
use wishlist_types::models::{Item, ShareGrant, SharedWishlist, UserProfile, Wishlist};

/// Thin JSON client for the wishlist HTTP API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<LoginResponse>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: None,
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.session.as_ref().map(|s| s.user.id)
    }

    async fn send<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method.clone(), &url);
        if let Some(session) = &self.session {
            req = req.header(AUTHORIZATION, &session.token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            bail!("{} {} failed with {}: {}", method, path, status, text);
        }
        Ok(resp.json().await?)
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<UserProfile> {
        self.send(Method::POST, "/auth/register", Some(req)).await
    }

    /// Log in and keep the token for later calls.
    pub async fn login(&mut self, req: &LoginRequest) -> Result<&LoginResponse> {
        let resp: LoginResponse = self.send(Method::POST, "/auth/login", Some(req)).await?;
        Ok(self.session.insert(resp))
    }

    pub async fn create_wishlist(&self, req: &WishlistRequest) -> Result<Wishlist> {
        self.send(Method::POST, "/api/wishlists", Some(req)).await
    }

    pub async fn add_item(&self, wishlist_id: Uuid, req: &CreateItemRequest) -> Result<Item> {
        let path = format!("/api/wishlists/{wishlist_id}/items");
        self.send(Method::POST, &path, Some(req)).await
    }

    pub async fn share(
        &self,
        wishlist_id: Uuid,
        user_id: Uuid,
        can_edit: bool,
    ) -> Result<ShareGrant> {
        let path = format!("/api/wishlists/{wishlist_id}/share");
        let req = ShareRequest {
            shared_user_id: user_id.to_string(),
            can_edit,
        };
        self.send(Method::POST, &path, Some(&req)).await
    }

    pub async fn shared(&self) -> Result<Vec<SharedWishlist>> {
        self.send::<(), _>(Method::GET, "/api/shared", None).await
    }
}
