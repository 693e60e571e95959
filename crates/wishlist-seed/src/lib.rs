//! Fake-data generator that drives a running wishlist server over HTTP.

pub mod client;
pub mod generate;

use anyhow::{Context, Result};
use tracing::{info, warn};

use wishlist_types::api::LoginRequest;

use crate::client::ApiClient;

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub base_url: String,
    pub items: usize,
}

impl SeedConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url =
            lookup("WISHLIST_BASE_URL").unwrap_or_else(|| "http://localhost:8080".into());
        let items = match lookup("WISHLIST_SEED_ITEMS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid WISHLIST_SEED_ITEMS: {raw:?}"))?,
            None => 3,
        };
        Ok(Self { base_url, items })
    }
}

/// What one seeding run produced.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub username: String,
    pub email: String,
    pub title: String,
    /// (name, price) of each item that was added.
    pub items: Vec<(String, String)>,
    /// Wishlists the second user can see after the share.
    pub shared_with_friend: usize,
}

impl SeedReport {
    pub fn summary(&self) -> String {
        let items = self
            .items
            .iter()
            .map(|(name, price)| format!("{name} ({price})"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "User {} ({}) created wishlist \"{}\" with items: {}",
            self.username, self.email, self.title, items
        )
    }
}

/// Register and log in a fresh user, returning the authenticated client.
async fn signed_in_client(base_url: &str) -> Result<(ApiClient, LoginRequest, String)> {
    let mut client = ApiClient::new(base_url);
    let user = generate::user(&mut rand::rng());

    let profile = client.register(&user).await?;
    info!("Registered user: {} ({})", profile.username, profile.id);

    let creds = LoginRequest {
        username: user.username,
        password: user.password,
    };
    client.login(&creds).await?;
    info!("Logged in as {}", creds.username);

    Ok((client, creds, user.email))
}

pub async fn run(config: &SeedConfig) -> Result<SeedReport> {
    let (owner, creds, email) = signed_in_client(&config.base_url).await?;

    let wishlist_req = generate::wishlist(&mut rand::rng());
    let wishlist = owner.create_wishlist(&wishlist_req).await?;
    info!("Created wishlist: {} ({})", wishlist.title, wishlist.id);

    let mut items = Vec::with_capacity(config.items);
    for _ in 0..config.items {
        let item_req = generate::item(&mut rand::rng());
        match owner.add_item(wishlist.id, &item_req).await {
            Ok(item) => {
                info!("Added item: {} ({}) -> {}", item.name, item.price, item.id);
                items.push((item.name, item.price));
            }
            Err(e) => warn!("Failed to add item: {}", e),
        }
    }

    let (friend, _, _) = signed_in_client(&config.base_url).await?;
    let friend_id = friend
        .user_id()
        .ok_or_else(|| anyhow::anyhow!("second user has no id after login"))?;
    let grant = owner.share(wishlist.id, friend_id, false).await?;
    info!("Shared wishlist {} read-only with {}", wishlist.id, grant.user_id);

    let shared = friend.shared().await?;

    Ok(SeedReport {
        username: creds.username,
        email,
        title: wishlist.title,
        items,
        shared_with_friend: shared.len(),
    })
}
