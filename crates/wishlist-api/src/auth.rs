use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::{info, warn};
use uuid::Uuid;

use wishlist_store::Store;
use wishlist_types::api::{LoginRequest, LoginResponse, RegisterRequest};
use wishlist_types::models::UserProfile;

use crate::error::{ApiError, AuthError};
use crate::extract::{ApiJson, require};
use crate::password::Passwords;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
    pub passwords: Passwords,
    pub authenticator: Box<dyn Authenticator>,
}

impl AppStateInner {
    /// State with user-id tokens.
    pub fn new(store: Store, passwords: Passwords) -> Self {
        Self::with_authenticator(store, passwords, UserIdTokens)
    }

    pub fn with_authenticator(
        store: Store,
        passwords: Passwords,
        authenticator: impl Authenticator,
    ) -> Self {
        Self {
            store,
            passwords,
            authenticator: Box::new(authenticator),
        }
    }
}

/// Issues tokens at login and maps them back to users on every `/api` request.
pub trait Authenticator: Send + Sync + 'static {
    fn issue(&self, user: &UserProfile) -> String;

    fn resolve(&self, store: &Store, token: &str) -> Result<UserProfile, AuthError>;
}

/// The token is the user id itself. No signature, no expiry.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserIdTokens;

impl Authenticator for UserIdTokens {
    fn issue(&self, user: &UserProfile) -> String {
        user.id.to_string()
    }

    fn resolve(&self, store: &Store, token: &str) -> Result<UserProfile, AuthError> {
        let id: Uuid = token.parse().map_err(|_| AuthError::InvalidToken)?;
        store
            .get_user(id)?
            .map(|user| user.profile())
            .ok_or(AuthError::UnknownUser)
    }
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require("username", &req.username)?;
    require("email", &req.email)?;
    require("password", &req.password)?;

    let password_hash = state.passwords.hash(req.password).await?;
    let user = state
        .store
        .create_user(&req.username, &req.email, &password_hash)?;

    info!("User {} registered as {}", user.username, user.id);

    Ok((StatusCode::CREATED, Json(user.profile())))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require("username", &req.username)?;
    require("password", &req.password)?;

    let invalid = || ApiError::Unauthorized("invalid credentials".into());

    let Some(user) = state.store.find_user_by_username(&req.username)? else {
        warn!("Login for unknown username {}", req.username);
        return Err(invalid());
    };

    if !state
        .passwords
        .verify(req.password, user.password_hash.clone())
        .await?
    {
        warn!("Bad password for {}", user.username);
        return Err(invalid());
    }

    let profile = user.profile();
    let token = state.authenticator.issue(&profile);

    Ok(Json(LoginResponse {
        token,
        user: profile,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_tokens() {
        let store = Store::new();
        let alice = store.create_user("alice", "a@x.com", "h").unwrap().profile();

        let token = UserIdTokens.issue(&alice);
        assert_eq!(token, alice.id.to_string());
        assert_eq!(UserIdTokens.resolve(&store, &token).unwrap(), alice);

        assert!(matches!(
            UserIdTokens.resolve(&store, "garbage"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(
            UserIdTokens.resolve(&store, &Uuid::new_v4().to_string()),
            Err(AuthError::UnknownUser)
        ));
    }
}
