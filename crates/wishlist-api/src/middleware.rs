use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use wishlist_types::models::UserProfile;

use crate::auth::AppState;
use crate::error::{ApiError, AuthError};

/// The authenticated caller, inserted into request extensions by `require_auth`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserProfile);

/// Resolve the `Authorization` header to a user. A `Bearer ` prefix is accepted
/// but not required.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.strip_prefix("Bearer ").unwrap_or(v).trim())
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let user = state.authenticator.resolve(&state.store, token)?;

    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}
