use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;
use uuid::Uuid;

use wishlist_types::api::ShareRequest;

use crate::auth::AppState;
use crate::error::ApiError;
use crate::extract::{ApiJson, parse_id, require};
use crate::middleware::CurrentUser;

/// POST /api/wishlists/{id}/share — owner grants another user access.
pub async fn share_wishlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiJson(req): ApiJson<ShareRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require("shared_user_id", &req.shared_user_id)?;
    let id = parse_id(&id, "wishlist")?;
    let grantee = req.shared_user_id.parse::<Uuid>().ok();

    let grant = state
        .store
        .with_tables_mut(|t| t.share_wishlist(user.id, id, grantee, req.can_edit))?;

    info!(
        "Wishlist {} shared by {} with {} (can_edit={})",
        id, user.username, grant.user_id, grant.can_edit
    );

    Ok((StatusCode::CREATED, Json(grant)))
}

/// GET /api/shared — every grant addressed to the caller, with its wishlist.
pub async fn list_shared(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.store.list_shared_with(user.id)?))
}
