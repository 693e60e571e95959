use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use wishlist_store::{Access, StoreError};
use wishlist_types::api::WishlistRequest;

use crate::auth::AppState;
use crate::error::ApiError;
use crate::extract::{ApiJson, parse_id, require};
use crate::middleware::CurrentUser;

/// POST /api/wishlists
pub async fn create_wishlist(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiJson(req): ApiJson<WishlistRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require("title", &req.title)?;

    let wishlist = state
        .store
        .create_wishlist(user.id, &req.title, &req.description)?;

    info!("Wishlist {} created by {}", wishlist.id, user.username);

    Ok((StatusCode::CREATED, Json(wishlist)))
}

/// GET /api/wishlists — only wishlists the caller owns.
pub async fn list_wishlists(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.store.list_wishlists_by_owner(user.id)?))
}

/// GET /api/wishlists/{id}
pub async fn get_wishlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, "wishlist")?;
    let wishlist = state
        .store
        .with_tables(|t| t.authorize(user.id, id, Access::Read))?;

    Ok(Json(wishlist))
}

/// PUT /api/wishlists/{id}
pub async fn update_wishlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiJson(req): ApiJson<WishlistRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require("title", &req.title)?;
    let id = parse_id(&id, "wishlist")?;

    let wishlist = state.store.with_tables_mut(|t| {
        t.authorize(user.id, id, Access::Edit)?;
        t.update_wishlist(id, &req.title, &req.description)
    })?;

    Ok(Json(wishlist))
}

/// DELETE /api/wishlists/{id} — owner only; takes items and grants with it.
pub async fn delete_wishlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "wishlist")?;

    state.store.with_tables_mut(|t| {
        t.authorize(user.id, id, Access::Own)?;
        t.delete_wishlist(id);
        Ok::<_, StoreError>(())
    })?;

    info!("Wishlist {} deleted by {}", id, user.username);

    Ok(StatusCode::NO_CONTENT)
}
