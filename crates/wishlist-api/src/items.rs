use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;
use uuid::Uuid;

use wishlist_store::models::ItemFields;
use wishlist_store::{Access, StoreError};
use wishlist_types::api::{CreateItemRequest, UpdateItemRequest};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::extract::{ApiJson, parse_id, require};
use crate::middleware::CurrentUser;

/// GET /api/wishlists/{id}/items
pub async fn list_items(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, "wishlist")?;

    let items = state.store.with_tables(|t| {
        t.authorize(user.id, id, Access::Read)?;
        Ok::<_, StoreError>(t.items_by_wishlist(id))
    })?;

    Ok(Json(items))
}

/// POST /api/wishlists/{id}/items
pub async fn create_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiJson(req): ApiJson<CreateItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require("name", &req.name)?;
    let id = parse_id(&id, "wishlist")?;

    let fields = ItemFields {
        name: req.name,
        description: req.description,
        price: req.price,
        link: req.link,
    };
    let item = state.store.with_tables_mut(|t| {
        t.authorize(user.id, id, Access::Edit)?;
        Ok::<_, StoreError>(t.create_item(id, fields))
    })?;

    info!("Item {} added to wishlist {} by {}", item.id, id, user.username);

    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/wishlists/{id}/items/{item_id}
pub async fn update_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiJson(req): ApiJson<UpdateItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require("name", &req.name)?;
    let id = parse_id(&id, "wishlist")?;
    let item_id = item_id.parse::<Uuid>().ok();

    let fields = ItemFields {
        name: req.name,
        description: req.description,
        price: req.price,
        link: req.link,
    };
    let item = state.store.with_tables_mut(|t| {
        t.authorize(user.id, id, Access::Edit)?;
        let item_id = item_id.ok_or(StoreError::NotFound("item"))?;
        t.item(id, item_id)?;
        t.update_item(item_id, fields, req.is_purchased)
    })?;

    Ok(Json(item))
}

/// DELETE /api/wishlists/{id}/items/{item_id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "wishlist")?;
    let item_id = item_id.parse::<Uuid>().ok();

    state.store.with_tables_mut(|t| {
        t.authorize(user.id, id, Access::Edit)?;
        let item_id = item_id.ok_or(StoreError::NotFound("item"))?;
        t.item(id, item_id)?;
        t.delete_item(item_id);
        Ok::<_, StoreError>(())
    })?;

    info!("Item deleted from wishlist {} by {}", id, user.username);

    Ok(StatusCode::NO_CONTENT)
}
