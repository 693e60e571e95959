use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::{self, AppState};
use crate::middleware::require_auth;
use crate::{items, shares, wishlists};

/// All routes. CORS and request tracing are layered on by the binary.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login));

    let protected_routes = Router::new()
        .route(
            "/api/wishlists",
            get(wishlists::list_wishlists).post(wishlists::create_wishlist),
        )
        .route(
            "/api/wishlists/{id}",
            get(wishlists::get_wishlist)
                .put(wishlists::update_wishlist)
                .delete(wishlists::delete_wishlist),
        )
        .route(
            "/api/wishlists/{id}/items",
            get(items::list_items).post(items::create_item),
        )
        .route(
            "/api/wishlists/{id}/items/{item_id}",
            put(items::update_item).delete(items::delete_item),
        )
        .route("/api/wishlists/{id}/share", post(shares::share_wishlist))
        .route("/api/shared", get(shares::list_shared))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
