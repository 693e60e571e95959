use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

// Request fields default to empty so that a missing field and an empty one
// are rejected the same way by the handlers.

// -- Auth --

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

// -- Wishlists --

/// Body of both `POST /api/wishlists` and `PUT /api/wishlists/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WishlistRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

// -- Items --

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub link: String,
}

/// Full replacement of an item's editable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub is_purchased: bool,
}

// -- Sharing --

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareRequest {
    #[serde(default)]
    pub shared_user_id: String,
    #[serde(default)]
    pub can_edit: bool,
}

// -- Errors --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
