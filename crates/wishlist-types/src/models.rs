use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public view of a user. The password hash never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: Uuid,
    /// Owner. Fixed at creation.
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub wishlist_id: Uuid,
    pub name: String,
    pub description: String,
    /// Decimal kept as text, e.g. "999.99".
    pub price: String,
    pub link: String,
    pub is_purchased: bool,
}

/// Grants `user_id` read access to a wishlist, plus edit access when `can_edit` is set.
/// The owner never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareGrant {
    pub id: Uuid,
    pub wishlist_id: Uuid,
    pub user_id: Uuid,
    pub can_edit: bool,
}

/// A wishlist as seen by a grantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedWishlist {
    pub wishlist: Wishlist,
    pub can_edit: bool,
}
