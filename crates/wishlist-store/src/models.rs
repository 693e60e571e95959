//! Row types held by the store. `UserRecord` is distinct from the wire
//! `UserProfile` so the password hash cannot be serialized by accident.

use uuid::Uuid;

use wishlist_types::models::UserProfile;

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
}

impl UserRecord {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// Editable item fields shared by create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
    pub price: String,
    pub link: String,
}
