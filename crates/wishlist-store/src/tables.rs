use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use wishlist_types::models::{Item, ShareGrant, SharedWishlist, Wishlist};

use crate::access::{self, Access};
use crate::error::{Result, StoreError};
use crate::models::{ItemFields, UserRecord};

/// The four entity maps. Only reachable through `Store::with_tables*`, so
/// every method here runs with the lock already held.
#[derive(Debug, Default)]
pub struct Tables {
    users: HashMap<Uuid, UserRecord>,
    wishlists: HashMap<Uuid, Wishlist>,
    items: HashMap<Uuid, Item>,
    grants: HashMap<Uuid, ShareGrant>,
}

impl Tables {
    // -- Users --

    pub fn create_user(
        &mut self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord> {
        if self
            .users
            .values()
            .any(|u| u.username == username || u.email == email)
        {
            return Err(StoreError::Conflict);
        }

        let user = UserRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn user(&self, id: Uuid) -> Option<&UserRecord> {
        self.users.get(&id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&UserRecord> {
        self.users.values().find(|u| u.username == username)
    }

    // -- Wishlists --

    pub fn create_wishlist(&mut self, owner_id: Uuid, title: &str, description: &str) -> Wishlist {
        let now = Utc::now();
        let wishlist = Wishlist {
            id: Uuid::new_v4(),
            user_id: owner_id,
            title: title.to_string(),
            description: description.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.wishlists.insert(wishlist.id, wishlist.clone());
        wishlist
    }

    pub fn wishlist(&self, id: Uuid) -> Result<&Wishlist> {
        self.wishlists.get(&id).ok_or(StoreError::NotFound("wishlist"))
    }

    pub fn wishlists_by_owner(&self, owner_id: Uuid) -> Vec<Wishlist> {
        self.wishlists
            .values()
            .filter(|w| w.user_id == owner_id)
            .cloned()
            .collect()
    }

    pub fn update_wishlist(
        &mut self,
        id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Wishlist> {
        let wishlist = self
            .wishlists
            .get_mut(&id)
            .ok_or(StoreError::NotFound("wishlist"))?;
        wishlist.title = title.to_string();
        wishlist.description = description.to_string();
        wishlist.updated_at = Utc::now();
        Ok(wishlist.clone())
    }

    /// Remove a wishlist together with its items and share grants.
    /// Absent ids are a no-op.
    pub fn delete_wishlist(&mut self, id: Uuid) {
        if self.wishlists.remove(&id).is_none() {
            return;
        }

        let items_before = self.items.len();
        self.items.retain(|_, item| item.wishlist_id != id);
        let grants_before = self.grants.len();
        self.grants.retain(|_, grant| grant.wishlist_id != id);

        debug!(
            "Wishlist {} removed with {} items and {} grants",
            id,
            items_before - self.items.len(),
            grants_before - self.grants.len()
        );
    }

    // -- Items --

    pub fn create_item(&mut self, wishlist_id: Uuid, fields: ItemFields) -> Item {
        let item = Item {
            id: Uuid::new_v4(),
            wishlist_id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            link: fields.link,
            is_purchased: false,
        };
        self.items.insert(item.id, item.clone());
        item
    }

    /// Look up an item, requiring it to belong to `wishlist_id`.
    pub fn item(&self, wishlist_id: Uuid, item_id: Uuid) -> Result<&Item> {
        self.items
            .get(&item_id)
            .filter(|item| item.wishlist_id == wishlist_id)
            .ok_or(StoreError::NotFound("item"))
    }

    pub fn items_by_wishlist(&self, wishlist_id: Uuid) -> Vec<Item> {
        self.items
            .values()
            .filter(|item| item.wishlist_id == wishlist_id)
            .cloned()
            .collect()
    }

    pub fn update_item(
        &mut self,
        id: Uuid,
        fields: ItemFields,
        is_purchased: bool,
    ) -> Result<Item> {
        let item = self.items.get_mut(&id).ok_or(StoreError::NotFound("item"))?;
        item.name = fields.name;
        item.description = fields.description;
        item.price = fields.price;
        item.link = fields.link;
        item.is_purchased = is_purchased;
        Ok(item.clone())
    }

    pub fn delete_item(&mut self, id: Uuid) -> bool {
        self.items.remove(&id).is_some()
    }

    // -- Share grants --

    /// Append a grant. Repeated grants for the same pair accumulate.
    pub fn create_share_grant(
        &mut self,
        wishlist_id: Uuid,
        grantee_id: Uuid,
        can_edit: bool,
    ) -> ShareGrant {
        let grant = ShareGrant {
            id: Uuid::new_v4(),
            wishlist_id,
            user_id: grantee_id,
            can_edit,
        };
        self.grants.insert(grant.id, grant.clone());
        grant
    }

    pub fn share_grants_by_grantee(&self, user_id: Uuid) -> Vec<ShareGrant> {
        self.grants
            .values()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect()
    }

    /// One entry per grant addressed to `user_id` whose wishlist still exists.
    pub fn shared_with(&self, user_id: Uuid) -> Vec<SharedWishlist> {
        self.grants
            .values()
            .filter(|g| g.user_id == user_id)
            .filter_map(|g| {
                self.wishlists.get(&g.wishlist_id).map(|w| SharedWishlist {
                    wishlist: w.clone(),
                    can_edit: g.can_edit,
                })
            })
            .collect()
    }

    // -- Access --

    /// Fetch a wishlist and check that `user_id` holds `access` on it.
    pub fn authorize(&self, user_id: Uuid, wishlist_id: Uuid, access: Access) -> Result<Wishlist> {
        let wishlist = self.wishlist(wishlist_id)?;
        if !access::permits(user_id, wishlist, self.grants.values(), access) {
            return Err(StoreError::Forbidden("access denied"));
        }
        Ok(wishlist.clone())
    }

    /// Grant `grantee_id` access to a wishlist owned by `owner_id`.
    ///
    /// Checks run in this order: wishlist exists, caller owns it, grantee
    /// exists, grantee is not the caller.
    pub fn share_wishlist(
        &mut self,
        owner_id: Uuid,
        wishlist_id: Uuid,
        grantee_id: Option<Uuid>,
        can_edit: bool,
    ) -> Result<ShareGrant> {
        let wishlist = self.wishlist(wishlist_id)?;
        if !access::can_share(owner_id, wishlist) {
            return Err(StoreError::Forbidden("only owner can share wishlist"));
        }

        let grantee_id = grantee_id
            .filter(|id| self.users.contains_key(id))
            .ok_or(StoreError::NotFound("user to share with"))?;
        if grantee_id == owner_id {
            return Err(StoreError::Invalid("cannot share with yourself"));
        }

        Ok(self.create_share_grant(wishlist_id, grantee_id, can_edit))
    }
}
