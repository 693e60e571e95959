use uuid::Uuid;

use wishlist_types::models::{Item, ShareGrant, SharedWishlist, Wishlist};

use crate::Store;
use crate::error::Result;
use crate::models::{ItemFields, UserRecord};

/// Single-operation entry points. Each takes the lock exactly once.
impl Store {
    // -- Users --

    pub fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord> {
        self.with_tables_mut(|t| t.create_user(username, email, password_hash))
    }

    pub fn find_user_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        self.with_tables(|t| Ok(t.user_by_username(username).cloned()))
    }

    pub fn get_user(&self, id: Uuid) -> Result<Option<UserRecord>> {
        self.with_tables(|t| Ok(t.user(id).cloned()))
    }

    // -- Wishlists --

    pub fn create_wishlist(
        &self,
        owner_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Wishlist> {
        self.with_tables_mut(|t| Ok(t.create_wishlist(owner_id, title, description)))
    }

    pub fn get_wishlist(&self, id: Uuid) -> Result<Wishlist> {
        self.with_tables(|t| t.wishlist(id).cloned())
    }

    pub fn list_wishlists_by_owner(&self, owner_id: Uuid) -> Result<Vec<Wishlist>> {
        self.with_tables(|t| Ok(t.wishlists_by_owner(owner_id)))
    }

    pub fn update_wishlist(&self, id: Uuid, title: &str, description: &str) -> Result<Wishlist> {
        self.with_tables_mut(|t| t.update_wishlist(id, title, description))
    }

    pub fn delete_wishlist(&self, id: Uuid) -> Result<()> {
        self.with_tables_mut(|t| {
            t.delete_wishlist(id);
            Ok(())
        })
    }

    // -- Items --

    pub fn create_item(&self, wishlist_id: Uuid, fields: ItemFields) -> Result<Item> {
        self.with_tables_mut(|t| Ok(t.create_item(wishlist_id, fields)))
    }

    pub fn list_items_by_wishlist(&self, wishlist_id: Uuid) -> Result<Vec<Item>> {
        self.with_tables(|t| Ok(t.items_by_wishlist(wishlist_id)))
    }

    pub fn update_item(&self, id: Uuid, fields: ItemFields, is_purchased: bool) -> Result<Item> {
        self.with_tables_mut(|t| t.update_item(id, fields, is_purchased))
    }

    pub fn delete_item(&self, id: Uuid) -> Result<bool> {
        self.with_tables_mut(|t| Ok(t.delete_item(id)))
    }

    // -- Share grants --

    pub fn create_share_grant(
        &self,
        wishlist_id: Uuid,
        grantee_id: Uuid,
        can_edit: bool,
    ) -> Result<ShareGrant> {
        self.with_tables_mut(|t| Ok(t.create_share_grant(wishlist_id, grantee_id, can_edit)))
    }

    pub fn list_share_grants_by_grantee(&self, user_id: Uuid) -> Result<Vec<ShareGrant>> {
        self.with_tables(|t| Ok(t.share_grants_by_grantee(user_id)))
    }

    pub fn list_shared_with(&self, user_id: Uuid) -> Result<Vec<SharedWishlist>> {
        self.with_tables(|t| Ok(t.shared_with(user_id)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::StoreError;

    #[test]
    fn test_list_wishlists_by_owner_returns_only_owned() {
        let store = Store::new();
        let alice = store.create_user("alice", "a@x.com", "h").unwrap().id;
        let bob = store.create_user("bob", "b@x.com", "h").unwrap().id;
        let a1 = store.create_wishlist(alice, "One", "").unwrap();
        let a2 = store.create_wishlist(alice, "Two", "").unwrap();
        store.create_wishlist(bob, "Bob's", "").unwrap();

        let ids: HashSet<Uuid> = store
            .list_wishlists_by_owner(alice)
            .unwrap()
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, HashSet::from([a1.id, a2.id]));
    }

    #[test]
    fn test_find_user_by_username() {
        let store = Store::new();
        let alice = store.create_user("alice", "a@x.com", "h").unwrap();

        let found = store.find_user_by_username("alice").unwrap().unwrap();
        assert_eq!(found.id, alice.id);
        assert!(store.find_user_by_username("carol").unwrap().is_none());
        assert_eq!(store.get_user(alice.id).unwrap().unwrap().email, "a@x.com");
    }

    #[test]
    fn test_delete_wishlist_empties_dependent_lists() {
        let store = Store::new();
        let alice = store.create_user("alice", "a@x.com", "h").unwrap().id;
        let bob = store.create_user("bob", "b@x.com", "h").unwrap().id;
        let w = store.create_wishlist(alice, "Bday", "").unwrap();
        let item = store.create_item(w.id, ItemFields::default()).unwrap();
        store.create_share_grant(w.id, bob, true).unwrap();

        store.delete_wishlist(w.id).unwrap();

        assert_eq!(store.get_wishlist(w.id).unwrap_err(), StoreError::NotFound("wishlist"));
        assert!(store.list_items_by_wishlist(w.id).unwrap().is_empty());
        assert!(store.list_share_grants_by_grantee(bob).unwrap().is_empty());
        assert!(store.list_shared_with(bob).unwrap().is_empty());
        assert!(!store.delete_item(item.id).unwrap());
    }

    #[test]
    fn test_update_and_delete_item() {
        let store = Store::new();
        let alice = store.create_user("alice", "a@x.com", "h").unwrap().id;
        let w = store.create_wishlist(alice, "Bday", "").unwrap();
        let item = store
            .create_item(
                w.id,
                ItemFields {
                    name: "Phone".into(),
                    price: "999.99".into(),
                    ..Default::default()
                },
            )
            .unwrap();

        let updated = store
            .update_item(
                item.id,
                ItemFields {
                    name: "Phone".into(),
                    price: "899.99".into(),
                    ..Default::default()
                },
                true,
            )
            .unwrap();
        assert_eq!(updated.price, "899.99");
        assert!(updated.is_purchased);

        assert!(store.delete_item(item.id).unwrap());
        assert_eq!(
            store.update_item(item.id, ItemFields::default(), false).unwrap_err(),
            StoreError::NotFound("item")
        );
    }

    #[test]
    fn test_concurrent_registration_admits_one() {
        let store = Arc::new(Store::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || {
                    store
                        .create_user("alice", &format!("a{i}@x.com"), "h")
                        .is_ok()
                })
            })
            .collect();

        let created = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(created, 1);
    }
}
