//! Access-control rules for wishlists.
//!
//! The owner holds every right implicitly. Anyone else needs a share grant:
//! any grant on the wishlist allows reading, a grant with `can_edit` allows
//! editing the wishlist and its items. Deleting and sharing stay with the owner.
//!
//! Grants are scanned linearly. Several grants for the same (wishlist, user)
//! pair may exist; edit access is the OR of their flags.

use uuid::Uuid;

use wishlist_types::models::{ShareGrant, Wishlist};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Edit,
    /// Delete or share.
    Own,
}

/// Decide whether `user_id` holds `access` on `wishlist`. Never fails.
pub fn permits<'a, I>(user_id: Uuid, wishlist: &Wishlist, grants: I, access: Access) -> bool
where
    I: IntoIterator<Item = &'a ShareGrant>,
{
    if wishlist.user_id == user_id {
        return true;
    }

    let mut matching = grants
        .into_iter()
        .filter(|g| g.wishlist_id == wishlist.id && g.user_id == user_id);

    match access {
        Access::Read => matching.next().is_some(),
        Access::Edit => matching.any(|g| g.can_edit),
        Access::Own => false,
    }
}

pub fn can_read<'a, I>(user_id: Uuid, wishlist: &Wishlist, grants: I) -> bool
where
    I: IntoIterator<Item = &'a ShareGrant>,
{
    permits(user_id, wishlist, grants, Access::Read)
}

pub fn can_edit<'a, I>(user_id: Uuid, wishlist: &Wishlist, grants: I) -> bool
where
    I: IntoIterator<Item = &'a ShareGrant>,
{
    permits(user_id, wishlist, grants, Access::Edit)
}

pub fn can_delete(user_id: Uuid, wishlist: &Wishlist) -> bool {
    permits(user_id, wishlist, std::iter::empty::<&ShareGrant>(), Access::Own)
}

pub fn can_share(user_id: Uuid, wishlist: &Wishlist) -> bool {
    permits(user_id, wishlist, std::iter::empty::<&ShareGrant>(), Access::Own)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn wishlist(owner: Uuid) -> Wishlist {
        let now = Utc::now();
        Wishlist {
            id: Uuid::new_v4(),
            user_id: owner,
            title: "Birthday".into(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn grant(wishlist: &Wishlist, user_id: Uuid, can_edit: bool) -> ShareGrant {
        ShareGrant {
            id: Uuid::new_v4(),
            wishlist_id: wishlist.id,
            user_id,
            can_edit,
        }
    }

    #[test]
    fn test_owner_has_every_right() {
        let owner = Uuid::new_v4();
        let w = wishlist(owner);
        let none: Vec<ShareGrant> = vec![];

        assert!(can_read(owner, &w, &none));
        assert!(can_edit(owner, &w, &none));
        assert!(can_delete(owner, &w));
        assert!(can_share(owner, &w));
    }

    #[test]
    fn test_stranger_has_nothing() {
        let w = wishlist(Uuid::new_v4());
        let stranger = Uuid::new_v4();
        let grants = vec![grant(&w, Uuid::new_v4(), true)];

        assert!(!can_read(stranger, &w, &grants));
        assert!(!can_edit(stranger, &w, &grants));
        assert!(!can_delete(stranger, &w));
    }

    #[test]
    fn test_read_only_grant() {
        let w = wishlist(Uuid::new_v4());
        let bob = Uuid::new_v4();
        let grants = vec![grant(&w, bob, false)];

        assert!(can_read(bob, &w, &grants));
        assert!(!can_edit(bob, &w, &grants));
        assert!(!permits(bob, &w, &grants, Access::Own));
    }

    #[test]
    fn test_edit_grant() {
        let w = wishlist(Uuid::new_v4());
        let bob = Uuid::new_v4();
        let grants = vec![grant(&w, bob, true)];

        assert!(can_read(bob, &w, &grants));
        assert!(can_edit(bob, &w, &grants));
        assert!(!can_delete(bob, &w));
        assert!(!can_share(bob, &w));
    }

    #[test]
    fn test_duplicate_grants_or_edit_flag() {
        let w = wishlist(Uuid::new_v4());
        let bob = Uuid::new_v4();
        let grants = vec![grant(&w, bob, false), grant(&w, bob, true), grant(&w, bob, false)];

        assert!(can_edit(bob, &w, &grants));
    }

    #[test]
    fn test_grant_on_other_wishlist_ignored() {
        let owner = Uuid::new_v4();
        let w = wishlist(owner);
        let other = wishlist(owner);
        let bob = Uuid::new_v4();
        let grants = vec![grant(&other, bob, true)];

        assert!(!can_read(bob, &w, &grants));
        assert!(can_edit(bob, &other, &grants));
    }
}
