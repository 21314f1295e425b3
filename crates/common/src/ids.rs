//! Entity identifier newtypes.
//!
//! Every entity type has its own id newtype over `i64` so that, for
//! example, a [`CartItemId`] can never be passed where a [`MenuItemId`]
//! is expected. Ids are assigned by the entity store: sequential per
//! table, starting at 1, never reused or reclaimed.

use serde::{Deserialize, Serialize};

/// A synthetic table key assigned by the entity store.
///
/// Implemented by every id newtype so the generic table can allocate
/// the next id without knowing the concrete entity type.
pub trait EntityKey: Copy + Ord {
    /// Wraps a raw integer id.
    fn from_raw(raw: i64) -> Self;

    /// Returns the raw integer id.
    fn raw(self) -> i64;
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl EntityKey for $name {
            fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            fn raw(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifies a [`User`](crate::User).
    UserId
);
entity_id!(
    /// Identifies a [`Category`](crate::Category).
    CategoryId
);
entity_id!(
    /// Identifies a [`MenuItem`](crate::MenuItem).
    MenuItemId
);
entity_id!(
    /// Identifies a [`CartItem`](crate::CartItem).
    CartItemId
);
entity_id!(
    /// Identifies an [`Order`](crate::Order).
    OrderId
);
entity_id!(
    /// Identifies an [`OrderItem`](crate::OrderItem).
    OrderItemId
);
entity_id!(
    /// Identifies a [`SavedItem`](crate::SavedItem).
    SavedItemId
);
