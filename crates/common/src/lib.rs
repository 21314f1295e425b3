//! Shared schema types for the food-ordering backend.
//!
//! This crate defines the entity types stored by the entity store, the
//! insert payloads accepted at the API boundary, and the joined view
//! types returned to clients. All monetary and rating values are
//! [`rust_decimal::Decimal`] serialized as decimal strings so no
//! precision is lost across the wire.

pub mod entities;
pub mod ids;
pub mod views;

pub use entities::{
    CartItem, Category, MenuItem, MenuItemUpdate, NewCartItem, NewCategory, NewMenuItem, NewOrder,
    NewSavedItem, NewUser, Order, OrderItem, OrderLine, OrderStatus, SavedItem, User, UserUpdate,
};
pub use ids::{
    CartItemId, CategoryId, EntityKey, MenuItemId, OrderId, OrderItemId, SavedItemId, UserId,
};
pub use views::{
    CartItemWithMenuItem, CartSummary, MenuItemWithCategory, OrderItemWithMenuItem, OrderWithItems,
};
