//! Joined view types returned to clients.
//!
//! Each view flattens the base entity and adds the related entity the
//! client needs alongside it, mirroring the shapes the mobile UI
//! renders. Views are produced by the domain services; rows whose
//! referenced menu item no longer exists are dropped before a view is
//! built, so a view never carries a dangling reference.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::{CartItem, Category, MenuItem, Order, OrderItem};

/// A menu item together with its category, when the category still
/// exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemWithCategory {
    #[serde(flatten)]
    pub item: MenuItem,
    pub category: Option<Category>,
}

/// A cart row together with the menu item it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemWithMenuItem {
    #[serde(flatten)]
    pub item: CartItem,
    pub menu_item: MenuItem,
}

/// An order line together with the menu item it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemWithMenuItem {
    #[serde(flatten)]
    pub item: OrderItem,
    pub menu_item: MenuItem,
}

/// An order together with its joined line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItemWithMenuItem>,
}

/// Derived cart totals. Recomputed from the current rows on every
/// call, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub item_count: i32,
}
