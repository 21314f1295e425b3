//! Stored entity types and their insert payloads.
//!
//! Wire representation is camelCase JSON to match the mobile client.
//! Insert payloads (`New*`) are the entity minus its store-assigned
//! fields (`id`, `createdAt`), with the schema column defaults applied
//! during deserialization.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{CartItemId, CategoryId, MenuItemId, OrderId, OrderItemId, SavedItemId, UserId};

fn default_quantity() -> i32 {
    1
}

fn default_preparation_time() -> i32 {
    15
}

fn default_true() -> bool {
    true
}

/// A registered account. `username` and `email` are unique across all
/// users; uniqueness is enforced by the user service on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Profile patch for [`User`]. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// A menu category. `slug` is unique by convention (the seed data
/// respects it; the store does not enforce it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
}

/// Payload for creating a [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A dish offered by a restaurant.
///
/// `price` and `rating` are exact decimals, serialized as decimal
/// strings. `category_id` is optional and may dangle after a category
/// is deleted; joins tolerate that by producing no category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub image: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub rating: Decimal,
    pub preparation_time: i32,
    pub calories: Option<i32>,
    pub restaurant: String,
    pub category_id: Option<CategoryId>,
    pub is_available: bool,
    pub is_featured: bool,
    pub is_popular: bool,
}

/// Payload for creating a [`MenuItem`], with the schema defaults:
/// rating 0, preparation time 15 minutes, available, not featured,
/// not popular.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str")]
    pub rating: Decimal,
    #[serde(default = "default_preparation_time")]
    pub preparation_time: i32,
    #[serde(default)]
    pub calories: Option<i32>,
    pub restaurant: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_popular: bool,
}

/// Patch for [`MenuItem`]. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub preparation_time: Option<i32>,
    #[serde(default)]
    pub calories: Option<i32>,
    #[serde(default)]
    pub restaurant: Option<String>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub is_popular: Option<bool>,
}

/// One menu item in a user's cart. `price` is a snapshot of the menu
/// item's price at add time. A row never persists with quantity ≤ 0;
/// updating to zero deletes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub menu_item_id: MenuItemId,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Payload for adding a [`CartItem`]. Quantity defaults to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub user_id: UserId,
    pub menu_item_id: MenuItemId,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

/// Order lifecycle states, in their intended linear progression.
///
/// Serialized snake_case (`"pending"`, `"out_for_delivery"`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// The next state in the progression, or `None` once delivered.
    pub fn successor(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    /// Whether `next` is the immediate successor of this state. No
    /// skips, no backward moves.
    pub fn can_become(self, next: OrderStatus) -> bool {
        self.successor() == Some(next)
    }

    /// The snake_case wire name of this state.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed order. `total` is the amount the client was quoted at
/// checkout; line items live in [`OrderItem`] rows. Status is
/// overwritten in place, no history is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub status: OrderStatus,
    pub delivery_address: String,
    pub estimated_delivery_time: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Payload for placing an [`Order`]. Status defaults to pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: UserId,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
    pub delivery_address: String,
    #[serde(default)]
    pub estimated_delivery_time: Option<i32>,
}

/// One line of an order, immutable once created. `price` is a snapshot
/// of the menu item's price at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub menu_item_id: MenuItemId,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

/// One line of an order as submitted at checkout, before the order id
/// exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub menu_item_id: MenuItemId,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

/// A menu item bookmarked by a user. At most one row exists per
/// (user, menu item) pair; the saved-item service enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub id: SavedItemId,
    pub user_id: UserId,
    pub menu_item_id: MenuItemId,
    pub created_at: DateTime<Utc>,
}

/// Payload for saving a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedItem {
    pub user_id: UserId,
    pub menu_item_id: MenuItemId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_progression_is_linear() {
        assert!(OrderStatus::Pending.can_become(OrderStatus::Confirmed));
        assert!(OrderStatus::Confirmed.can_become(OrderStatus::Preparing));
        assert!(OrderStatus::Preparing.can_become(OrderStatus::OutForDelivery));
        assert!(OrderStatus::OutForDelivery.can_become(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.successor(), None);
    }

    #[test]
    fn order_status_rejects_skips_and_backward_moves() {
        assert!(!OrderStatus::Pending.can_become(OrderStatus::Preparing));
        assert!(!OrderStatus::Confirmed.can_become(OrderStatus::Pending));
        assert!(!OrderStatus::Delivered.can_become(OrderStatus::Pending));
        assert!(!OrderStatus::Pending.can_become(OrderStatus::Pending));
    }

    #[test]
    fn order_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::OutForDelivery).unwrap(),
            "\"out_for_delivery\""
        );
        let status: OrderStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, OrderStatus::Pending);
    }

    #[test]
    fn new_menu_item_applies_schema_defaults() {
        let item: NewMenuItem = serde_json::from_str(
            r#"{"name": "Yam fries", "price": "30.00", "restaurant": "Iya Oyo"}"#,
        )
        .unwrap();

        assert_eq!(item.rating, Decimal::ZERO);
        assert_eq!(item.preparation_time, 15);
        assert!(item.is_available);
        assert!(!item.is_featured);
        assert!(!item.is_popular);
        assert_eq!(item.category_id, None);
    }

    #[test]
    fn new_cart_item_quantity_defaults_to_one() {
        let item: NewCartItem =
            serde_json::from_str(r#"{"userId": 1, "menuItemId": 2, "price": "30.00"}"#).unwrap();
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn money_crosses_the_wire_as_decimal_strings() {
        let line = OrderLine {
            menu_item_id: MenuItemId::from(1),
            quantity: 2,
            price: Decimal::new(550, 2),
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["price"], "5.50");
        assert_eq!(json["menuItemId"], 1);
    }
}
