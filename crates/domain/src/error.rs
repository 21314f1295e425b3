//! Domain error types.

use common::{MenuItemId, OrderStatus};
use thiserror::Error;

/// Errors for domain rule violations.
///
/// Absences that a caller is expected to handle (row not found,
/// nothing to delete) are not errors; operations report those through
/// `Option` or `bool` results instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A cart row can never hold a quantity below 1.
    #[error("Quantity must be at least 1, got {quantity}")]
    InvalidQuantity { quantity: i32 },

    /// A referenced menu item does not exist.
    #[error("Menu item {id} not found")]
    MenuItemNotFound { id: MenuItemId },

    /// A user with this email already exists.
    #[error("User with this email already exists")]
    DuplicateEmail { email: String },

    /// A user with this username already exists.
    #[error("User with this username already exists")]
    DuplicateUsername { username: String },

    /// Order status may only advance to its immediate successor.
    #[error("Cannot change order status from {from} to {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },
}
