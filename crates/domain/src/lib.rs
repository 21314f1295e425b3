//! Domain services for the food-ordering backend.
//!
//! Each service wraps an injected [`entity_store::MemStorage`] and
//! implements one slice of the business rules:
//! - [`MenuService`] — menu and category queries with category joins
//! - [`CartService`] — cart aggregation and derived totals
//! - [`OrderService`] — order placement with line-item fan-out and the
//!   status lifecycle
//! - [`SavedItemService`] — bookmark toggling
//! - [`UserService`] — accounts with unique email/username
//!
//! Expected absences come back as `Option`/`bool` results; only
//! genuine rule violations surface as [`DomainError`].

pub mod cart;
pub mod error;
pub mod menu;
pub mod orders;
pub mod saved;
pub mod users;

pub use cart::{CartItemUpdate, CartService};
pub use error::DomainError;
pub use menu::MenuService;
pub use orders::OrderService;
pub use saved::SavedItemService;
pub use users::UserService;
