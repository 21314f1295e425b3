//! Cart operations and derived totals.

use chrono::Utc;
use common::{
    CartItem, CartItemId, CartItemWithMenuItem, CartSummary, MenuItemId, NewCartItem, UserId,
};
use entity_store::MemStorage;
use rust_decimal::Decimal;

use crate::error::DomainError;

/// Outcome of a quantity update.
///
/// `Removed` ("the row no longer exists") and `NotFound` ("there was
/// no such row") are distinct and callers must not conflate them: a
/// quantity of zero on an existing row is a successful removal, not a
/// lookup failure.
#[derive(Debug, Clone, PartialEq)]
pub enum CartItemUpdate {
    /// Quantity was positive; the row was overwritten.
    Updated(CartItem),
    /// Quantity was ≤ 0; the row existed and has been deleted.
    Removed,
    /// No row with that id exists.
    NotFound,
}

/// Cart mutations and queries. The unit of aggregation is the row
/// quantity; totals are always derived from current rows, never
/// stored.
#[derive(Clone)]
pub struct CartService {
    storage: MemStorage,
}

impl CartService {
    /// Creates a cart service over the given store.
    pub fn new(storage: MemStorage) -> Self {
        Self { storage }
    }

    /// Appends a new cart row. Always inserts — deduplication by
    /// (user, menu item) is the caller-level policy
    /// [`add_or_increment`](Self::add_or_increment), not a property of
    /// this operation.
    #[tracing::instrument(skip(self, new))]
    pub async fn add_to_cart(&self, new: NewCartItem) -> Result<CartItem, DomainError> {
        if new.quantity < 1 {
            return Err(DomainError::InvalidQuantity {
                quantity: new.quantity,
            });
        }

        metrics::counter!("cart_items_added_total").increment(1);

        let mut tables = self.storage.write().await;
        Ok(tables.cart_items.insert(|id| CartItem {
            id,
            user_id: new.user_id,
            menu_item_id: new.menu_item_id,
            quantity: new.quantity,
            price: new.price,
            created_at: Utc::now(),
        }))
    }

    /// The add-to-cart policy the client uses: if the user already has
    /// a row for this menu item, bump its quantity by one; otherwise
    /// insert a fresh row with quantity 1 and the menu item's current
    /// price as the snapshot.
    #[tracing::instrument(skip(self))]
    pub async fn add_or_increment(
        &self,
        user_id: UserId,
        menu_item_id: MenuItemId,
    ) -> Result<CartItem, DomainError> {
        let mut tables = self.storage.write().await;

        let existing = tables
            .cart_items
            .iter()
            .find(|row| row.user_id == user_id && row.menu_item_id == menu_item_id)
            .map(|row| row.id);

        if let Some(id) = existing
            && let Some(updated) = tables.cart_items.update(id, |row| row.quantity += 1)
        {
            return Ok(updated);
        }

        let price = tables
            .menu_items
            .get(menu_item_id)
            .map(|item| item.price)
            .ok_or(DomainError::MenuItemNotFound { id: menu_item_id })?;

        metrics::counter!("cart_items_added_total").increment(1);

        Ok(tables.cart_items.insert(|id| CartItem {
            id,
            user_id,
            menu_item_id,
            quantity: 1,
            price,
            created_at: Utc::now(),
        }))
    }

    /// Overwrites a row's quantity, or deletes the row when the new
    /// quantity is ≤ 0. A row never persists at quantity zero.
    #[tracing::instrument(skip(self))]
    pub async fn update_quantity(&self, id: CartItemId, quantity: i32) -> CartItemUpdate {
        let mut tables = self.storage.write().await;

        if tables.cart_items.get(id).is_none() {
            return CartItemUpdate::NotFound;
        }

        if quantity <= 0 {
            tables.cart_items.remove(id);
            return CartItemUpdate::Removed;
        }

        match tables.cart_items.update(id, |row| row.quantity = quantity) {
            Some(row) => CartItemUpdate::Updated(row),
            None => CartItemUpdate::NotFound,
        }
    }

    /// Deletes a row, reporting whether it existed.
    #[tracing::instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: CartItemId) -> bool {
        let mut tables = self.storage.write().await;
        tables.cart_items.remove(id).is_some()
    }

    /// Deletes every cart row owned by the user and returns how many
    /// there were. Clearing an already-empty cart is a success.
    #[tracing::instrument(skip(self))]
    pub async fn clear_cart(&self, user_id: UserId) -> usize {
        let mut tables = self.storage.write().await;

        let ids: Vec<CartItemId> = tables
            .cart_items
            .iter()
            .filter(|row| row.user_id == user_id)
            .map(|row| row.id)
            .collect();

        for id in &ids {
            tables.cart_items.remove(*id);
        }
        ids.len()
    }

    /// The user's cart rows joined to their menu items. Rows whose
    /// menu item has since been deleted are silently dropped.
    #[tracing::instrument(skip(self))]
    pub async fn items_with_details(&self, user_id: UserId) -> Vec<CartItemWithMenuItem> {
        let tables = self.storage.read().await;
        tables
            .cart_items
            .iter()
            .filter(|row| row.user_id == user_id)
            .filter_map(|row| {
                let menu_item = tables.menu_items.get(row.menu_item_id)?.clone();
                Some(CartItemWithMenuItem {
                    item: row.clone(),
                    menu_item,
                })
            })
            .collect()
    }

    /// Derived totals over the rows a client would see (rows with a
    /// live menu item): total = Σ price × quantity, count = Σ quantity.
    /// Exact decimal arithmetic, recomputed on every call.
    #[tracing::instrument(skip(self))]
    pub async fn summary(&self, user_id: UserId) -> CartSummary {
        let tables = self.storage.read().await;

        let mut total = Decimal::ZERO;
        let mut item_count = 0;
        for row in tables
            .cart_items
            .iter()
            .filter(|row| row.user_id == user_id)
            .filter(|row| tables.menu_items.get(row.menu_item_id).is_some())
        {
            total += row.price * Decimal::from(row.quantity);
            item_count += row.quantity;
        }

        CartSummary { total, item_count }
    }
}
