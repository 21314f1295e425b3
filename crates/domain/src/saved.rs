//! Saved-item (bookmark) operations.

use chrono::Utc;
use common::{MenuItemId, MenuItemWithCategory, SavedItem, UserId};
use entity_store::MemStorage;

use crate::menu::join_category;

/// Bookmark toggling. At most one saved row exists per
/// (user, menu item) pair; this service owns that invariant rather
/// than leaving it to callers.
#[derive(Clone)]
pub struct SavedItemService {
    storage: MemStorage,
}

impl SavedItemService {
    /// Creates a saved-item service over the given store.
    pub fn new(storage: MemStorage) -> Self {
        Self { storage }
    }

    /// The user's saved menu items with their category joins. Saved
    /// rows whose menu item has been deleted are silently dropped.
    #[tracing::instrument(skip(self))]
    pub async fn saved_menu_items(&self, user_id: UserId) -> Vec<MenuItemWithCategory> {
        let tables = self.storage.read().await;
        tables
            .saved_items
            .iter()
            .filter(|row| row.user_id == user_id)
            .filter_map(|row| tables.menu_items.get(row.menu_item_id).cloned())
            .map(|item| join_category(&tables, item))
            .collect()
    }

    /// Saves a menu item for the user. Saving an already-saved item
    /// returns the existing row unchanged, so the pair invariant holds
    /// no matter how often callers race the toggle.
    #[tracing::instrument(skip(self))]
    pub async fn save(&self, user_id: UserId, menu_item_id: MenuItemId) -> SavedItem {
        let mut tables = self.storage.write().await;

        if let Some(existing) = tables
            .saved_items
            .iter()
            .find(|row| row.user_id == user_id && row.menu_item_id == menu_item_id)
        {
            return existing.clone();
        }

        tables.saved_items.insert(|id| SavedItem {
            id,
            user_id,
            menu_item_id,
            created_at: Utc::now(),
        })
    }

    /// Removes the unique saved row for the pair, reporting whether
    /// one was found.
    #[tracing::instrument(skip(self))]
    pub async fn unsave(&self, user_id: UserId, menu_item_id: MenuItemId) -> bool {
        let mut tables = self.storage.write().await;

        let found = tables
            .saved_items
            .iter()
            .find(|row| row.user_id == user_id && row.menu_item_id == menu_item_id)
            .map(|row| row.id);

        match found {
            Some(id) => tables.saved_items.remove(id).is_some(),
            None => false,
        }
    }
}
