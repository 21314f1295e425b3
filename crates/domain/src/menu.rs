//! Menu and category queries.

use common::{
    Category, CategoryId, MenuItem, MenuItemId, MenuItemUpdate, MenuItemWithCategory, NewCategory,
    NewMenuItem,
};
use entity_store::{MemStorage, Tables};

/// Joins a menu item with its own category, when one is set and still
/// exists. A dangling category id yields `category: None`, never an
/// error.
pub(crate) fn join_category(tables: &Tables, item: MenuItem) -> MenuItemWithCategory {
    let category = item
        .category_id
        .and_then(|id| tables.categories.get(id).cloned());
    MenuItemWithCategory { item, category }
}

/// Read-mostly menu and category operations.
#[derive(Clone)]
pub struct MenuService {
    storage: MemStorage,
}

impl MenuService {
    /// Creates a menu service over the given store.
    pub fn new(storage: MemStorage) -> Self {
        Self { storage }
    }

    /// All menu items, each joined with its category.
    #[tracing::instrument(skip(self))]
    pub async fn list_menu_items(&self) -> Vec<MenuItemWithCategory> {
        let tables = self.storage.read().await;
        tables
            .menu_items
            .iter()
            .cloned()
            .map(|item| join_category(&tables, item))
            .collect()
    }

    /// Menu items flagged as featured.
    #[tracing::instrument(skip(self))]
    pub async fn featured_items(&self) -> Vec<MenuItemWithCategory> {
        let tables = self.storage.read().await;
        tables
            .menu_items
            .iter()
            .filter(|item| item.is_featured)
            .cloned()
            .map(|item| join_category(&tables, item))
            .collect()
    }

    /// Menu items flagged as popular.
    #[tracing::instrument(skip(self))]
    pub async fn popular_items(&self) -> Vec<MenuItemWithCategory> {
        let tables = self.storage.read().await;
        tables
            .menu_items
            .iter()
            .filter(|item| item.is_popular)
            .cloned()
            .map(|item| join_category(&tables, item))
            .collect()
    }

    /// Menu items whose `category_id` equals `category_id`.
    ///
    /// The joined category is looked up by the *requested* id, not each
    /// item's own field. With consistent data the two are identical;
    /// with inconsistent seeds the request parameter wins. Deliberately
    /// kept that way.
    #[tracing::instrument(skip(self))]
    pub async fn items_by_category(&self, category_id: CategoryId) -> Vec<MenuItemWithCategory> {
        let tables = self.storage.read().await;
        let category = tables.categories.get(category_id).cloned();

        tables
            .menu_items
            .iter()
            .filter(|item| item.category_id == Some(category_id))
            .cloned()
            .map(|item| MenuItemWithCategory {
                item,
                category: category.clone(),
            })
            .collect()
    }

    /// Case-insensitive substring search over name, restaurant, and
    /// description. An absent description simply never matches.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Vec<MenuItemWithCategory> {
        metrics::counter!("menu_searches_total").increment(1);

        let needle = query.to_lowercase();
        let tables = self.storage.read().await;
        tables
            .menu_items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.restaurant.to_lowercase().contains(&needle)
                    || item
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .cloned()
            .map(|item| join_category(&tables, item))
            .collect()
    }

    /// Single menu item lookup with its category join.
    #[tracing::instrument(skip(self))]
    pub async fn menu_item(&self, id: MenuItemId) -> Option<MenuItemWithCategory> {
        let tables = self.storage.read().await;
        let item = tables.menu_items.get(id).cloned()?;
        Some(join_category(&tables, item))
    }

    /// All categories in insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn list_categories(&self) -> Vec<Category> {
        let tables = self.storage.read().await;
        tables.categories.iter().cloned().collect()
    }

    /// Single category lookup.
    #[tracing::instrument(skip(self))]
    pub async fn category(&self, id: CategoryId) -> Option<Category> {
        let tables = self.storage.read().await;
        tables.categories.get(id).cloned()
    }

    /// Inserts a new menu item.
    #[tracing::instrument(skip(self, new))]
    pub async fn create_menu_item(&self, new: NewMenuItem) -> MenuItem {
        let mut tables = self.storage.write().await;
        tables.menu_items.insert(|id| MenuItem {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            image: new.image,
            rating: new.rating,
            preparation_time: new.preparation_time,
            calories: new.calories,
            restaurant: new.restaurant,
            category_id: new.category_id,
            is_available: new.is_available,
            is_featured: new.is_featured,
            is_popular: new.is_popular,
        })
    }

    /// Applies a field patch to a menu item. `None` when the id is
    /// absent.
    #[tracing::instrument(skip(self, updates))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        updates: MenuItemUpdate,
    ) -> Option<MenuItem> {
        let mut tables = self.storage.write().await;
        tables.menu_items.update(id, |item| {
            if let Some(name) = updates.name {
                item.name = name;
            }
            if let Some(description) = updates.description {
                item.description = Some(description);
            }
            if let Some(price) = updates.price {
                item.price = price;
            }
            if let Some(image) = updates.image {
                item.image = Some(image);
            }
            if let Some(rating) = updates.rating {
                item.rating = rating;
            }
            if let Some(preparation_time) = updates.preparation_time {
                item.preparation_time = preparation_time;
            }
            if let Some(calories) = updates.calories {
                item.calories = Some(calories);
            }
            if let Some(restaurant) = updates.restaurant {
                item.restaurant = restaurant;
            }
            if let Some(category_id) = updates.category_id {
                item.category_id = Some(category_id);
            }
            if let Some(is_available) = updates.is_available {
                item.is_available = is_available;
            }
            if let Some(is_featured) = updates.is_featured {
                item.is_featured = is_featured;
            }
            if let Some(is_popular) = updates.is_popular {
                item.is_popular = is_popular;
            }
        })
    }

    /// Inserts a new category.
    #[tracing::instrument(skip(self, new))]
    pub async fn create_category(&self, new: NewCategory) -> Category {
        let mut tables = self.storage.write().await;
        tables.categories.insert(|id| Category {
            id,
            name: new.name,
            slug: new.slug,
            icon: new.icon,
        })
    }
}
