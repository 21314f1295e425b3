//! The full set of entity tables plus the startup sample data.

use common::{
    CartItem, CartItemId, Category, CategoryId, MenuItem, MenuItemId, Order, OrderId, OrderItem,
    OrderItemId, SavedItem, SavedItemId, User, UserId,
};
use rust_decimal::Decimal;

use crate::table::Table;

/// One table per entity type. Domain services operate on this struct
/// through a [`MemStorage`](crate::MemStorage) guard, so every
/// operation sees a consistent view of all tables at once.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub users: Table<UserId, User>,
    pub categories: Table<CategoryId, Category>,
    pub menu_items: Table<MenuItemId, MenuItem>,
    pub cart_items: Table<CartItemId, CartItem>,
    pub orders: Table<OrderId, Order>,
    pub order_items: Table<OrderItemId, OrderItem>,
    pub saved_items: Table<SavedItemId, SavedItem>,
}

impl Tables {
    /// Creates an empty set of tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the fixed demo data served at startup: six categories and
    /// two menu items. The seed reproduces the upstream data exactly,
    /// including its category assignments.
    pub fn load_sample_data(&mut self) {
        let seed_categories = [
            ("All", "all", "grid"),
            ("Rice", "rice", "rice"),
            ("Snacks", "snacks", "snack"),
            ("Drinks", "drinks", "drink"),
            ("Burgers", "burgers", "burger"),
            ("Pasta", "pasta", "pasta"),
        ];

        for (name, slug, icon) in seed_categories {
            self.categories.insert(|id| Category {
                id,
                name: name.to_string(),
                slug: slug.to_string(),
                icon: Some(icon.to_string()),
            });
        }

        self.menu_items.insert(|id| MenuItem {
            id,
            name: "Yam fries".to_string(),
            description: Some("Crispy golden yam fries served hot".to_string()),
            price: Decimal::new(3000, 2),
            image: Some("https://images.unsplash.com/photo-1573080496219-bb080dd4f877".to_string()),
            rating: Decimal::new(45, 1),
            preparation_time: 15,
            calories: Some(200),
            restaurant: "Iya Oyo".to_string(),
            category_id: Some(CategoryId::from(3)),
            is_available: true,
            is_featured: true,
            is_popular: false,
        });

        self.menu_items.insert(|id| MenuItem {
            id,
            name: "Fried rice and turkey".to_string(),
            description: Some("Colorful fried rice with seasoned turkey pieces".to_string()),
            price: Decimal::new(3000, 2),
            image: Some("https://images.unsplash.com/photo-1603133872878-684f208fb84b".to_string()),
            rating: Decimal::new(45, 1),
            preparation_time: 15,
            calories: Some(500),
            restaurant: "Iya Oyo".to_string(),
            category_id: Some(CategoryId::from(2)),
            is_available: true,
            is_featured: true,
            is_popular: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_seeds_six_categories_and_two_items() {
        let mut tables = Tables::new();
        tables.load_sample_data();

        assert_eq!(tables.categories.len(), 6);
        assert_eq!(tables.menu_items.len(), 2);
        assert!(tables.users.is_empty());
        assert!(tables.cart_items.is_empty());
    }

    #[test]
    fn seed_categories_keep_their_upstream_ids() {
        let mut tables = Tables::new();
        tables.load_sample_data();

        let snacks = tables.categories.get(CategoryId::from(3)).unwrap();
        assert_eq!(snacks.slug, "snacks");

        let pasta = tables.categories.get(CategoryId::from(6)).unwrap();
        assert_eq!(pasta.slug, "pasta");
    }

    #[test]
    fn seed_prices_are_exact_decimals() {
        let mut tables = Tables::new();
        tables.load_sample_data();

        let fries = tables.menu_items.get(MenuItemId::from(1)).unwrap();
        assert_eq!(fries.price.to_string(), "30.00");
        assert_eq!(fries.rating.to_string(), "4.5");
    }

    #[test]
    fn seeding_does_not_disturb_later_id_assignment() {
        let mut tables = Tables::new();
        tables.load_sample_data();

        let next = tables.categories.insert(|id| Category {
            id,
            name: "Soups".to_string(),
            slug: "soups".to_string(),
            icon: None,
        });
        assert_eq!(next.id, CategoryId::from(7));
    }
}
