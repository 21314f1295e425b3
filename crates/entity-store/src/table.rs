//! Generic keyed table with synthetic identity assignment.

use std::collections::BTreeMap;

use common::EntityKey;

/// A keyed in-memory table owning the canonical copy of each row.
///
/// Ids are assigned sequentially starting at 1 and are never reused,
/// even after a row is removed. Iteration order is id order, which
/// equals insertion order because ids are monotonic.
#[derive(Debug, Clone)]
pub struct Table<K: EntityKey, V> {
    rows: BTreeMap<K, V>,
    next_id: i64,
}

impl<K: EntityKey, V: Clone> Table<K, V> {
    /// Creates an empty table with the id counter at 1.
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assigns the next id, stores the row `build` produces for it,
    /// and returns a snapshot of the stored row. Never fails.
    pub fn insert(&mut self, build: impl FnOnce(K) -> V) -> V {
        let id = K::from_raw(self.next_id);
        self.next_id += 1;

        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    /// Looks up a row by id.
    pub fn get(&self, id: K) -> Option<&V> {
        self.rows.get(&id)
    }

    /// Applies `apply` to the stored row in place and returns a
    /// snapshot of the result, or `None` if the id is absent.
    pub fn update(&mut self, id: K, apply: impl FnOnce(&mut V)) -> Option<V> {
        let row = self.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    /// Removes a row, returning it if it existed.
    pub fn remove(&mut self, id: K) -> Option<V> {
        self.rows.remove(&id)
    }

    /// Iterates all rows in insertion order. Each call starts a fresh
    /// pass; this is a re-scan, not a cursor.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.rows.values()
    }

    /// Number of rows currently stored.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<K: EntityKey, V: Clone> Default for Table<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::MenuItemId;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: MenuItemId,
        name: String,
    }

    fn named(name: &str) -> impl FnOnce(MenuItemId) -> Row + '_ {
        move |id| Row {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn insert_assigns_sequential_ids_from_one() {
        let mut table: Table<MenuItemId, Row> = Table::new();

        let a = table.insert(named("a"));
        let b = table.insert(named("b"));

        assert_eq!(a.id, MenuItemId::from(1));
        assert_eq!(b.id, MenuItemId::from(2));
    }

    #[test]
    fn ids_are_never_reused_after_remove() {
        let mut table: Table<MenuItemId, Row> = Table::new();

        let a = table.insert(named("a"));
        table.remove(a.id);
        let b = table.insert(named("b"));

        assert_eq!(b.id, MenuItemId::from(2));
    }

    #[test]
    fn get_returns_stored_row() {
        let mut table: Table<MenuItemId, Row> = Table::new();
        let a = table.insert(named("a"));

        assert_eq!(table.get(a.id), Some(&a));
        assert_eq!(table.get(MenuItemId::from(99)), None);
    }

    #[test]
    fn update_mutates_in_place_and_returns_snapshot() {
        let mut table: Table<MenuItemId, Row> = Table::new();
        let a = table.insert(named("a"));

        let updated = table.update(a.id, |row| row.name = "renamed".to_string());
        assert_eq!(updated.unwrap().name, "renamed");
        assert_eq!(table.get(a.id).unwrap().name, "renamed");
    }

    #[test]
    fn update_absent_id_is_none() {
        let mut table: Table<MenuItemId, Row> = Table::new();
        assert!(
            table
                .update(MenuItemId::from(1), |row| row.name.clear())
                .is_none()
        );
    }

    #[test]
    fn remove_reports_prior_existence() {
        let mut table: Table<MenuItemId, Row> = Table::new();
        let a = table.insert(named("a"));

        assert!(table.remove(a.id).is_some());
        assert!(table.remove(a.id).is_none());
    }

    #[test]
    fn iter_yields_insertion_order_and_restarts() {
        let mut table: Table<MenuItemId, Row> = Table::new();
        table.insert(named("first"));
        table.insert(named("second"));
        table.insert(named("third"));

        let names: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);

        // A second pass sees the same rows from the start.
        assert_eq!(table.iter().count(), 3);
    }

    #[test]
    fn insert_returns_snapshot_decoupled_from_store() {
        let mut table: Table<MenuItemId, Row> = Table::new();
        let mut a = table.insert(named("a"));

        a.name = "mutated locally".to_string();
        assert_eq!(table.get(a.id).unwrap().name, "a");
    }
}
