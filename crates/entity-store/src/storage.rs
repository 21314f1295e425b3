//! Shared handle over the entity tables.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::tables::Tables;

/// Cloneable handle to the process-wide entity tables.
///
/// The store is constructed once at startup and injected into the
/// domain services; tests build a fresh instance each for isolation.
/// Every domain operation acquires the lock exactly once and runs to
/// completion under it, which serializes operations into a total order
/// and makes multi-table steps (order fan-out, joins) atomic with
/// respect to each other. No guard is held across an await point.
#[derive(Clone, Default)]
pub struct MemStorage {
    tables: Arc<RwLock<Tables>>,
}

impl MemStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the startup sample data.
    pub fn with_sample_data() -> Self {
        let mut tables = Tables::new();
        tables.load_sample_data();
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    /// Acquires a shared read guard over all tables.
    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    /// Acquires an exclusive write guard over all tables.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
