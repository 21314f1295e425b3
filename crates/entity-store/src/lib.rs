//! In-memory entity store for the food-ordering backend.
//!
//! One [`Table`] per entity type, grouped into [`Tables`] and shared
//! behind a [`MemStorage`] handle. State lives for the process
//! lifetime only; a restart wipes everything except the fixed sample
//! data loaded at startup.

pub mod storage;
pub mod table;
pub mod tables;

pub use storage::MemStorage;
pub use table::Table;
pub use tables::Tables;
