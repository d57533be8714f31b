pub mod mysql;
pub mod pool;
pub mod store;

#[cfg(test)]
pub mod memory;

pub use mysql::MySqlInventoryStore;
pub use pool::create_pool;
pub use store::{ExpiryWindow, InventoryStore, RefBarangTransaction, Relation};
