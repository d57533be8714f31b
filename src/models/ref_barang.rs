use sqlx::FromRow;

use super::parse_int_column;
use crate::error::AppResult;

/// ref_barang joined with barang, filtered by expiry date.
#[derive(Debug, Clone, FromRow)]
pub struct RefBarangExpiryModel {
    pub nama_barang: String,
    pub stok: String,
    pub no_batch: String,
    pub expired: String,
}

impl RefBarangExpiryModel {
    pub fn stok(&self) -> AppResult<i32> {
        parse_int_column("stok", &self.stok)
    }
}

/// One ref_barang row to insert. `created_date` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRefBarang {
    pub id_barang: i32,
    pub stok: i32,
    pub expired: String,
    pub no_batch: String,
}
