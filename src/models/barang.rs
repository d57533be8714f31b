use sqlx::FromRow;

use super::parse_int_column;
use crate::error::AppResult;

/// barang joined with ref_barang, kategori, material and jenis.
#[derive(Debug, Clone, FromRow)]
pub struct BarangLengkapModel {
    pub nama_barang: String,
    pub foto_barang: String,
    pub harga: String,
    pub nama_kategori: String,
    pub nama_jenis: String,
    pub no_batch: String,
}

impl BarangLengkapModel {
    pub fn harga(&self) -> AppResult<i32> {
        parse_int_column("harga", &self.harga)
    }
}

/// barang joined with a single relation; `nama_relasi` is the name column of
/// that relation (nama_kategori, nama_jenis, nama_material or no_batch).
#[derive(Debug, Clone, FromRow)]
pub struct BarangRelasiModel {
    pub nama_barang: String,
    pub foto_barang: String,
    pub nama_relasi: String,
    pub harga: String,
}

impl BarangRelasiModel {
    pub fn harga(&self) -> AppResult<i32> {
        parse_int_column("harga", &self.harga)
    }
}
