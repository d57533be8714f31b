pub mod barang;
pub mod ref_barang;

pub use barang::*;
pub use ref_barang::*;

use crate::error::{AppError, AppResult};

/// Parses a text column holding a base-10 integer (`harga`, `stok`).
pub fn parse_int_column(column: &'static str, raw: &str) -> AppResult<i32> {
    raw.parse::<i32>().map_err(|_| AppError::DataShape {
        column,
        value: raw.to_string(),
    })
}
