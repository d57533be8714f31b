use crate::error::AppResult;
use crate::models::{BarangLengkapModel, BarangRelasiModel, NewRefBarang, RefBarangExpiryModel};

/// Relation joined against `barang` for the single-join read views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Kategori,
    Jenis,
    Material,
    Batch,
}

/// Which side of `CURRENT_DATE` a ref_barang row must fall on.
///
/// Both windows include today, so a batch expiring today is reported as
/// expired and as not expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryWindow {
    Expired,
    NotExpired,
}

impl ExpiryWindow {
    /// Comparison operator applied as `expired <op> CURRENT_DATE`.
    pub fn operator(&self) -> &'static str {
        match self {
            ExpiryWindow::Expired => "<=",
            ExpiryWindow::NotExpired => ">=",
        }
    }
}

/// Access to the inventory tables. Every method is a single statement, except
/// `begin` which opens a transaction for bulk ref_barang inserts.
#[tonic::async_trait]
pub trait InventoryStore: Send + Sync {
    /// barang ⋈ ref_barang ⋈ kategori ⋈ material ⋈ jenis
    async fn barang_lengkap(&self) -> AppResult<Vec<BarangLengkapModel>>;

    async fn barang_with(&self, relation: Relation) -> AppResult<Vec<BarangRelasiModel>>;

    async fn ref_barang_by_expiry(&self, window: ExpiryWindow)
        -> AppResult<Vec<RefBarangExpiryModel>>;

    /// Sets `barang.harga` for every item having a batch `no_batch`.
    /// Returns the affected row count, which may be zero.
    async fn update_harga_by_batch(&self, harga: i32, no_batch: &str) -> AppResult<u64>;

    async fn begin(&self) -> AppResult<Box<dyn RefBarangTransaction>>;

    /// Round-trips to the store; used by the health service.
    async fn ping(&self) -> AppResult<()>;
}

/// An open transaction. Dropping it without `commit` discards every insert.
#[tonic::async_trait]
pub trait RefBarangTransaction: Send {
    async fn insert_ref(&mut self, data: &NewRefBarang) -> AppResult<()>;

    async fn commit(self: Box<Self>) -> AppResult<()>;

    async fn rollback(self: Box<Self>) -> AppResult<()>;
}
