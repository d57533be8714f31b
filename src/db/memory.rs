/// In-memory `InventoryStore` used by the service tests. It models the inner
/// joins, the `CURRENT_DATE` filters, the ref_barang foreign key and date
/// checks, and buffers transactional inserts until commit.
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Local, NaiveDate, Utc};

use super::store::{ExpiryWindow, InventoryStore, RefBarangTransaction, Relation};
use crate::error::{AppError, AppResult};
use crate::models::{BarangLengkapModel, BarangRelasiModel, NewRefBarang, RefBarangExpiryModel};

#[derive(Debug, Clone)]
pub struct BarangRecord {
    pub id_barang: i32,
    pub nama_barang: String,
    pub foto_barang: String,
    pub harga: String,
    pub id_kategori: i32,
    pub id_material: i32,
    pub id_jenis: i32,
}

#[derive(Debug, Clone)]
pub struct RefBarangRecord {
    pub id_ref_barang: i64,
    pub id_barang: i32,
    pub stok: String,
    pub expired: NaiveDate,
    pub no_batch: String,
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Tables {
    pub barang: Vec<BarangRecord>,
    pub kategori: HashMap<i32, String>,
    pub material: HashMap<i32, String>,
    pub jenis: HashMap<i32, String>,
    pub ref_barang: Vec<RefBarangRecord>,
    next_ref_id: i64,
}

impl Tables {
    fn check_ref(&self, data: &NewRefBarang) -> AppResult<NaiveDate> {
        if !self.barang.iter().any(|b| b.id_barang == data.id_barang) {
            return Err(constraint(format!(
                "Cannot add or update a child row: id_barang {} does not exist",
                data.id_barang
            )));
        }
        if data.no_batch.is_empty() {
            return Err(constraint("Column 'no_batch' cannot be empty".to_string()));
        }
        NaiveDate::parse_from_str(&data.expired, "%Y-%m-%d")
            .map_err(|_| constraint(format!("Incorrect date value: '{}'", data.expired)))
    }

    fn push_ref(&mut self, data: &NewRefBarang, expired: NaiveDate) {
        self.next_ref_id += 1;
        self.ref_barang.push(RefBarangRecord {
            id_ref_barang: self.next_ref_id,
            id_barang: data.id_barang,
            stok: data.stok.to_string(),
            expired,
            no_batch: data.no_batch.clone(),
            created_date: Utc::now(),
        });
    }

    fn barang(&self, id_barang: i32) -> Option<&BarangRecord> {
        self.barang.iter().find(|b| b.id_barang == id_barang)
    }
}

/// Mirrors `expired <op> CURRENT_DATE`; both windows include today.
fn window_includes(window: ExpiryWindow, expired: NaiveDate, today: NaiveDate) -> bool {
    match window {
        ExpiryWindow::Expired => expired <= today,
        ExpiryWindow::NotExpired => expired >= today,
    }
}

fn constraint(message: String) -> AppError {
    AppError::Database(sqlx::Error::Protocol(message))
}

#[derive(Clone, Default)]
pub struct MemoryInventoryStore {
    tables: Arc<Mutex<Tables>>,
    unavailable: Arc<Mutex<bool>>,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    /// Makes every subsequent call fail as if the database were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap() = unavailable;
    }

    pub fn add_kategori(&self, id: i32, nama: &str) {
        self.tables().kategori.insert(id, nama.to_string());
    }

    pub fn add_material(&self, id: i32, nama: &str) {
        self.tables().material.insert(id, nama.to_string());
    }

    pub fn add_jenis(&self, id: i32, nama: &str) {
        self.tables().jenis.insert(id, nama.to_string());
    }

    pub fn add_barang(&self, barang: BarangRecord) {
        self.tables().barang.push(barang);
    }

    /// Inserts a ref_barang row directly, bypassing constraint checks.
    pub fn add_ref(&self, id_barang: i32, stok: &str, expired: NaiveDate, no_batch: &str) {
        let mut tables = self.tables();
        tables.next_ref_id += 1;
        let id_ref_barang = tables.next_ref_id;
        tables.ref_barang.push(RefBarangRecord {
            id_ref_barang,
            id_barang,
            stok: stok.to_string(),
            expired,
            no_batch: no_batch.to_string(),
            created_date: Utc::now(),
        });
    }

    fn check_available(&self) -> AppResult<()> {
        if *self.unavailable.lock().unwrap() {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[tonic::async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn barang_lengkap(&self) -> AppResult<Vec<BarangLengkapModel>> {
        self.check_available()?;
        let tables = self.tables();
        let rows: Vec<BarangLengkapModel> = tables
            .ref_barang
            .iter()
            .filter_map(|rb| {
                let b = tables.barang(rb.id_barang)?;
                let nama_kategori = tables.kategori.get(&b.id_kategori)?;
                tables.material.get(&b.id_material)?;
                let nama_jenis = tables.jenis.get(&b.id_jenis)?;
                Some(BarangLengkapModel {
                    nama_barang: b.nama_barang.clone(),
                    foto_barang: b.foto_barang.clone(),
                    harga: b.harga.clone(),
                    nama_kategori: nama_kategori.clone(),
                    nama_jenis: nama_jenis.clone(),
                    no_batch: rb.no_batch.clone(),
                })
            })
            .collect();
        Ok(rows)
    }

    async fn barang_with(&self, relation: Relation) -> AppResult<Vec<BarangRelasiModel>> {
        self.check_available()?;
        let tables = self.tables();
        let row = |b: &BarangRecord, nama_relasi: &str| BarangRelasiModel {
            nama_barang: b.nama_barang.clone(),
            foto_barang: b.foto_barang.clone(),
            nama_relasi: nama_relasi.to_string(),
            harga: b.harga.clone(),
        };
        let rows: Vec<BarangRelasiModel> = match relation {
            Relation::Kategori => tables
                .barang
                .iter()
                .filter_map(|b| tables.kategori.get(&b.id_kategori).map(|n| row(b, n.as_str())))
                .collect(),
            Relation::Jenis => tables
                .barang
                .iter()
                .filter_map(|b| tables.jenis.get(&b.id_jenis).map(|n| row(b, n.as_str())))
                .collect(),
            Relation::Material => tables
                .barang
                .iter()
                .filter_map(|b| tables.material.get(&b.id_material).map(|n| row(b, n.as_str())))
                .collect(),
            Relation::Batch => tables
                .barang
                .iter()
                .flat_map(|b| {
                    tables
                        .ref_barang
                        .iter()
                        .filter(move |rb| rb.id_barang == b.id_barang)
                        .map(move |rb| row(b, rb.no_batch.as_str()))
                })
                .collect(),
        };
        Ok(rows)
    }

    async fn ref_barang_by_expiry(
        &self,
        window: ExpiryWindow,
    ) -> AppResult<Vec<RefBarangExpiryModel>> {
        self.check_available()?;
        let today = Local::now().date_naive();
        let tables = self.tables();
        let rows: Vec<RefBarangExpiryModel> = tables
            .ref_barang
            .iter()
            .filter(|rb| window_includes(window, rb.expired, today))
            .filter_map(|rb| {
                let b = tables.barang(rb.id_barang)?;
                Some(RefBarangExpiryModel {
                    nama_barang: b.nama_barang.clone(),
                    stok: rb.stok.clone(),
                    no_batch: rb.no_batch.clone(),
                    expired: rb.expired.format("%Y-%m-%d").to_string(),
                })
            })
            .collect();
        Ok(rows)
    }

    async fn update_harga_by_batch(&self, harga: i32, no_batch: &str) -> AppResult<u64> {
        self.check_available()?;
        let mut tables = self.tables();
        let ids: Vec<i32> = tables
            .ref_barang
            .iter()
            .filter(|rb| rb.no_batch == no_batch)
            .map(|rb| rb.id_barang)
            .collect();
        let mut affected = 0;
        for b in tables.barang.iter_mut().filter(|b| ids.contains(&b.id_barang)) {
            b.harga = harga.to_string();
            affected += 1;
        }
        Ok(affected)
    }

    async fn begin(&self) -> AppResult<Box<dyn RefBarangTransaction>> {
        self.check_available()?;
        Ok(Box::new(MemoryRefBarangTransaction {
            tables: self.tables.clone(),
            pending: Vec::new(),
        }))
    }

    async fn ping(&self) -> AppResult<()> {
        self.check_available()
    }
}

pub struct MemoryRefBarangTransaction {
    tables: Arc<Mutex<Tables>>,
    pending: Vec<(NewRefBarang, NaiveDate)>,
}

#[tonic::async_trait]
impl RefBarangTransaction for MemoryRefBarangTransaction {
    async fn insert_ref(&mut self, data: &NewRefBarang) -> AppResult<()> {
        let expired = self.tables.lock().unwrap().check_ref(data)?;
        self.pending.push((data.clone(), expired));
        Ok(())
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let mut tables = self.tables.lock().unwrap();
        for (data, expired) in &self.pending {
            tables.push_ref(data, *expired);
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_window_boundary_overlap() {
        let today = date("2024-06-15");

        assert!(window_includes(ExpiryWindow::Expired, today, today));
        assert!(window_includes(ExpiryWindow::NotExpired, today, today));

        let past = date("2024-06-14");
        assert!(window_includes(ExpiryWindow::Expired, past, today));
        assert!(!window_includes(ExpiryWindow::NotExpired, past, today));

        let future = date("2024-06-16");
        assert!(!window_includes(ExpiryWindow::Expired, future, today));
        assert!(window_includes(ExpiryWindow::NotExpired, future, today));
    }
}
