use sqlx::{MySql, MySqlPool, Transaction};

use super::store::{ExpiryWindow, InventoryStore, RefBarangTransaction, Relation};
use crate::error::AppResult;
use crate::models::{BarangLengkapModel, BarangRelasiModel, NewRefBarang, RefBarangExpiryModel};

// harga and stok are stored as text in some deployments and as integers in
// others; CAST keeps the decoded type a string either way.
const SELECT_BARANG_LENGKAP: &str = "\
    SELECT b.nama_barang, b.foto_barang, CAST(b.harga AS CHAR) AS harga, \
    k.nama_kategori, j.nama_jenis, rb.no_batch \
    FROM ref_barang rb \
    INNER JOIN barang b ON rb.id_barang = b.id_barang \
    INNER JOIN kategori k ON b.id_kategori = k.id_kategori \
    INNER JOIN material m ON b.id_material = m.id_material \
    INNER JOIN jenis j ON b.id_jenis = j.id_jenis";

const UPDATE_HARGA_BY_BATCH: &str = "\
    UPDATE barang b INNER JOIN ref_barang rb ON rb.id_barang = b.id_barang \
    SET b.harga = ? WHERE rb.no_batch = ?";

const INSERT_REF_BARANG: &str = "\
    INSERT INTO ref_barang (id_ref_barang, id_barang, stok, expired, no_batch, created_date) \
    VALUES (NULL, ?, ?, ?, ?, CURRENT_TIMESTAMP())";

impl Relation {
    fn select_sql(&self) -> &'static str {
        match self {
            Relation::Kategori => {
                "SELECT b.nama_barang, b.foto_barang, k.nama_kategori AS nama_relasi, \
                 CAST(b.harga AS CHAR) AS harga \
                 FROM barang b INNER JOIN kategori k ON b.id_kategori = k.id_kategori"
            }
            Relation::Jenis => {
                "SELECT b.nama_barang, b.foto_barang, j.nama_jenis AS nama_relasi, \
                 CAST(b.harga AS CHAR) AS harga \
                 FROM barang b INNER JOIN jenis j ON b.id_jenis = j.id_jenis"
            }
            Relation::Material => {
                "SELECT b.nama_barang, b.foto_barang, m.nama_material AS nama_relasi, \
                 CAST(b.harga AS CHAR) AS harga \
                 FROM barang b INNER JOIN material m ON b.id_material = m.id_material"
            }
            Relation::Batch => {
                "SELECT b.nama_barang, b.foto_barang, rb.no_batch AS nama_relasi, \
                 CAST(b.harga AS CHAR) AS harga \
                 FROM barang b INNER JOIN ref_barang rb ON b.id_barang = rb.id_barang"
            }
        }
    }
}

fn select_by_expiry_sql(window: ExpiryWindow) -> String {
    format!(
        "SELECT b.nama_barang, CAST(rb.stok AS CHAR) AS stok, rb.no_batch, \
         CAST(rb.expired AS CHAR) AS expired \
         FROM ref_barang rb INNER JOIN barang b ON rb.id_barang = b.id_barang \
         WHERE rb.expired {} CURRENT_DATE",
        window.operator()
    )
}

#[derive(Clone)]
pub struct MySqlInventoryStore {
    pool: MySqlPool,
}

impl MySqlInventoryStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[tonic::async_trait]
impl InventoryStore for MySqlInventoryStore {
    async fn barang_lengkap(&self) -> AppResult<Vec<BarangLengkapModel>> {
        let rows = sqlx::query_as::<_, BarangLengkapModel>(SELECT_BARANG_LENGKAP)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn barang_with(&self, relation: Relation) -> AppResult<Vec<BarangRelasiModel>> {
        let rows = sqlx::query_as::<_, BarangRelasiModel>(relation.select_sql())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ref_barang_by_expiry(
        &self,
        window: ExpiryWindow,
    ) -> AppResult<Vec<RefBarangExpiryModel>> {
        let sql = select_by_expiry_sql(window);
        let rows = sqlx::query_as::<_, RefBarangExpiryModel>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update_harga_by_batch(&self, harga: i32, no_batch: &str) -> AppResult<u64> {
        let result = sqlx::query(UPDATE_HARGA_BY_BATCH)
            .bind(harga)
            .bind(no_batch)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn begin(&self) -> AppResult<Box<dyn RefBarangTransaction>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(MySqlRefBarangTransaction { tx }))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

pub struct MySqlRefBarangTransaction {
    tx: Transaction<'static, MySql>,
}

#[tonic::async_trait]
impl RefBarangTransaction for MySqlRefBarangTransaction {
    async fn insert_ref(&mut self, data: &NewRefBarang) -> AppResult<()> {
        sqlx::query(INSERT_REF_BARANG)
            .bind(data.id_barang)
            .bind(data.stok)
            .bind(&data.expired)
            .bind(&data.no_batch)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}
