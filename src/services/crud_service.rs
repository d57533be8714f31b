use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::db::{ExpiryWindow, InventoryStore, Relation};
use crate::error::AppResult;
use crate::models::{BarangRelasiModel, NewRefBarang, RefBarangExpiryModel};
use crate::proto::crud::crud_service_server::CrudService;
use crate::proto::crud::{
    CreateBulkRefRequest, CreateBulkRefResponse, ReadAllRequest, ReadAllResponse,
    ReadExpiredBarangRequest, ReadExpiredBarangResponse, ReadNotExpiredBarangRequest,
    ReadNotExpiredBarangResponse, ReadWithBatchRequest, ReadWithBatchResponse,
    ReadWithCategoryRequest, ReadWithCategoryResponse, ReadWithJenisRequest,
    ReadWithJenisResponse, ReadWithMaterialRequest, ReadWithMaterialResponse, RefBarangData,
    ResponseRead, ResponseReadBatch, ResponseReadCategory, ResponseReadExpired,
    ResponseReadJenis, ResponseReadMaterial, ResponseReadNotExpired, UpdateHargaBatchRequest,
    UpdateHargaBatchResponse,
};

pub const UPDATE_SUCCESS_MESSAGE: &str = "Data updated successfully";
pub const BULK_CREATE_SUCCESS_MESSAGE: &str = "Bulk create successful";

pub struct CrudServiceImpl {
    store: Arc<dyn InventoryStore>,
}

impl CrudServiceImpl {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    /// Rows of `barang` joined with `relation`, converted with `to_proto`.
    /// A single malformed `harga` fails the whole read.
    async fn read_relation<T>(
        &self,
        relation: Relation,
        to_proto: impl Fn(BarangRelasiModel, i32) -> T,
    ) -> AppResult<Vec<T>> {
        let rows = self.store.barang_with(relation).await?;
        let mut responses = Vec::with_capacity(rows.len());
        for row in rows {
            let harga = row.harga()?;
            responses.push(to_proto(row, harga));
        }
        tracing::debug!(?relation, rows = responses.len(), "read barang with relation");
        Ok(responses)
    }

    async fn read_expiry<T>(
        &self,
        window: ExpiryWindow,
        to_proto: impl Fn(RefBarangExpiryModel, i32) -> T,
    ) -> AppResult<Vec<T>> {
        let rows = self.store.ref_barang_by_expiry(window).await?;
        let mut responses = Vec::with_capacity(rows.len());
        for row in rows {
            let stok = row.stok()?;
            responses.push(to_proto(row, stok));
        }
        tracing::debug!(?window, rows = responses.len(), "read ref_barang by expiry");
        Ok(responses)
    }

    fn new_ref_barang(data: &RefBarangData) -> NewRefBarang {
        NewRefBarang {
            id_barang: data.id_barang,
            stok: data.stok,
            expired: data.exp_date.clone(),
            no_batch: data.no_batch.clone(),
        }
    }
}

#[tonic::async_trait]
impl CrudService for CrudServiceImpl {
    async fn read_all(
        &self,
        _request: Request<ReadAllRequest>,
    ) -> Result<Response<ReadAllResponse>, Status> {
        let rows = self.store.barang_lengkap().await?;

        let mut responses = Vec::with_capacity(rows.len());
        for row in rows {
            let harga = row.harga()?;
            responses.push(ResponseRead {
                nama_barang: row.nama_barang,
                foto_barang: row.foto_barang,
                harga,
                nama_kategori: row.nama_kategori,
                nama_jenis: row.nama_jenis,
                no_batch: row.no_batch,
            });
        }
        tracing::debug!(rows = responses.len(), "read all barang");

        Ok(Response::new(ReadAllResponse { responses }))
    }

    async fn read_with_category(
        &self,
        _request: Request<ReadWithCategoryRequest>,
    ) -> Result<Response<ReadWithCategoryResponse>, Status> {
        let responses = self
            .read_relation(Relation::Kategori, |row, harga| ResponseReadCategory {
                nama_barang: row.nama_barang,
                foto_barang: row.foto_barang,
                nama_kategori: row.nama_relasi,
                harga,
            })
            .await?;

        Ok(Response::new(ReadWithCategoryResponse { responses }))
    }

    async fn read_with_jenis(
        &self,
        _request: Request<ReadWithJenisRequest>,
    ) -> Result<Response<ReadWithJenisResponse>, Status> {
        let responses = self
            .read_relation(Relation::Jenis, |row, harga| ResponseReadJenis {
                nama_barang: row.nama_barang,
                foto_barang: row.foto_barang,
                nama_jenis: row.nama_relasi,
                harga,
            })
            .await?;

        Ok(Response::new(ReadWithJenisResponse { responses }))
    }

    async fn read_with_material(
        &self,
        _request: Request<ReadWithMaterialRequest>,
    ) -> Result<Response<ReadWithMaterialResponse>, Status> {
        let responses = self
            .read_relation(Relation::Material, |row, harga| ResponseReadMaterial {
                nama_barang: row.nama_barang,
                foto_barang: row.foto_barang,
                nama_material: row.nama_relasi,
                harga,
            })
            .await?;

        Ok(Response::new(ReadWithMaterialResponse { responses }))
    }

    async fn read_with_batch(
        &self,
        _request: Request<ReadWithBatchRequest>,
    ) -> Result<Response<ReadWithBatchResponse>, Status> {
        let responses = self
            .read_relation(Relation::Batch, |row, harga| ResponseReadBatch {
                nama_barang: row.nama_barang,
                foto_barang: row.foto_barang,
                nomor_batch: row.nama_relasi,
                harga,
            })
            .await?;

        Ok(Response::new(ReadWithBatchResponse { responses }))
    }

    async fn read_expired_barang(
        &self,
        _request: Request<ReadExpiredBarangRequest>,
    ) -> Result<Response<ReadExpiredBarangResponse>, Status> {
        let responses = self
            .read_expiry(ExpiryWindow::Expired, |row, stok| ResponseReadExpired {
                nama_barang: row.nama_barang,
                stok,
                nomor_batch: row.no_batch,
                tgl_expired: row.expired,
            })
            .await?;

        Ok(Response::new(ReadExpiredBarangResponse { responses }))
    }

    async fn read_not_expired_barang(
        &self,
        _request: Request<ReadNotExpiredBarangRequest>,
    ) -> Result<Response<ReadNotExpiredBarangResponse>, Status> {
        let responses = self
            .read_expiry(ExpiryWindow::NotExpired, |row, stok| ResponseReadNotExpired {
                nama_barang: row.nama_barang,
                stok,
                nomor_batch: row.no_batch,
                tgl_expired: row.expired,
            })
            .await?;

        Ok(Response::new(ReadNotExpiredBarangResponse { responses }))
    }

    async fn update_harga_batch(
        &self,
        request: Request<UpdateHargaBatchRequest>,
    ) -> Result<Response<UpdateHargaBatchResponse>, Status> {
        let req = request.into_inner();

        // Zero affected rows (unknown batch) still reports success.
        let affected = self
            .store
            .update_harga_by_batch(req.harga, &req.nomor_batch)
            .await?;
        tracing::debug!(nomor_batch = %req.nomor_batch, affected, "updated harga by batch");

        Ok(Response::new(UpdateHargaBatchResponse {
            success: true,
            message: UPDATE_SUCCESS_MESSAGE.to_string(),
        }))
    }

    async fn create_bulk_ref(
        &self,
        request: Request<CreateBulkRefRequest>,
    ) -> Result<Response<CreateBulkRefResponse>, Status> {
        let req = request.into_inner();

        let mut tx = self.store.begin().await?;
        for (index, data) in req.data.iter().enumerate() {
            let new_ref = Self::new_ref_barang(data);
            if let Err(e) = tx.insert_ref(&new_ref).await {
                tracing::warn!(
                    index,
                    no_batch = %new_ref.no_batch,
                    "bulk ref_barang insert failed, rolling back: {}",
                    e
                );
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!("Rollback failed: {}", rollback_err);
                }
                return Err(e.into());
            }
        }
        tx.commit().await?;
        tracing::debug!(rows = req.data.len(), "bulk created ref_barang");

        Ok(Response::new(CreateBulkRefResponse {
            success: true,
            message: BULK_CREATE_SUCCESS_MESSAGE.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::{BarangRecord, MemoryInventoryStore};
    use chrono::{Duration, Local, NaiveDate, Utc};
    use tonic::Code;

    fn barang(id_barang: i32, nama: &str, harga: &str, id_kategori: i32) -> BarangRecord {
        BarangRecord {
            id_barang,
            nama_barang: nama.to_string(),
            foto_barang: format!("{}.jpg", nama.to_lowercase()),
            harga: harga.to_string(),
            id_kategori,
            id_material: 1,
            id_jenis: 1,
        }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Paracetamol has every relation; Vitamin C points at a missing kategori.
    fn seeded_store() -> MemoryInventoryStore {
        let store = MemoryInventoryStore::new();
        store.add_kategori(1, "Obat");
        store.add_material(1, "Tablet");
        store.add_jenis(1, "Generik");
        store.add_barang(barang(1, "Paracetamol", "5000", 1));
        store.add_barang(barang(2, "Vitamin", "12000", 99));
        store
    }

    fn service(store: &MemoryInventoryStore) -> CrudServiceImpl {
        CrudServiceImpl::new(Arc::new(store.clone()))
    }

    fn ref_data(id_barang: i32, stok: i32, exp_date: &str, no_batch: &str) -> RefBarangData {
        RefBarangData {
            id_barang,
            stok,
            exp_date: exp_date.to_string(),
            no_batch: no_batch.to_string(),
        }
    }

    async fn expired_batches(service: &CrudServiceImpl) -> Vec<String> {
        service
            .read_expired_barang(Request::new(ReadExpiredBarangRequest {}))
            .await
            .unwrap()
            .into_inner()
            .responses
            .into_iter()
            .map(|r| r.nomor_batch)
            .collect()
    }

    async fn not_expired_batches(service: &CrudServiceImpl) -> Vec<String> {
        service
            .read_not_expired_barang(Request::new(ReadNotExpiredBarangRequest {}))
            .await
            .unwrap()
            .into_inner()
            .responses
            .into_iter()
            .map(|r| r.nomor_batch)
            .collect()
    }

    #[tokio::test]
    async fn test_read_all_only_returns_fully_joined_rows() {
        let store = seeded_store();
        store.add_ref(1, "10", today(), "B1");
        store.add_ref(2, "20", today(), "B2");
        let service = service(&store);

        let responses = service
            .read_all(Request::new(ReadAllRequest {}))
            .await
            .unwrap()
            .into_inner()
            .responses;

        assert_eq!(responses.len(), 1);
        let row = &responses[0];
        assert_eq!(row.nama_barang, "Paracetamol");
        assert_eq!(row.foto_barang, "paracetamol.jpg");
        assert_eq!(row.harga, 5000);
        assert_eq!(row.nama_kategori, "Obat");
        assert_eq!(row.nama_jenis, "Generik");
        assert_eq!(row.no_batch, "B1");
    }

    #[tokio::test]
    async fn test_single_relation_reads_are_inner_joins() {
        let store = seeded_store();
        let service = service(&store);

        let categories = service
            .read_with_category(Request::new(ReadWithCategoryRequest {}))
            .await
            .unwrap()
            .into_inner()
            .responses;
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].nama_barang, "Paracetamol");
        assert_eq!(categories[0].nama_kategori, "Obat");
        assert_eq!(categories[0].harga, 5000);

        let jenis = service
            .read_with_jenis(Request::new(ReadWithJenisRequest {}))
            .await
            .unwrap()
            .into_inner()
            .responses;
        let mut names: Vec<_> = jenis.iter().map(|r| r.nama_barang.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["Paracetamol", "Vitamin"]);
        assert!(jenis.iter().all(|r| r.nama_jenis == "Generik"));

        let materials = service
            .read_with_material(Request::new(ReadWithMaterialRequest {}))
            .await
            .unwrap()
            .into_inner()
            .responses;
        assert_eq!(materials.len(), 2);
        assert!(materials.iter().all(|r| r.nama_material == "Tablet"));

        // No ref_barang rows yet
        let batches = service
            .read_with_batch(Request::new(ReadWithBatchRequest {}))
            .await
            .unwrap()
            .into_inner()
            .responses;
        assert!(batches.is_empty());
    }

    #[tokio::test]
    async fn test_read_with_batch_returns_one_row_per_batch() {
        let store = seeded_store();
        store.add_ref(1, "10", today(), "B1");
        store.add_ref(1, "5", today(), "B2");
        store.add_ref(42, "5", today(), "ORPHAN");
        let service = service(&store);

        let batches = service
            .read_with_batch(Request::new(ReadWithBatchRequest {}))
            .await
            .unwrap()
            .into_inner()
            .responses;

        let mut nomor: Vec<_> = batches.iter().map(|r| r.nomor_batch.as_str()).collect();
        nomor.sort();
        assert_eq!(nomor, vec!["B1", "B2"]);
        assert!(batches
            .iter()
            .all(|r| r.nama_barang == "Paracetamol" && r.harga == 5000));
    }

    #[tokio::test]
    async fn test_expiry_boundary_overlaps_on_today() {
        let store = seeded_store();
        store.add_ref(1, "1", today() - Duration::days(1), "PAST");
        store.add_ref(1, "2", today(), "TODAY");
        store.add_ref(1, "3", today() + Duration::days(1), "FUTURE");
        let service = service(&store);

        let expired = expired_batches(&service).await;
        let not_expired = not_expired_batches(&service).await;

        assert!(expired.contains(&"PAST".to_string()));
        assert!(!not_expired.contains(&"PAST".to_string()));

        assert!(expired.contains(&"TODAY".to_string()));
        assert!(not_expired.contains(&"TODAY".to_string()));

        assert!(!expired.contains(&"FUTURE".to_string()));
        assert!(not_expired.contains(&"FUTURE".to_string()));
    }

    #[tokio::test]
    async fn test_expired_rows_carry_stock_and_date() {
        let store = seeded_store();
        let past = today() - Duration::days(30);
        store.add_ref(1, "7", past, "OLD");
        let service = service(&store);

        let responses = service
            .read_expired_barang(Request::new(ReadExpiredBarangRequest {}))
            .await
            .unwrap()
            .into_inner()
            .responses;

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].nama_barang, "Paracetamol");
        assert_eq!(responses[0].stok, 7);
        assert_eq!(responses[0].tgl_expired, past.format("%Y-%m-%d").to_string());
    }

    #[tokio::test]
    async fn test_update_harga_unknown_batch_reports_success() {
        let store = seeded_store();
        let service = service(&store);

        let response = service
            .update_harga_batch(Request::new(UpdateHargaBatchRequest {
                harga: 9000,
                nomor_batch: "NOPE".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();

        assert!(response.success);
        assert_eq!(response.message, UPDATE_SUCCESS_MESSAGE);
        assert!(store.tables().barang.iter().all(|b| b.harga != "9000"));
    }

    #[tokio::test]
    async fn test_update_harga_changes_item_of_batch() {
        let store = seeded_store();
        store.add_ref(1, "10", today(), "B1");
        let service = service(&store);

        let response = service
            .update_harga_batch(Request::new(UpdateHargaBatchRequest {
                harga: 7500,
                nomor_batch: "B1".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(response.success);

        let batches = service
            .read_with_batch(Request::new(ReadWithBatchRequest {}))
            .await
            .unwrap()
            .into_inner()
            .responses;
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].harga, 7500);

        let vitamin = store
            .tables()
            .barang
            .iter()
            .find(|b| b.id_barang == 2)
            .map(|b| b.harga.clone());
        assert_eq!(vitamin.as_deref(), Some("12000"));
    }

    #[tokio::test]
    async fn test_bulk_ref_is_all_or_nothing() {
        let store = seeded_store();
        let service = service(&store);

        let result = service
            .create_bulk_ref(Request::new(CreateBulkRefRequest {
                data: vec![
                    ref_data(1, 10, "2099-01-01", "A1"),
                    ref_data(2, 10, "2099-01-01", "A2"),
                    ref_data(404, 10, "2099-01-01", "A3"),
                    ref_data(1, 10, "2099-01-01", "A4"),
                    ref_data(2, 10, "2099-01-01", "A5"),
                ],
            }))
            .await;

        let status = result.unwrap_err();
        assert_eq!(status.code(), Code::Internal);
        assert!(status.message().contains("404"));
        assert!(store.tables().ref_barang.is_empty());
    }

    #[tokio::test]
    async fn test_bulk_ref_rejects_bad_date() {
        let store = seeded_store();
        let service = service(&store);

        let result = service
            .create_bulk_ref(Request::new(CreateBulkRefRequest {
                data: vec![
                    ref_data(1, 10, "2099-01-01", "A1"),
                    ref_data(1, 10, "tomorrow", "A2"),
                ],
            }))
            .await;

        assert!(result.is_err());
        assert!(store.tables().ref_barang.is_empty());
    }

    #[tokio::test]
    async fn test_bulk_ref_inserts_every_row_with_timestamp() {
        let store = seeded_store();
        let service = service(&store);
        let started = Utc::now();

        let response = service
            .create_bulk_ref(Request::new(CreateBulkRefRequest {
                data: vec![
                    ref_data(1, 10, "2099-01-01", "N1"),
                    ref_data(1, 20, "2099-02-01", "N2"),
                    ref_data(2, 30, "2099-03-01", "N3"),
                ],
            }))
            .await
            .unwrap()
            .into_inner();
        let finished = Utc::now();

        assert!(response.success);
        assert_eq!(response.message, BULK_CREATE_SUCCESS_MESSAGE);

        let tables = store.tables();
        assert_eq!(tables.ref_barang.len(), 3);
        for row in &tables.ref_barang {
            assert!(row.created_date >= started && row.created_date <= finished);
        }
        let mut ids: Vec<_> = tables.ref_barang.iter().map(|r| r.id_ref_barang).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        let mut batches: Vec<_> = tables.ref_barang.iter().map(|r| r.no_batch.as_str()).collect();
        batches.sort();
        assert_eq!(batches, vec!["N1", "N2", "N3"]);
    }

    #[tokio::test]
    async fn test_bulk_ref_empty_list_succeeds() {
        let store = seeded_store();
        let service = service(&store);

        let response = service
            .create_bulk_ref(Request::new(CreateBulkRefRequest { data: vec![] }))
            .await
            .unwrap()
            .into_inner();

        assert!(response.success);
        assert!(store.tables().ref_barang.is_empty());
    }

    #[tokio::test]
    async fn test_inserted_batch_is_visible_in_read_with_batch() {
        let store = seeded_store();
        let service = service(&store);

        service
            .create_bulk_ref(Request::new(CreateBulkRefRequest {
                data: vec![ref_data(1, 10, "2099-01-01", "B100")],
            }))
            .await
            .unwrap();

        let batches = service
            .read_with_batch(Request::new(ReadWithBatchRequest {}))
            .await
            .unwrap()
            .into_inner()
            .responses;
        let row = batches
            .iter()
            .find(|r| r.nomor_batch == "B100")
            .expect("B100 should be listed");
        assert_eq!(row.nama_barang, "Paracetamol");
        assert_eq!(row.foto_barang, "paracetamol.jpg");
        assert_eq!(row.harga, 5000);

        let not_expired = not_expired_batches(&service).await;
        assert!(not_expired.contains(&"B100".to_string()));
    }

    #[tokio::test]
    async fn test_malformed_harga_fails_every_price_read() {
        let store = seeded_store();
        store.add_barang(barang(3, "Antibiotik", "15rb", 1));
        store.add_ref(3, "10", today(), "BAD");
        let service = service(&store);

        let statuses = vec![
            service
                .read_all(Request::new(ReadAllRequest {}))
                .await
                .unwrap_err(),
            service
                .read_with_category(Request::new(ReadWithCategoryRequest {}))
                .await
                .unwrap_err(),
            service
                .read_with_jenis(Request::new(ReadWithJenisRequest {}))
                .await
                .unwrap_err(),
            service
                .read_with_material(Request::new(ReadWithMaterialRequest {}))
                .await
                .unwrap_err(),
            service
                .read_with_batch(Request::new(ReadWithBatchRequest {}))
                .await
                .unwrap_err(),
        ];

        for status in statuses {
            assert_eq!(status.code(), Code::DataLoss);
            assert!(status.message().contains("15rb"));
        }

        // Stock is still numeric, so the expiry views are unaffected
        assert!(expired_batches(&service).await.contains(&"BAD".to_string()));
    }

    #[tokio::test]
    async fn test_malformed_stok_fails_expiry_reads() {
        let store = seeded_store();
        store.add_ref(1, "ten", today(), "B1");
        let service = service(&store);

        let status = service
            .read_expired_barang(Request::new(ReadExpiredBarangRequest {}))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::DataLoss);
        assert!(status.message().contains("stok"));

        let status = service
            .read_not_expired_barang(Request::new(ReadNotExpiredBarangRequest {}))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::DataLoss);
    }

    #[tokio::test]
    async fn test_store_failure_is_returned_to_caller() {
        let store = seeded_store();
        store.set_unavailable(true);
        let service = service(&store);

        let status = service
            .read_all(Request::new(ReadAllRequest {}))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::Internal);

        let status = service
            .update_harga_batch(Request::new(UpdateHargaBatchRequest {
                harga: 1,
                nomor_batch: "B1".to_string(),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::Internal);

        let status = service
            .create_bulk_ref(Request::new(CreateBulkRefRequest {
                data: vec![ref_data(1, 10, "2099-01-01", "B1")],
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::Internal);
    }
}
