//! Warehouse rules: unique warehouse codes.

use crate::db::{
    handlers::{Repository, Warehouses},
    models::warehouses::{WarehouseCreateDBRequest, WarehouseDBResponse, WarehouseUpdateDBRequest},
};
use crate::errors::Result;
use crate::services::{already_exists, classify_delete, classify_write, db_error, not_found};
use crate::types::WarehouseId;
use sqlx::PgPool;

const RESOURCE: &str = "Warehouse";

#[derive(Clone)]
pub struct WarehouseService {
    db: PgPool,
}

impl WarehouseService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<WarehouseDBResponse>> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Ok(Warehouses::new(&mut conn).list().await?)
    }

    pub async fn get(&self, id: WarehouseId) -> Result<WarehouseDBResponse> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Warehouses::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))
    }

    pub async fn create(&self, request: WarehouseCreateDBRequest) -> Result<WarehouseDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Warehouses::new(&mut tx);

        if repo.exists(&request.warehouse_code).await? {
            return Err(already_exists(RESOURCE, "warehouse_code", &request.warehouse_code));
        }
        let warehouse = repo.create(&request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(warehouse)
    }

    pub async fn update(&self, id: WarehouseId, request: WarehouseUpdateDBRequest) -> Result<WarehouseDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Warehouses::new(&mut tx);

        let current = repo.get_by_id(id).await?.ok_or_else(|| not_found(RESOURCE, id))?;
        if let Some(code) = &request.warehouse_code
            && *code != current.warehouse_code
            && repo.exists(code).await?
        {
            return Err(already_exists(RESOURCE, "warehouse_code", code));
        }
        let warehouse = repo.update(id, &request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(warehouse)
    }

    pub async fn delete(&self, id: WarehouseId) -> Result<()> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        let deleted = Warehouses::new(&mut conn)
            .delete(id)
            .await
            .map_err(|e| classify_delete(RESOURCE, id, e))?;

        if deleted { Ok(()) } else { Err(not_found(RESOURCE, id)) }
    }
}
