//! Carrier rules: unique CIDs and an existing locality.

use crate::db::{
    handlers::{Carriers, Repository},
    models::carriers::{CarrierCreateDBRequest, CarrierDBResponse, CarrierUpdateDBRequest},
};
use crate::errors::Result;
use crate::services::{already_exists, classify_delete, classify_write, db_error, not_found};
use crate::types::CarrierId;
use sqlx::PgPool;

const RESOURCE: &str = "Carrier";

#[derive(Clone)]
pub struct CarrierService {
    db: PgPool,
}

impl CarrierService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<CarrierDBResponse>> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Ok(Carriers::new(&mut conn).list().await?)
    }

    pub async fn get(&self, id: CarrierId) -> Result<CarrierDBResponse> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Carriers::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))
    }

    pub async fn create(&self, request: CarrierCreateDBRequest) -> Result<CarrierDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Carriers::new(&mut tx);

        if repo.exists(&request.cid).await? {
            return Err(already_exists(RESOURCE, "cid", &request.cid));
        }
        let carrier = repo.create(&request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(carrier)
    }

    pub async fn update(&self, id: CarrierId, request: CarrierUpdateDBRequest) -> Result<CarrierDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Carriers::new(&mut tx);

        let current = repo.get_by_id(id).await?.ok_or_else(|| not_found(RESOURCE, id))?;
        if let Some(cid) = &request.cid
            && *cid != current.cid
            && repo.exists(cid).await?
        {
            return Err(already_exists(RESOURCE, "cid", cid));
        }
        let carrier = repo.update(id, &request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(carrier)
    }

    pub async fn delete(&self, id: CarrierId) -> Result<()> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        let deleted = Carriers::new(&mut conn)
            .delete(id)
            .await
            .map_err(|e| classify_delete(RESOURCE, id, e))?;

        if deleted { Ok(()) } else { Err(not_found(RESOURCE, id)) }
    }
}
