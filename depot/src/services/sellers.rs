//! Seller rules: unique CIDs and an existing locality.

use crate::db::{
    handlers::{Repository, Sellers},
    models::sellers::{SellerCreateDBRequest, SellerDBResponse, SellerUpdateDBRequest},
};
use crate::errors::Result;
use crate::services::{already_exists, classify_delete, classify_write, db_error, not_found};
use crate::types::SellerId;
use sqlx::PgPool;

const RESOURCE: &str = "Seller";

#[derive(Clone)]
pub struct SellerService {
    db: PgPool,
}

impl SellerService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<SellerDBResponse>> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Ok(Sellers::new(&mut conn).list().await?)
    }

    pub async fn get(&self, id: SellerId) -> Result<SellerDBResponse> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Sellers::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))
    }

    pub async fn create(&self, request: SellerCreateDBRequest) -> Result<SellerDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Sellers::new(&mut tx);

        if repo.exists(request.cid).await? {
            return Err(already_exists(RESOURCE, "cid", request.cid));
        }
        let seller = repo.create(&request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(seller)
    }

    pub async fn update(&self, id: SellerId, request: SellerUpdateDBRequest) -> Result<SellerDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Sellers::new(&mut tx);

        let current = repo.get_by_id(id).await?.ok_or_else(|| not_found(RESOURCE, id))?;
        if let Some(cid) = request.cid
            && cid != current.cid
            && repo.exists(cid).await?
        {
            return Err(already_exists(RESOURCE, "cid", cid));
        }
        let seller = repo.update(id, &request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(seller)
    }

    pub async fn delete(&self, id: SellerId) -> Result<()> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        let deleted = Sellers::new(&mut conn)
            .delete(id)
            .await
            .map_err(|e| classify_delete(RESOURCE, id, e))?;

        if deleted { Ok(()) } else { Err(not_found(RESOURCE, id)) }
    }
}
