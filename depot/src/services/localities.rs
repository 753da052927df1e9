//! Locality rules: unique zip codes and the seller/carrier count reports.

use crate::db::{
    handlers::{Localities, Repository},
    models::localities::{LocalityCreateDBRequest, LocalityDBResponse, LocalityUpdateDBRequest},
};
use crate::errors::Result;
use crate::services::{
    already_exists, classify_delete, classify_write, db_error, not_found,
    reports::{CountReport, index_by, zip_counts},
};
use crate::types::LocalityId;
use sqlx::PgPool;

const RESOURCE: &str = "Locality";

#[derive(Clone)]
pub struct LocalityService {
    db: PgPool,
}

impl LocalityService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<LocalityDBResponse>> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Ok(Localities::new(&mut conn).list().await?)
    }

    pub async fn get(&self, id: LocalityId) -> Result<LocalityDBResponse> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Localities::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))
    }

    pub async fn create(&self, request: LocalityCreateDBRequest) -> Result<LocalityDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Localities::new(&mut tx);

        if repo.exists(&request.zip_code).await? {
            return Err(already_exists(RESOURCE, "zip_code", &request.zip_code));
        }
        let locality = repo.create(&request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(locality)
    }

    pub async fn update(&self, id: LocalityId, request: LocalityUpdateDBRequest) -> Result<LocalityDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Localities::new(&mut tx);

        let current = repo.get_by_id(id).await?.ok_or_else(|| not_found(RESOURCE, id))?;
        if let Some(zip_code) = &request.zip_code
            && *zip_code != current.zip_code
            && repo.exists(zip_code).await?
        {
            return Err(already_exists(RESOURCE, "zip_code", zip_code));
        }
        let locality = repo.update(id, &request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(locality)
    }

    pub async fn delete(&self, id: LocalityId) -> Result<()> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        let deleted = Localities::new(&mut conn)
            .delete(id)
            .await
            .map_err(|e| classify_delete(RESOURCE, id, e))?;

        if deleted { Ok(()) } else { Err(not_found(RESOURCE, id)) }
    }

    pub async fn report_sellers(&self, id: Option<LocalityId>) -> Result<Vec<CountReport<LocalityDBResponse>>> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Localities::new(&mut tx);

        let localities = index_by(repo.list().await?, |l| l.id);
        let counts = repo.count_sellers(id).await?;

        tx.commit().await.map_err(db_error)?;
        zip_counts(localities, counts, id).ok_or_else(|| not_found(RESOURCE, id.unwrap_or_default()))
    }

    pub async fn report_carriers(&self, id: Option<LocalityId>) -> Result<Vec<CountReport<LocalityDBResponse>>> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Localities::new(&mut tx);

        let localities = index_by(repo.list().await?, |l| l.id);
        let counts = repo.count_carriers(id).await?;

        tx.commit().await.map_err(db_error)?;
        zip_counts(localities, counts, id).ok_or_else(|| not_found(RESOURCE, id.unwrap_or_default()))
    }
}
