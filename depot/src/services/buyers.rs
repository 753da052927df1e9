//! Buyer rules: unique card numbers and the purchase orders report.

use crate::db::{
    handlers::{Buyers, Repository},
    models::buyers::{BuyerCreateDBRequest, BuyerDBResponse, BuyerUpdateDBRequest},
};
use crate::errors::Result;
use crate::services::{
    already_exists, classify_delete, classify_write, db_error, not_found,
    reports::{CountReport, index_by, zip_counts},
};
use crate::types::BuyerId;
use sqlx::PgPool;

const RESOURCE: &str = "Buyer";

#[derive(Clone)]
pub struct BuyerService {
    db: PgPool,
}

impl BuyerService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<BuyerDBResponse>> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Ok(Buyers::new(&mut conn).list().await?)
    }

    pub async fn get(&self, id: BuyerId) -> Result<BuyerDBResponse> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Buyers::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))
    }

    pub async fn create(&self, request: BuyerCreateDBRequest) -> Result<BuyerDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Buyers::new(&mut tx);

        if repo.exists(&request.card_number_id).await? {
            return Err(already_exists(RESOURCE, "card_number_id", &request.card_number_id));
        }
        let buyer = repo.create(&request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(buyer)
    }

    pub async fn update(&self, id: BuyerId, request: BuyerUpdateDBRequest) -> Result<BuyerDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Buyers::new(&mut tx);

        let current = repo.get_by_id(id).await?.ok_or_else(|| not_found(RESOURCE, id))?;
        if let Some(card) = &request.card_number_id
            && *card != current.card_number_id
            && repo.exists(card).await?
        {
            return Err(already_exists(RESOURCE, "card_number_id", card));
        }
        let buyer = repo.update(id, &request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(buyer)
    }

    pub async fn delete(&self, id: BuyerId) -> Result<()> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        let deleted = Buyers::new(&mut conn)
            .delete(id)
            .await
            .map_err(|e| classify_delete(RESOURCE, id, e))?;

        if deleted { Ok(()) } else { Err(not_found(RESOURCE, id)) }
    }

    pub async fn report_purchase_orders(&self, id: Option<BuyerId>) -> Result<Vec<CountReport<BuyerDBResponse>>> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Buyers::new(&mut tx);

        let buyers = index_by(repo.list().await?, |e| e.id);
        let counts = repo.count_purchase_orders(id).await?;

        tx.commit().await.map_err(db_error)?;
        zip_counts(buyers, counts, id).ok_or_else(|| not_found(RESOURCE, id.unwrap_or_default()))
    }
}
