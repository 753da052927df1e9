//! Inbound order rules: unique order numbers and existing employee, batch and warehouse.

use crate::db::{
    handlers::{InboundOrders, Repository},
    models::inbound_orders::{InboundOrderCreateDBRequest, InboundOrderDBResponse, InboundOrderUpdateDBRequest},
};
use crate::errors::Result;
use crate::services::{already_exists, classify_delete, classify_write, db_error, not_found};
use crate::types::InboundOrderId;
use sqlx::PgPool;

const RESOURCE: &str = "Inbound order";

#[derive(Clone)]
pub struct InboundOrderService {
    db: PgPool,
}

impl InboundOrderService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<InboundOrderDBResponse>> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Ok(InboundOrders::new(&mut conn).list().await?)
    }

    pub async fn get(&self, id: InboundOrderId) -> Result<InboundOrderDBResponse> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        InboundOrders::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))
    }

    pub async fn create(&self, request: InboundOrderCreateDBRequest) -> Result<InboundOrderDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = InboundOrders::new(&mut tx);

        if repo.exists(&request.order_number).await? {
            return Err(already_exists(RESOURCE, "order_number", &request.order_number));
        }
        let order = repo.create(&request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(order)
    }

    pub async fn update(
        &self,
        id: InboundOrderId,
        request: InboundOrderUpdateDBRequest,
    ) -> Result<InboundOrderDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = InboundOrders::new(&mut tx);

        let current = repo.get_by_id(id).await?.ok_or_else(|| not_found(RESOURCE, id))?;
        if let Some(number) = &request.order_number
            && *number != current.order_number
            && repo.exists(number).await?
        {
            return Err(already_exists(RESOURCE, "order_number", number));
        }
        let order = repo.update(id, &request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(order)
    }

    pub async fn delete(&self, id: InboundOrderId) -> Result<()> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        let deleted = InboundOrders::new(&mut conn)
            .delete(id)
            .await
            .map_err(|e| classify_delete(RESOURCE, id, e))?;

        if deleted { Ok(()) } else { Err(not_found(RESOURCE, id)) }
    }
}
