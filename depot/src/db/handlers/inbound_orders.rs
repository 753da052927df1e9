//! Database repository for inbound orders.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::inbound_orders::{InboundOrderCreateDBRequest, InboundOrderDBResponse, InboundOrderUpdateDBRequest},
};
use crate::types::InboundOrderId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct InboundOrders<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for InboundOrders<'c> {
    type CreateRequest = InboundOrderCreateDBRequest;
    type UpdateRequest = InboundOrderUpdateDBRequest;
    type Response = InboundOrderDBResponse;
    type Id = InboundOrderId;

    #[instrument(skip(self, request), fields(order_number = %request.order_number), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let order = sqlx::query_as::<_, InboundOrderDBResponse>(
            r#"
            INSERT INTO inbound_orders (order_number, order_date, employee_id, product_batch_id, warehouse_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&request.order_number)
        .bind(request.order_date)
        .bind(request.employee_id)
        .bind(request.product_batch_id)
        .bind(request.warehouse_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(order)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let order = sqlx::query_as::<_, InboundOrderDBResponse>("SELECT * FROM inbound_orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(order)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let orders = sqlx::query_as::<_, InboundOrderDBResponse>("SELECT * FROM inbound_orders ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(orders)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM inbound_orders WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let order = sqlx::query_as::<_, InboundOrderDBResponse>(
            r#"
            UPDATE inbound_orders SET
                order_number = COALESCE($2, order_number),
                order_date = COALESCE($3, order_date),
                employee_id = COALESCE($4, employee_id),
                product_batch_id = COALESCE($5, product_batch_id),
                warehouse_id = COALESCE($6, warehouse_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.order_number)
        .bind(request.order_date)
        .bind(request.employee_id)
        .bind(request.product_batch_id)
        .bind(request.warehouse_id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(order)
    }
}

impl<'c> InboundOrders<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, order_number: &str) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM inbound_orders WHERE order_number = $1)")
                .bind(order_number)
                .fetch_one(&mut *self.db)
                .await?;

        Ok(exists)
    }
}
