//! Database repository for purchase orders.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::purchase_orders::{PurchaseOrderCreateDBRequest, PurchaseOrderDBResponse, PurchaseOrderUpdateDBRequest},
};
use crate::types::PurchaseOrderId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct PurchaseOrders<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for PurchaseOrders<'c> {
    type CreateRequest = PurchaseOrderCreateDBRequest;
    type UpdateRequest = PurchaseOrderUpdateDBRequest;
    type Response = PurchaseOrderDBResponse;
    type Id = PurchaseOrderId;

    #[instrument(skip(self, request), fields(order_number = %request.order_number), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let order = sqlx::query_as::<_, PurchaseOrderDBResponse>(
            r#"
            INSERT INTO purchase_orders (
                order_number, order_date, tracking_code, buyer_id, product_record_id, order_status_id
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&request.order_number)
        .bind(request.order_date)
        .bind(&request.tracking_code)
        .bind(request.buyer_id)
        .bind(request.product_record_id)
        .bind(request.order_status_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(order)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let order = sqlx::query_as::<_, PurchaseOrderDBResponse>("SELECT * FROM purchase_orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(order)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let orders = sqlx::query_as::<_, PurchaseOrderDBResponse>("SELECT * FROM purchase_orders ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(orders)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM purchase_orders WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let order = sqlx::query_as::<_, PurchaseOrderDBResponse>(
            r#"
            UPDATE purchase_orders SET
                order_number = COALESCE($2, order_number),
                order_date = COALESCE($3, order_date),
                tracking_code = COALESCE($4, tracking_code),
                buyer_id = COALESCE($5, buyer_id),
                product_record_id = COALESCE($6, product_record_id),
                order_status_id = COALESCE($7, order_status_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.order_number)
        .bind(request.order_date)
        .bind(&request.tracking_code)
        .bind(request.buyer_id)
        .bind(request.product_record_id)
        .bind(request.order_status_id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(order)
    }
}

impl<'c> PurchaseOrders<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, order_number: &str) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM purchase_orders WHERE order_number = $1)")
                .bind(order_number)
                .fetch_one(&mut *self.db)
                .await?;

        Ok(exists)
    }
}
