//! Database repository for product batches.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::batches::{BatchCreateDBRequest, BatchDBResponse, BatchUpdateDBRequest},
};
use crate::types::BatchId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Batches<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Batches<'c> {
    type CreateRequest = BatchCreateDBRequest;
    type UpdateRequest = BatchUpdateDBRequest;
    type Response = BatchDBResponse;
    type Id = BatchId;

    #[instrument(skip(self, request), fields(batch_number = request.batch_number), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let batch = sqlx::query_as::<_, BatchDBResponse>(
            r#"
            INSERT INTO product_batches (
                batch_number, current_quantity, initial_quantity, current_temperature,
                minimum_temperature, due_date, manufacturing_date, manufacturing_hour,
                product_id, section_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(request.batch_number)
        .bind(request.current_quantity)
        .bind(request.initial_quantity)
        .bind(request.current_temperature)
        .bind(request.minimum_temperature)
        .bind(request.due_date)
        .bind(request.manufacturing_date)
        .bind(request.manufacturing_hour)
        .bind(request.product_id)
        .bind(request.section_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(batch)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let batch = sqlx::query_as::<_, BatchDBResponse>("SELECT * FROM product_batches WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(batch)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let batches = sqlx::query_as::<_, BatchDBResponse>("SELECT * FROM product_batches ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(batches)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM product_batches WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let batch = sqlx::query_as::<_, BatchDBResponse>(
            r#"
            UPDATE product_batches SET
                batch_number = COALESCE($2, batch_number),
                current_quantity = COALESCE($3, current_quantity),
                initial_quantity = COALESCE($4, initial_quantity),
                current_temperature = COALESCE($5, current_temperature),
                minimum_temperature = COALESCE($6, minimum_temperature),
                due_date = COALESCE($7, due_date),
                manufacturing_date = COALESCE($8, manufacturing_date),
                manufacturing_hour = COALESCE($9, manufacturing_hour),
                product_id = COALESCE($10, product_id),
                section_id = COALESCE($11, section_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.batch_number)
        .bind(request.current_quantity)
        .bind(request.initial_quantity)
        .bind(request.current_temperature)
        .bind(request.minimum_temperature)
        .bind(request.due_date)
        .bind(request.manufacturing_date)
        .bind(request.manufacturing_hour)
        .bind(request.product_id)
        .bind(request.section_id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(batch)
    }
}

impl<'c> Batches<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, batch_number: i32) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM product_batches WHERE batch_number = $1)")
                .bind(batch_number)
                .fetch_one(&mut *self.db)
                .await?;

        Ok(exists)
    }
}
