//! Database repository for warehouses.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::warehouses::{WarehouseCreateDBRequest, WarehouseDBResponse, WarehouseUpdateDBRequest},
};
use crate::types::WarehouseId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Warehouses<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Warehouses<'c> {
    type CreateRequest = WarehouseCreateDBRequest;
    type UpdateRequest = WarehouseUpdateDBRequest;
    type Response = WarehouseDBResponse;
    type Id = WarehouseId;

    #[instrument(skip(self, request), fields(warehouse_code = %request.warehouse_code), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let warehouse = sqlx::query_as::<_, WarehouseDBResponse>(
            r#"
            INSERT INTO warehouses (warehouse_code, address, telephone, minimum_capacity, minimum_temperature)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&request.warehouse_code)
        .bind(&request.address)
        .bind(&request.telephone)
        .bind(request.minimum_capacity)
        .bind(request.minimum_temperature)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(warehouse)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let warehouse = sqlx::query_as::<_, WarehouseDBResponse>("SELECT * FROM warehouses WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(warehouse)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let warehouses = sqlx::query_as::<_, WarehouseDBResponse>("SELECT * FROM warehouses ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(warehouses)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM warehouses WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let warehouse = sqlx::query_as::<_, WarehouseDBResponse>(
            r#"
            UPDATE warehouses SET
                warehouse_code = COALESCE($2, warehouse_code),
                address = COALESCE($3, address),
                telephone = COALESCE($4, telephone),
                minimum_capacity = COALESCE($5, minimum_capacity),
                minimum_temperature = COALESCE($6, minimum_temperature)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.warehouse_code)
        .bind(&request.address)
        .bind(&request.telephone)
        .bind(request.minimum_capacity)
        .bind(request.minimum_temperature)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(warehouse)
    }
}

impl<'c> Warehouses<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, warehouse_code: &str) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM warehouses WHERE warehouse_code = $1)")
                .bind(warehouse_code)
                .fetch_one(&mut *self.db)
                .await?;

        Ok(exists)
    }
}
