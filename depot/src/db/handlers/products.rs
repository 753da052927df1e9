//! Database repository for products.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::products::{ProductCreateDBRequest, ProductDBResponse, ProductUpdateDBRequest},
};
use crate::types::ProductId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Products<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Products<'c> {
    type CreateRequest = ProductCreateDBRequest;
    type UpdateRequest = ProductUpdateDBRequest;
    type Response = ProductDBResponse;
    type Id = ProductId;

    #[instrument(skip(self, request), fields(product_code = %request.product_code), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let product = sqlx::query_as::<_, ProductDBResponse>(
            r#"
            INSERT INTO products (
                product_code, description, width, height, length, net_weight, expiration_rate,
                recommended_freezing_temperature, freezing_rate, product_type_id, seller_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&request.product_code)
        .bind(&request.description)
        .bind(request.width)
        .bind(request.height)
        .bind(request.length)
        .bind(request.net_weight)
        .bind(request.expiration_rate)
        .bind(request.recommended_freezing_temperature)
        .bind(request.freezing_rate)
        .bind(request.product_type_id)
        .bind(request.seller_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(product)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let product = sqlx::query_as::<_, ProductDBResponse>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(product)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let products = sqlx::query_as::<_, ProductDBResponse>("SELECT * FROM products ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(products)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let product = sqlx::query_as::<_, ProductDBResponse>(
            r#"
            UPDATE products SET
                product_code = COALESCE($2, product_code),
                description = COALESCE($3, description),
                width = COALESCE($4, width),
                height = COALESCE($5, height),
                length = COALESCE($6, length),
                net_weight = COALESCE($7, net_weight),
                expiration_rate = COALESCE($8, expiration_rate),
                recommended_freezing_temperature = COALESCE($9, recommended_freezing_temperature),
                freezing_rate = COALESCE($10, freezing_rate),
                product_type_id = COALESCE($11, product_type_id),
                seller_id = COALESCE($12, seller_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.product_code)
        .bind(&request.description)
        .bind(request.width)
        .bind(request.height)
        .bind(request.length)
        .bind(request.net_weight)
        .bind(request.expiration_rate)
        .bind(request.recommended_freezing_temperature)
        .bind(request.freezing_rate)
        .bind(request.product_type_id)
        .bind(request.seller_id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(product)
    }
}

impl<'c> Products<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, product_code: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE product_code = $1)")
            .bind(product_code)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(exists)
    }
}
