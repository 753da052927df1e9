//! Database repository for buyers and their purchase order counts.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::buyers::{BuyerCreateDBRequest, BuyerDBResponse, BuyerUpdateDBRequest},
};
use crate::types::BuyerId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Buyers<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Buyers<'c> {
    type CreateRequest = BuyerCreateDBRequest;
    type UpdateRequest = BuyerUpdateDBRequest;
    type Response = BuyerDBResponse;
    type Id = BuyerId;

    #[instrument(skip(self, request), fields(card_number_id = %request.card_number_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let buyer = sqlx::query_as::<_, BuyerDBResponse>(
            r#"
            INSERT INTO buyers (card_number_id, first_name, last_name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&request.card_number_id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(buyer)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let buyer = sqlx::query_as::<_, BuyerDBResponse>("SELECT * FROM buyers WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(buyer)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let buyers = sqlx::query_as::<_, BuyerDBResponse>("SELECT * FROM buyers ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(buyers)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM buyers WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let buyer = sqlx::query_as::<_, BuyerDBResponse>(
            r#"
            UPDATE buyers SET
                card_number_id = COALESCE($2, card_number_id),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.card_number_id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(buyer)
    }
}

impl<'c> Buyers<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, card_number_id: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM buyers WHERE card_number_id = $1)")
            .bind(card_number_id)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(exists)
    }

    /// Number of purchase orders placed per buyer, for every buyer or only `id`.
    #[instrument(skip(self), err)]
    pub async fn count_purchase_orders(&mut self, id: Option<BuyerId>) -> Result<Vec<(BuyerId, i64)>> {
        let counts = sqlx::query_as::<_, (BuyerId, i64)>(
            r#"
            SELECT b.id, COUNT(o.id)
            FROM buyers b
            LEFT JOIN purchase_orders o ON o.buyer_id = b.id
            WHERE $1::INTEGER IS NULL OR b.id = $1
            GROUP BY b.id
            ORDER BY b.id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(counts)
    }
}
