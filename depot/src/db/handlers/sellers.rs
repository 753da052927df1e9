//! Database repository for sellers.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::sellers::{SellerCreateDBRequest, SellerDBResponse, SellerUpdateDBRequest},
};
use crate::types::SellerId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Sellers<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Sellers<'c> {
    type CreateRequest = SellerCreateDBRequest;
    type UpdateRequest = SellerUpdateDBRequest;
    type Response = SellerDBResponse;
    type Id = SellerId;

    #[instrument(skip(self, request), fields(cid = request.cid), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let seller = sqlx::query_as::<_, SellerDBResponse>(
            r#"
            INSERT INTO sellers (cid, company_name, address, telephone, locality_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(request.cid)
        .bind(&request.company_name)
        .bind(&request.address)
        .bind(&request.telephone)
        .bind(request.locality_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(seller)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let seller = sqlx::query_as::<_, SellerDBResponse>("SELECT * FROM sellers WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(seller)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let sellers = sqlx::query_as::<_, SellerDBResponse>("SELECT * FROM sellers ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(sellers)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sellers WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let seller = sqlx::query_as::<_, SellerDBResponse>(
            r#"
            UPDATE sellers SET
                cid = COALESCE($2, cid),
                company_name = COALESCE($3, company_name),
                address = COALESCE($4, address),
                telephone = COALESCE($5, telephone),
                locality_id = COALESCE($6, locality_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.cid)
        .bind(&request.company_name)
        .bind(&request.address)
        .bind(&request.telephone)
        .bind(request.locality_id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(seller)
    }
}

impl<'c> Sellers<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, cid: i32) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM sellers WHERE cid = $1)")
            .bind(cid)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_locality;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_unknown_locality_is_a_foreign_key_violation(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Sellers::new(&mut conn);

        let err = repo
            .create(&SellerCreateDBRequest {
                cid: 1,
                company_name: "Acme".to_string(),
                address: "Main St 1".to_string(),
                telephone: "555".to_string(),
                locality_id: Some(9999),
            })
            .await
            .unwrap_err();

        assert_eq!(err.foreign_key_column().as_deref(), Some("locality_id"));
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_exists_by_cid(pool: PgPool) {
        let locality = create_test_locality(&pool, "1000").await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Sellers::new(&mut conn);

        assert!(!repo.exists(42).await.unwrap());
        repo.create(&SellerCreateDBRequest {
            cid: 42,
            company_name: "Acme".to_string(),
            address: "Main St 1".to_string(),
            telephone: "555".to_string(),
            locality_id: Some(locality.id),
        })
        .await
        .unwrap();
        assert!(repo.exists(42).await.unwrap());
    }
}
