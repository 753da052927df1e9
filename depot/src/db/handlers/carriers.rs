//! Database repository for carriers.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::carriers::{CarrierCreateDBRequest, CarrierDBResponse, CarrierUpdateDBRequest},
};
use crate::types::CarrierId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Carriers<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Carriers<'c> {
    type CreateRequest = CarrierCreateDBRequest;
    type UpdateRequest = CarrierUpdateDBRequest;
    type Response = CarrierDBResponse;
    type Id = CarrierId;

    #[instrument(skip(self, request), fields(cid = %request.cid), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let carrier = sqlx::query_as::<_, CarrierDBResponse>(
            r#"
            INSERT INTO carriers (cid, company_name, address, telephone, locality_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&request.cid)
        .bind(&request.company_name)
        .bind(&request.address)
        .bind(&request.telephone)
        .bind(request.locality_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(carrier)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let carrier = sqlx::query_as::<_, CarrierDBResponse>("SELECT * FROM carriers WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(carrier)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let carriers = sqlx::query_as::<_, CarrierDBResponse>("SELECT * FROM carriers ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(carriers)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM carriers WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let carrier = sqlx::query_as::<_, CarrierDBResponse>(
            r#"
            UPDATE carriers SET
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
        .bind(&request.cid)
        .bind(&request.company_name)
        .bind(&request.address)
        .bind(&request.telephone)
        .bind(request.locality_id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(carrier)
    }
}

impl<'c> Carriers<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, cid: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM carriers WHERE cid = $1)")
            .bind(cid)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(exists)
    }
}
