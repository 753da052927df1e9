//! Database repository for localities and their seller/carrier counts.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::localities::{LocalityCreateDBRequest, LocalityDBResponse, LocalityUpdateDBRequest},
};
use crate::types::LocalityId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Localities<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Localities<'c> {
    type CreateRequest = LocalityCreateDBRequest;
    type UpdateRequest = LocalityUpdateDBRequest;
    type Response = LocalityDBResponse;
    type Id = LocalityId;

    #[instrument(skip(self, request), fields(zip_code = %request.zip_code), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let locality = sqlx::query_as::<_, LocalityDBResponse>(
            r#"
            INSERT INTO localities (zip_code, locality_name, province_name, country_name)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&request.zip_code)
        .bind(&request.locality_name)
        .bind(&request.province_name)
        .bind(&request.country_name)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(locality)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let locality = sqlx::query_as::<_, LocalityDBResponse>("SELECT * FROM localities WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(locality)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let localities = sqlx::query_as::<_, LocalityDBResponse>("SELECT * FROM localities ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(localities)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM localities WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        // Atomic update with conditional field updates
        let locality = sqlx::query_as::<_, LocalityDBResponse>(
            r#"
            UPDATE localities SET
                zip_code = COALESCE($2, zip_code),
                locality_name = COALESCE($3, locality_name),
                province_name = COALESCE($4, province_name),
                country_name = COALESCE($5, country_name)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.zip_code)
        .bind(&request.locality_name)
        .bind(&request.province_name)
        .bind(&request.country_name)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(locality)
    }
}

impl<'c> Localities<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, zip_code: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM localities WHERE zip_code = $1)")
            .bind(zip_code)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(exists)
    }

    /// Number of sellers per locality, for every locality or only `id` when given.
    #[instrument(skip(self), err)]
    pub async fn count_sellers(&mut self, id: Option<LocalityId>) -> Result<Vec<(LocalityId, i64)>> {
        let counts = sqlx::query_as::<_, (LocalityId, i64)>(
            r#"
            SELECT l.id, COUNT(s.id)
            FROM localities l
            LEFT JOIN sellers s ON s.locality_id = l.id
            WHERE $1::INTEGER IS NULL OR l.id = $1
            GROUP BY l.id
            ORDER BY l.id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(counts)
    }

    /// Number of carriers per locality, for every locality or only `id` when given.
    #[instrument(skip(self), err)]
    pub async fn count_carriers(&mut self, id: Option<LocalityId>) -> Result<Vec<(LocalityId, i64)>> {
        let counts = sqlx::query_as::<_, (LocalityId, i64)>(
            r#"
            SELECT l.id, COUNT(c.id)
            FROM localities l
            LEFT JOIN carriers c ON c.locality_id = l.id
            WHERE $1::INTEGER IS NULL OR l.id = $1
            GROUP BY l.id
            ORDER BY l.id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_carrier, create_test_locality, create_test_seller};
    use sqlx::PgPool;

    fn locality_request(zip_code: &str) -> LocalityCreateDBRequest {
        LocalityCreateDBRequest {
            zip_code: zip_code.to_string(),
            locality_name: "Lujan".to_string(),
            province_name: "Buenos Aires".to_string(),
            country_name: "Argentina".to_string(),
        }
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_create_and_get_locality(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Localities::new(&mut conn);

        let created = repo.create(&locality_request("6700")).await.expect("Failed to create locality");
        assert!(created.id > 0);
        assert_eq!(created.zip_code, "6700");

        let fetched = repo.get_by_id(created.id).await.unwrap().expect("Locality should exist");
        assert_eq!(fetched, created);

        assert!(repo.exists("6700").await.unwrap());
        assert!(!repo.exists("1000").await.unwrap());
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_duplicate_zip_code_is_a_unique_violation(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Localities::new(&mut conn);

        repo.create(&locality_request("6700")).await.unwrap();
        let err = repo.create(&locality_request("6700")).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_partial_update_keeps_unset_fields(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Localities::new(&mut conn);
        let created = repo.create(&locality_request("6700")).await.unwrap();

        let updated = repo
            .update(
                created.id,
                &LocalityUpdateDBRequest {
                    locality_name: Some("Mercedes".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.locality_name, "Mercedes");
        assert_eq!(updated.zip_code, created.zip_code);
        assert_eq!(updated.province_name, created.province_name);
        assert_eq!(updated.country_name, created.country_name);

        let missing = repo.update(created.id + 1000, &LocalityUpdateDBRequest::default()).await;
        assert!(matches!(missing, Err(DbError::NotFound)));
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_delete_locality(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Localities::new(&mut conn);
        let created = repo.create(&locality_request("6700")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_count_sellers_and_carriers_include_empty_localities(pool: PgPool) {
        let busy = create_test_locality(&pool, "1000").await;
        let empty = create_test_locality(&pool, "2000").await;
        create_test_seller(&pool, 1, busy.id).await;
        create_test_seller(&pool, 2, busy.id).await;
        create_test_carrier(&pool, "CID#1", busy.id).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Localities::new(&mut conn);

        let sellers = repo.count_sellers(None).await.unwrap();
        assert_eq!(sellers, vec![(busy.id, 2), (empty.id, 0)]);

        let carriers = repo.count_carriers(Some(busy.id)).await.unwrap();
        assert_eq!(carriers, vec![(busy.id, 1)]);

        let carriers = repo.count_carriers(Some(empty.id)).await.unwrap();
        assert_eq!(carriers, vec![(empty.id, 0)]);

        assert!(repo.count_sellers(Some(empty.id + 1000)).await.unwrap().is_empty());
    }
}
