//! Database repository for sections and their stocked product quantities.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::sections::{SectionCreateDBRequest, SectionDBResponse, SectionUpdateDBRequest},
};
use crate::types::SectionId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Sections<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Sections<'c> {
    type CreateRequest = SectionCreateDBRequest;
    type UpdateRequest = SectionUpdateDBRequest;
    type Response = SectionDBResponse;
    type Id = SectionId;

    #[instrument(skip(self, request), fields(section_number = request.section_number), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let section = sqlx::query_as::<_, SectionDBResponse>(
            r#"
            INSERT INTO sections (
                section_number, current_temperature, minimum_temperature, current_capacity,
                minimum_capacity, maximum_capacity, warehouse_id, product_type_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(request.section_number)
        .bind(request.current_temperature)
        .bind(request.minimum_temperature)
        .bind(request.current_capacity)
        .bind(request.minimum_capacity)
        .bind(request.maximum_capacity)
        .bind(request.warehouse_id)
        .bind(request.product_type_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(section)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let section = sqlx::query_as::<_, SectionDBResponse>("SELECT * FROM sections WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(section)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let sections = sqlx::query_as::<_, SectionDBResponse>("SELECT * FROM sections ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(sections)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let section = sqlx::query_as::<_, SectionDBResponse>(
            r#"
            UPDATE sections SET
                section_number = COALESCE($2, section_number),
                current_temperature = COALESCE($3, current_temperature),
                minimum_temperature = COALESCE($4, minimum_temperature),
                current_capacity = COALESCE($5, current_capacity),
                minimum_capacity = COALESCE($6, minimum_capacity),
                maximum_capacity = COALESCE($7, maximum_capacity),
                warehouse_id = COALESCE($8, warehouse_id),
                product_type_id = COALESCE($9, product_type_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.section_number)
        .bind(request.current_temperature)
        .bind(request.minimum_temperature)
        .bind(request.current_capacity)
        .bind(request.minimum_capacity)
        .bind(request.maximum_capacity)
        .bind(request.warehouse_id)
        .bind(request.product_type_id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(section)
    }
}

impl<'c> Sections<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, section_number: i32) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM sections WHERE section_number = $1)")
                .bind(section_number)
                .fetch_one(&mut *self.db)
                .await?;

        Ok(exists)
    }

    /// Units in stock per section: the sum of `current_quantity` over its batches.
    #[instrument(skip(self), err)]
    pub async fn count_products(&mut self, id: Option<SectionId>) -> Result<Vec<(SectionId, i64)>> {
        let counts = sqlx::query_as::<_, (SectionId, i64)>(
            r#"
            SELECT s.id, COALESCE(SUM(b.current_quantity), 0)::BIGINT
            FROM sections s
            LEFT JOIN product_batches b ON b.section_id = s.id
            WHERE $1::INTEGER IS NULL OR s.id = $1
            GROUP BY s.id
            ORDER BY s.id
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
    use crate::test_utils::{create_test_batch, create_test_product, create_test_section, create_test_warehouse};
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_count_products_sums_batch_quantities(pool: PgPool) {
        let stocked = create_test_section(&pool, 1).await;
        let empty = create_test_section(&pool, 2).await;
        let product = create_test_product(&pool, "P-1").await;
        create_test_batch(&pool, 10, product.id, stocked.id, 30).await;
        create_test_batch(&pool, 11, product.id, stocked.id, 12).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Sections::new(&mut conn);

        let counts = repo.count_products(None).await.unwrap();
        assert_eq!(counts, vec![(stocked.id, 42), (empty.id, 0)]);

        let counts = repo.count_products(Some(empty.id)).await.unwrap();
        assert_eq!(counts, vec![(empty.id, 0)]);
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_capacity_bounds_are_checked_by_the_schema(pool: PgPool) {
        let warehouse = create_test_warehouse(&pool, "WH-1").await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Sections::new(&mut conn);

        let err = repo
            .create(&SectionCreateDBRequest {
                section_number: 1,
                current_temperature: 2.0,
                minimum_temperature: -10.0,
                current_capacity: 60,
                minimum_capacity: 5,
                maximum_capacity: 50,
                warehouse_id: warehouse.id,
                product_type_id: 1,
            })
            .await
            .unwrap_err();

        match err {
            DbError::CheckViolation { constraint, .. } => {
                assert_eq!(constraint.as_deref(), Some("sections_current_capacity_check"));
            }
            other => panic!("expected a check violation, got {other:?}"),
        }
    }
}
