//! Database repository for employees and their inbound order counts.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::employees::{EmployeeCreateDBRequest, EmployeeDBResponse, EmployeeUpdateDBRequest},
};
use crate::types::EmployeeId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Employees<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Employees<'c> {
    type CreateRequest = EmployeeCreateDBRequest;
    type UpdateRequest = EmployeeUpdateDBRequest;
    type Response = EmployeeDBResponse;
    type Id = EmployeeId;

    #[instrument(skip(self, request), fields(card_number_id = %request.card_number_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let employee = sqlx::query_as::<_, EmployeeDBResponse>(
            r#"
            INSERT INTO employees (card_number_id, first_name, last_name, warehouse_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&request.card_number_id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(request.warehouse_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(employee)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let employee = sqlx::query_as::<_, EmployeeDBResponse>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(employee)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let employees = sqlx::query_as::<_, EmployeeDBResponse>("SELECT * FROM employees ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(employees)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let employee = sqlx::query_as::<_, EmployeeDBResponse>(
            r#"
            UPDATE employees SET
                card_number_id = COALESCE($2, card_number_id),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                warehouse_id = COALESCE($5, warehouse_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.card_number_id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(request.warehouse_id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(employee)
    }
}

impl<'c> Employees<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, card_number_id: &str) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE card_number_id = $1)")
                .bind(card_number_id)
                .fetch_one(&mut *self.db)
                .await?;

        Ok(exists)
    }

    /// Number of inbound orders received per employee, for every employee or only `id`.
    #[instrument(skip(self), err)]
    pub async fn count_inbound_orders(&mut self, id: Option<EmployeeId>) -> Result<Vec<(EmployeeId, i64)>> {
        let counts = sqlx::query_as::<_, (EmployeeId, i64)>(
            r#"
            SELECT e.id, COUNT(o.id)
            FROM employees e
            LEFT JOIN inbound_orders o ON o.employee_id = e.id
            WHERE $1::INTEGER IS NULL OR e.id = $1
            GROUP BY e.id
            ORDER BY e.id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(counts)
    }
}
