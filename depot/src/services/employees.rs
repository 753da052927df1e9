//! Employee rules: unique card numbers, an existing warehouse and the inbound orders report.

use crate::db::{
    handlers::{Employees, Repository},
    models::employees::{EmployeeCreateDBRequest, EmployeeDBResponse, EmployeeUpdateDBRequest},
};
use crate::errors::Result;
use crate::services::{
    already_exists, classify_delete, classify_write, db_error, not_found,
    reports::{CountReport, index_by, zip_counts},
};
use crate::types::EmployeeId;
use sqlx::PgPool;

const RESOURCE: &str = "Employee";

#[derive(Clone)]
pub struct EmployeeService {
    db: PgPool,
}

impl EmployeeService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<EmployeeDBResponse>> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Ok(Employees::new(&mut conn).list().await?)
    }

    pub async fn get(&self, id: EmployeeId) -> Result<EmployeeDBResponse> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Employees::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))
    }

    pub async fn create(&self, request: EmployeeCreateDBRequest) -> Result<EmployeeDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Employees::new(&mut tx);

        if repo.exists(&request.card_number_id).await? {
            return Err(already_exists(RESOURCE, "card_number_id", &request.card_number_id));
        }
        let employee = repo.create(&request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(employee)
    }

    pub async fn update(&self, id: EmployeeId, request: EmployeeUpdateDBRequest) -> Result<EmployeeDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Employees::new(&mut tx);

        let current = repo.get_by_id(id).await?.ok_or_else(|| not_found(RESOURCE, id))?;
        if let Some(card) = &request.card_number_id
            && *card != current.card_number_id
            && repo.exists(card).await?
        {
            return Err(already_exists(RESOURCE, "card_number_id", card));
        }
        let employee = repo.update(id, &request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(employee)
    }

    pub async fn delete(&self, id: EmployeeId) -> Result<()> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        let deleted = Employees::new(&mut conn)
            .delete(id)
            .await
            .map_err(|e| classify_delete(RESOURCE, id, e))?;

        if deleted { Ok(()) } else { Err(not_found(RESOURCE, id)) }
    }

    pub async fn report_inbound_orders(&self, id: Option<EmployeeId>) -> Result<Vec<CountReport<EmployeeDBResponse>>> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Employees::new(&mut tx);

        let employees = index_by(repo.list().await?, |e| e.id);
        let counts = repo.count_inbound_orders(id).await?;

        tx.commit().await.map_err(db_error)?;
        zip_counts(employees, counts, id).ok_or_else(|| not_found(RESOURCE, id.unwrap_or_default()))
    }
}
