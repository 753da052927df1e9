//! Product batch rules: unique batch numbers, quantity/date consistency and existing
//! product and section.

use crate::db::{
    handlers::{Batches, Repository},
    models::batches::{BatchCreateDBRequest, BatchDBResponse, BatchUpdateDBRequest},
};
use crate::errors::{Error, Result};
use crate::services::{already_exists, classify_delete, classify_write, db_error, not_found};
use crate::types::BatchId;
use chrono::NaiveDate;
use sqlx::PgPool;

const RESOURCE: &str = "Product batch";

/// Cross-field batch invariants. The hour range is enforced on the request body itself.
pub(crate) fn check_batch(
    current_quantity: i32,
    initial_quantity: i32,
    manufacturing_date: NaiveDate,
    due_date: NaiveDate,
) -> Result<()> {
    if current_quantity > initial_quantity {
        return Err(Error::Unprocessable {
            message: format!(
                "current_quantity ({current_quantity}) must not exceed initial_quantity ({initial_quantity})"
            ),
        });
    }
    if manufacturing_date > due_date {
        return Err(Error::Unprocessable {
            message: format!("manufacturing_date ({manufacturing_date}) must not be after due_date ({due_date})"),
        });
    }
    Ok(())
}

#[derive(Clone)]
pub struct BatchService {
    db: PgPool,
}

impl BatchService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<BatchDBResponse>> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Ok(Batches::new(&mut conn).list().await?)
    }

    pub async fn get(&self, id: BatchId) -> Result<BatchDBResponse> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Batches::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))
    }

    pub async fn create(&self, request: BatchCreateDBRequest) -> Result<BatchDBResponse> {
        check_batch(
            request.current_quantity,
            request.initial_quantity,
            request.manufacturing_date,
            request.due_date,
        )?;

        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Batches::new(&mut tx);

        if repo.exists(request.batch_number).await? {
            return Err(already_exists(RESOURCE, "batch_number", request.batch_number));
        }
        let batch = repo.create(&request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(batch)
    }

    pub async fn update(&self, id: BatchId, request: BatchUpdateDBRequest) -> Result<BatchDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Batches::new(&mut tx);

        let current = repo.get_by_id(id).await?.ok_or_else(|| not_found(RESOURCE, id))?;
        check_batch(
            request.current_quantity.unwrap_or(current.current_quantity),
            request.initial_quantity.unwrap_or(current.initial_quantity),
            request.manufacturing_date.unwrap_or(current.manufacturing_date),
            request.due_date.unwrap_or(current.due_date),
        )?;
        if let Some(number) = request.batch_number
            && number != current.batch_number
            && repo.exists(number).await?
        {
            return Err(already_exists(RESOURCE, "batch_number", number));
        }
        let batch = repo.update(id, &request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(batch)
    }

    pub async fn delete(&self, id: BatchId) -> Result<()> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        let deleted = Batches::new(&mut conn)
            .delete(id)
            .await
            .map_err(|e| classify_delete(RESOURCE, id, e))?;

        if deleted { Ok(()) } else { Err(not_found(RESOURCE, id)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_consistent_batch() {
        assert!(check_batch(5, 10, date("2025-01-01"), date("2025-06-01")).is_ok());
        assert!(check_batch(10, 10, date("2025-01-01"), date("2025-01-01")).is_ok());
    }

    #[test]
    fn test_current_above_initial() {
        let err = check_batch(11, 10, date("2025-01-01"), date("2025-06-01")).unwrap_err();
        assert_eq!(err.to_string(), "current_quantity (11) must not exceed initial_quantity (10)");
    }

    #[test]
    fn test_manufactured_after_due_date() {
        let err = check_batch(1, 10, date("2025-07-01"), date("2025-06-01")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "manufacturing_date (2025-07-01) must not be after due_date (2025-06-01)"
        );
    }
}
