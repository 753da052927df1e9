//! Section rules: unique section numbers, capacity bounds and the stocked-products report.

use crate::db::{
    handlers::{Repository, Sections},
    models::sections::{SectionCreateDBRequest, SectionDBResponse, SectionUpdateDBRequest},
};
use crate::errors::{Error, Result};
use crate::services::{
    already_exists, classify_delete, classify_write, db_error, not_found,
    reports::{CountReport, index_by, zip_counts},
};
use crate::types::SectionId;
use sqlx::PgPool;

const RESOURCE: &str = "Section";

/// Rejects capacity triples where the minimum or the current value exceeds the maximum.
pub(crate) fn check_capacities(current: i32, minimum: i32, maximum: i32) -> Result<()> {
    if minimum > maximum {
        return Err(Error::Unprocessable {
            message: format!("minimum_capacity ({minimum}) must not exceed maximum_capacity ({maximum})"),
        });
    }
    if current > maximum {
        return Err(Error::Unprocessable {
            message: format!("current_capacity ({current}) must not exceed maximum_capacity ({maximum})"),
        });
    }
    Ok(())
}

#[derive(Clone)]
pub struct SectionService {
    db: PgPool,
}

impl SectionService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<SectionDBResponse>> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Ok(Sections::new(&mut conn).list().await?)
    }

    pub async fn get(&self, id: SectionId) -> Result<SectionDBResponse> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Sections::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))
    }

    pub async fn create(&self, request: SectionCreateDBRequest) -> Result<SectionDBResponse> {
        check_capacities(request.current_capacity, request.minimum_capacity, request.maximum_capacity)?;

        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Sections::new(&mut tx);

        if repo.exists(request.section_number).await? {
            return Err(already_exists(RESOURCE, "section_number", request.section_number));
        }
        let section = repo.create(&request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(section)
    }

    pub async fn update(&self, id: SectionId, request: SectionUpdateDBRequest) -> Result<SectionDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Sections::new(&mut tx);

        let current = repo.get_by_id(id).await?.ok_or_else(|| not_found(RESOURCE, id))?;
        check_capacities(
            request.current_capacity.unwrap_or(current.current_capacity),
            request.minimum_capacity.unwrap_or(current.minimum_capacity),
            request.maximum_capacity.unwrap_or(current.maximum_capacity),
        )?;
        if let Some(number) = request.section_number
            && number != current.section_number
            && repo.exists(number).await?
        {
            return Err(already_exists(RESOURCE, "section_number", number));
        }
        let section = repo.update(id, &request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(section)
    }

    pub async fn delete(&self, id: SectionId) -> Result<()> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        let deleted = Sections::new(&mut conn)
            .delete(id)
            .await
            .map_err(|e| classify_delete(RESOURCE, id, e))?;

        if deleted { Ok(()) } else { Err(not_found(RESOURCE, id)) }
    }

    pub async fn report_products(&self, id: Option<SectionId>) -> Result<Vec<CountReport<SectionDBResponse>>> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Sections::new(&mut tx);

        let sections = index_by(repo.list().await?, |s| s.id);
        let counts = repo.count_products(id).await?;

        tx.commit().await.map_err(db_error)?;
        zip_counts(sections, counts, id).ok_or_else(|| not_found(RESOURCE, id.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacities_within_bounds() {
        assert!(check_capacities(5, 1, 10).is_ok());
        assert!(check_capacities(10, 10, 10).is_ok());
    }

    #[test]
    fn test_minimum_above_maximum() {
        let err = check_capacities(1, 11, 10).unwrap_err();
        assert!(matches!(err, Error::Unprocessable { ref message } if message.starts_with("minimum_capacity")));
    }

    #[test]
    fn test_current_above_maximum() {
        let err = check_capacities(11, 1, 10).unwrap_err();
        assert!(matches!(err, Error::Unprocessable { ref message } if message.starts_with("current_capacity")));
    }
}
