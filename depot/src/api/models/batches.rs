//! API request/response models for product batches.

use crate::db::models::batches::BatchDBResponse;
use crate::types::{BatchId, ProductId, SectionId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for registering a product batch.
///
/// `current_quantity` must not exceed `initial_quantity`, and `manufacturing_date` must not
/// be after `due_date`. Dates use the `YYYY-MM-DD` format.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct BatchCreate {
    /// Batch number (must be unique)
    #[schema(example = 111)]
    pub batch_number: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub current_quantity: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub initial_quantity: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    #[schema(example = "2025-06-30")]
    pub due_date: NaiveDate,
    #[schema(example = "2025-03-01")]
    pub manufacturing_date: NaiveDate,
    #[validate(range(min = 0, max = 23, message = "must be between 0 and 23"))]
    pub manufacturing_hour: i32,
    pub product_id: ProductId,
    pub section_id: SectionId,
}

/// Request body for updating a product batch. Omitted fields keep their stored value; the
/// quantity and date ordering is checked against the merged result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct BatchUpdate {
    pub batch_number: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub current_quantity: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub initial_quantity: Option<i32>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub manufacturing_date: Option<NaiveDate>,
    #[validate(range(min = 0, max = 23, message = "must be between 0 and 23"))]
    pub manufacturing_hour: Option<i32>,
    pub product_id: Option<ProductId>,
    pub section_id: Option<SectionId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BatchResponse {
    pub id: BatchId,
    pub batch_number: i32,
    pub current_quantity: i32,
    pub initial_quantity: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub due_date: NaiveDate,
    pub manufacturing_date: NaiveDate,
    pub manufacturing_hour: i32,
    pub product_id: ProductId,
    pub section_id: SectionId,
}

impl From<BatchDBResponse> for BatchResponse {
    fn from(db: BatchDBResponse) -> Self {
        Self {
            id: db.id,
            batch_number: db.batch_number,
            current_quantity: db.current_quantity,
            initial_quantity: db.initial_quantity,
            current_temperature: db.current_temperature,
            minimum_temperature: db.minimum_temperature,
            due_date: db.due_date,
            manufacturing_date: db.manufacturing_date,
            manufacturing_hour: db.manufacturing_hour,
            product_id: db.product_id,
            section_id: db.section_id,
        }
    }
}
