//! Database models for product batches.

use crate::api::models::batches::{BatchCreate, BatchUpdate};
use crate::types::{BatchId, ProductId, SectionId};
use chrono::NaiveDate;
use sqlx::FromRow;

/// Database request for creating a new product batch
#[derive(Debug, Clone)]
pub struct BatchCreateDBRequest {
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

impl From<BatchCreate> for BatchCreateDBRequest {
    fn from(create: BatchCreate) -> Self {
        Self {
            batch_number: create.batch_number,
            current_quantity: create.current_quantity,
            initial_quantity: create.initial_quantity,
            current_temperature: create.current_temperature,
            minimum_temperature: create.minimum_temperature,
            due_date: create.due_date,
            manufacturing_date: create.manufacturing_date,
            manufacturing_hour: create.manufacturing_hour,
            product_id: create.product_id,
            section_id: create.section_id,
        }
    }
}

/// Database request for updating a product batch
#[derive(Debug, Clone, Default)]
pub struct BatchUpdateDBRequest {
    pub batch_number: Option<i32>,
    pub current_quantity: Option<i32>,
    pub initial_quantity: Option<i32>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub manufacturing_date: Option<NaiveDate>,
    pub manufacturing_hour: Option<i32>,
    pub product_id: Option<ProductId>,
    pub section_id: Option<SectionId>,
}

impl From<BatchUpdate> for BatchUpdateDBRequest {
    fn from(update: BatchUpdate) -> Self {
        Self {
            batch_number: update.batch_number,
            current_quantity: update.current_quantity,
            initial_quantity: update.initial_quantity,
            current_temperature: update.current_temperature,
            minimum_temperature: update.minimum_temperature,
            due_date: update.due_date,
            manufacturing_date: update.manufacturing_date,
            manufacturing_hour: update.manufacturing_hour,
            product_id: update.product_id,
            section_id: update.section_id,
        }
    }
}

/// Database response for a product batch
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct BatchDBResponse {
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
