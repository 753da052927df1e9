//! Database models for warehouse sections.

use crate::api::models::sections::{SectionCreate, SectionUpdate};
use crate::types::{ProductTypeId, SectionId, WarehouseId};
use sqlx::FromRow;

/// Database request for creating a new section
#[derive(Debug, Clone)]
pub struct SectionCreateDBRequest {
    pub section_number: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: WarehouseId,
    pub product_type_id: ProductTypeId,
}

impl From<SectionCreate> for SectionCreateDBRequest {
    fn from(create: SectionCreate) -> Self {
        Self {
            section_number: create.section_number,
            current_temperature: create.current_temperature,
            minimum_temperature: create.minimum_temperature,
            current_capacity: create.current_capacity,
            minimum_capacity: create.minimum_capacity,
            maximum_capacity: create.maximum_capacity,
            warehouse_id: create.warehouse_id,
            product_type_id: create.product_type_id,
        }
    }
}

/// Database request for updating a section
#[derive(Debug, Clone, Default)]
pub struct SectionUpdateDBRequest {
    pub section_number: Option<i32>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    pub current_capacity: Option<i32>,
    pub minimum_capacity: Option<i32>,
    pub maximum_capacity: Option<i32>,
    pub warehouse_id: Option<WarehouseId>,
    pub product_type_id: Option<ProductTypeId>,
}

impl From<SectionUpdate> for SectionUpdateDBRequest {
    fn from(update: SectionUpdate) -> Self {
        Self {
            section_number: update.section_number,
            current_temperature: update.current_temperature,
            minimum_temperature: update.minimum_temperature,
            current_capacity: update.current_capacity,
            minimum_capacity: update.minimum_capacity,
            maximum_capacity: update.maximum_capacity,
            warehouse_id: update.warehouse_id,
            product_type_id: update.product_type_id,
        }
    }
}

/// Database response for a section
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SectionDBResponse {
    pub id: SectionId,
    pub section_number: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: WarehouseId,
    pub product_type_id: ProductTypeId,
}
