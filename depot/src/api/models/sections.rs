//! API request/response models for warehouse sections.

use crate::db::models::sections::SectionDBResponse;
use crate::services::reports::CountReport;
use crate::types::{ProductTypeId, SectionId, WarehouseId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a section.
///
/// `minimum_capacity` and `current_capacity` must not exceed `maximum_capacity`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct SectionCreate {
    /// Section number (must be unique)
    #[schema(example = 3)]
    pub section_number: i32,
    #[schema(example = 2.5)]
    pub current_temperature: f64,
    #[schema(example = -4.0)]
    pub minimum_temperature: f64,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub current_capacity: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub minimum_capacity: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub maximum_capacity: i32,
    pub warehouse_id: WarehouseId,
    pub product_type_id: ProductTypeId,
}

/// Request body for updating a section. Omitted fields keep their stored value; the capacity
/// bounds are checked against the merged result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct SectionUpdate {
    pub section_number: Option<i32>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub current_capacity: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub minimum_capacity: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub maximum_capacity: Option<i32>,
    pub warehouse_id: Option<WarehouseId>,
    pub product_type_id: Option<ProductTypeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SectionResponse {
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

impl From<SectionDBResponse> for SectionResponse {
    fn from(db: SectionDBResponse) -> Self {
        Self {
            id: db.id,
            section_number: db.section_number,
            current_temperature: db.current_temperature,
            minimum_temperature: db.minimum_temperature,
            current_capacity: db.current_capacity,
            minimum_capacity: db.minimum_capacity,
            maximum_capacity: db.maximum_capacity,
            warehouse_id: db.warehouse_id,
            product_type_id: db.product_type_id,
        }
    }
}

/// Units in stock in a section, summed over its product batches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SectionProductsReport {
    pub section_id: SectionId,
    pub section_number: i32,
    pub products_count: i64,
}

impl From<CountReport<SectionDBResponse>> for SectionProductsReport {
    fn from(report: CountReport<SectionDBResponse>) -> Self {
        Self {
            section_id: report.parent.id,
            section_number: report.parent.section_number,
            products_count: report.count,
        }
    }
}
