//! API request/response models for warehouses.

use crate::db::models::warehouses::WarehouseDBResponse;
use crate::types::WarehouseId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct WarehouseCreate {
    /// Warehouse code (must be unique)
    #[schema(example = "WH-NORTH-01")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub warehouse_code: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub telephone: String,
    #[schema(example = 100)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub minimum_capacity: i32,
    /// Degrees Celsius
    #[schema(example = -18.0)]
    pub minimum_temperature: f64,
}

/// Request body for updating a warehouse. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct WarehouseUpdate {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub warehouse_code: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub telephone: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub minimum_capacity: Option<i32>,
    pub minimum_temperature: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WarehouseResponse {
    pub id: WarehouseId,
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
}

impl From<WarehouseDBResponse> for WarehouseResponse {
    fn from(db: WarehouseDBResponse) -> Self {
        Self {
            id: db.id,
            warehouse_code: db.warehouse_code,
            address: db.address,
            telephone: db.telephone,
            minimum_capacity: db.minimum_capacity,
            minimum_temperature: db.minimum_temperature,
        }
    }
}
