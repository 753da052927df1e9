//! Database models for warehouses.

use crate::api::models::warehouses::{WarehouseCreate, WarehouseUpdate};
use crate::types::WarehouseId;
use sqlx::FromRow;

/// Database request for creating a new warehouse
#[derive(Debug, Clone)]
pub struct WarehouseCreateDBRequest {
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
}

impl From<WarehouseCreate> for WarehouseCreateDBRequest {
    fn from(create: WarehouseCreate) -> Self {
        Self {
            warehouse_code: create.warehouse_code,
            address: create.address,
            telephone: create.telephone,
            minimum_capacity: create.minimum_capacity,
            minimum_temperature: create.minimum_temperature,
        }
    }
}

/// Database request for updating a warehouse
#[derive(Debug, Clone, Default)]
pub struct WarehouseUpdateDBRequest {
    pub warehouse_code: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub minimum_capacity: Option<i32>,
    pub minimum_temperature: Option<f64>,
}

impl From<WarehouseUpdate> for WarehouseUpdateDBRequest {
    fn from(update: WarehouseUpdate) -> Self {
        Self {
            warehouse_code: update.warehouse_code,
            address: update.address,
            telephone: update.telephone,
            minimum_capacity: update.minimum_capacity,
            minimum_temperature: update.minimum_temperature,
        }
    }
}

/// Database response for a warehouse
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct WarehouseDBResponse {
    pub id: WarehouseId,
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
}
