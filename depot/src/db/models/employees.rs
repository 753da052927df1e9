//! Database models for employees.

use crate::api::models::employees::{EmployeeCreate, EmployeeUpdate};
use crate::types::{EmployeeId, WarehouseId};
use sqlx::FromRow;

/// Database request for creating a new employee
#[derive(Debug, Clone)]
pub struct EmployeeCreateDBRequest {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: WarehouseId,
}

impl From<EmployeeCreate> for EmployeeCreateDBRequest {
    fn from(create: EmployeeCreate) -> Self {
        Self {
            card_number_id: create.card_number_id,
            first_name: create.first_name,
            last_name: create.last_name,
            warehouse_id: create.warehouse_id,
        }
    }
}

/// Database request for updating an employee
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdateDBRequest {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub warehouse_id: Option<WarehouseId>,
}

impl From<EmployeeUpdate> for EmployeeUpdateDBRequest {
    fn from(update: EmployeeUpdate) -> Self {
        Self {
            card_number_id: update.card_number_id,
            first_name: update.first_name,
            last_name: update.last_name,
            warehouse_id: update.warehouse_id,
        }
    }
}

/// Database response for an employee
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EmployeeDBResponse {
    pub id: EmployeeId,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: WarehouseId,
}
