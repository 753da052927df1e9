//! API request/response models for employees.

use crate::db::models::employees::EmployeeDBResponse;
use crate::services::reports::CountReport;
use crate::types::{EmployeeId, WarehouseId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for registering an employee.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct EmployeeCreate {
    /// Badge number (must be unique)
    #[schema(example = "EMP-0042")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub card_number_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,
    /// Warehouse the employee works at
    pub warehouse_id: WarehouseId,
}

/// Request body for updating an employee. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct EmployeeUpdate {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub card_number_id: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: Option<String>,
    pub warehouse_id: Option<WarehouseId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: EmployeeId,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: WarehouseId,
}

impl From<EmployeeDBResponse> for EmployeeResponse {
    fn from(db: EmployeeDBResponse) -> Self {
        Self {
            id: db.id,
            card_number_id: db.card_number_id,
            first_name: db.first_name,
            last_name: db.last_name,
            warehouse_id: db.warehouse_id,
        }
    }
}

/// An employee together with the number of inbound orders they received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeInboundOrdersReport {
    pub id: EmployeeId,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: WarehouseId,
    pub inbound_orders_count: i64,
}

impl From<CountReport<EmployeeDBResponse>> for EmployeeInboundOrdersReport {
    fn from(report: CountReport<EmployeeDBResponse>) -> Self {
        let employee = report.parent;
        Self {
            id: employee.id,
            card_number_id: employee.card_number_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            warehouse_id: employee.warehouse_id,
            inbound_orders_count: report.count,
        }
    }
}
