//! API request/response models for inbound orders.

use crate::db::models::inbound_orders::InboundOrderDBResponse;
use crate::types::{BatchId, EmployeeId, InboundOrderId, WarehouseId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for recording an inbound order: a product batch received by an employee at a
/// warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct InboundOrderCreate {
    /// Order number (must be unique)
    #[schema(example = "IN-2025-0001")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub order_number: String,
    #[schema(example = "2025-03-02")]
    pub order_date: NaiveDate,
    pub employee_id: EmployeeId,
    pub product_batch_id: BatchId,
    pub warehouse_id: WarehouseId,
}

/// Request body for updating an inbound order. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct InboundOrderUpdate {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub order_number: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub employee_id: Option<EmployeeId>,
    pub product_batch_id: Option<BatchId>,
    pub warehouse_id: Option<WarehouseId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InboundOrderResponse {
    pub id: InboundOrderId,
    pub order_number: String,
    pub order_date: NaiveDate,
    pub employee_id: EmployeeId,
    pub product_batch_id: BatchId,
    pub warehouse_id: WarehouseId,
}

impl From<InboundOrderDBResponse> for InboundOrderResponse {
    fn from(db: InboundOrderDBResponse) -> Self {
        Self {
            id: db.id,
            order_number: db.order_number,
            order_date: db.order_date,
            employee_id: db.employee_id,
            product_batch_id: db.product_batch_id,
            warehouse_id: db.warehouse_id,
        }
    }
}
