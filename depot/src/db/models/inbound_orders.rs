//! Database models for inbound orders.

use crate::api::models::inbound_orders::{InboundOrderCreate, InboundOrderUpdate};
use crate::types::{BatchId, EmployeeId, InboundOrderId, WarehouseId};
use chrono::NaiveDate;
use sqlx::FromRow;

/// Database request for creating a new inbound order
#[derive(Debug, Clone)]
pub struct InboundOrderCreateDBRequest {
    pub order_number: String,
    pub order_date: NaiveDate,
    pub employee_id: EmployeeId,
    pub product_batch_id: BatchId,
    pub warehouse_id: WarehouseId,
}

impl From<InboundOrderCreate> for InboundOrderCreateDBRequest {
    fn from(create: InboundOrderCreate) -> Self {
        Self {
            order_number: create.order_number,
            order_date: create.order_date,
            employee_id: create.employee_id,
            product_batch_id: create.product_batch_id,
            warehouse_id: create.warehouse_id,
        }
    }
}

/// Database request for updating an inbound order
#[derive(Debug, Clone, Default)]
pub struct InboundOrderUpdateDBRequest {
    pub order_number: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub employee_id: Option<EmployeeId>,
    pub product_batch_id: Option<BatchId>,
    pub warehouse_id: Option<WarehouseId>,
}

impl From<InboundOrderUpdate> for InboundOrderUpdateDBRequest {
    fn from(update: InboundOrderUpdate) -> Self {
        Self {
            order_number: update.order_number,
            order_date: update.order_date,
            employee_id: update.employee_id,
            product_batch_id: update.product_batch_id,
            warehouse_id: update.warehouse_id,
        }
    }
}

/// Database response for an inbound order
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct InboundOrderDBResponse {
    pub id: InboundOrderId,
    pub order_number: String,
    pub order_date: NaiveDate,
    pub employee_id: EmployeeId,
    pub product_batch_id: BatchId,
    pub warehouse_id: WarehouseId,
}
