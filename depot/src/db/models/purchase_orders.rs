//! Database models for purchase orders.

use crate::api::models::purchase_orders::{PurchaseOrderCreate, PurchaseOrderUpdate};
use crate::types::{BuyerId, OrderStatusId, ProductRecordId, PurchaseOrderId};
use chrono::NaiveDate;
use sqlx::FromRow;

/// Database request for creating a new purchase order
#[derive(Debug, Clone)]
pub struct PurchaseOrderCreateDBRequest {
    pub order_number: String,
    pub order_date: NaiveDate,
    pub tracking_code: String,
    pub buyer_id: BuyerId,
    pub product_record_id: ProductRecordId,
    pub order_status_id: OrderStatusId,
}

impl From<PurchaseOrderCreate> for PurchaseOrderCreateDBRequest {
    fn from(create: PurchaseOrderCreate) -> Self {
        Self {
            order_number: create.order_number,
            order_date: create.order_date,
            tracking_code: create.tracking_code,
            buyer_id: create.buyer_id,
            product_record_id: create.product_record_id,
            order_status_id: create.order_status_id,
        }
    }
}

/// Database request for updating a purchase order
#[derive(Debug, Clone, Default)]
pub struct PurchaseOrderUpdateDBRequest {
    pub order_number: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub tracking_code: Option<String>,
    pub buyer_id: Option<BuyerId>,
    pub product_record_id: Option<ProductRecordId>,
    pub order_status_id: Option<OrderStatusId>,
}

impl From<PurchaseOrderUpdate> for PurchaseOrderUpdateDBRequest {
    fn from(update: PurchaseOrderUpdate) -> Self {
        Self {
            order_number: update.order_number,
            order_date: update.order_date,
            tracking_code: update.tracking_code,
            buyer_id: update.buyer_id,
            product_record_id: update.product_record_id,
            order_status_id: update.order_status_id,
        }
    }
}

/// Database response for a purchase order
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PurchaseOrderDBResponse {
    pub id: PurchaseOrderId,
    pub order_number: String,
    pub order_date: NaiveDate,
    pub tracking_code: String,
    pub buyer_id: BuyerId,
    pub product_record_id: ProductRecordId,
    pub order_status_id: OrderStatusId,
}
