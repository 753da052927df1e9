//! API request/response models for purchase orders.

use crate::db::models::purchase_orders::PurchaseOrderDBResponse;
use crate::types::{BuyerId, OrderStatusId, ProductRecordId, PurchaseOrderId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for placing a purchase order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PurchaseOrderCreate {
    /// Order number (must be unique)
    #[schema(example = "PO-2025-0001")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub order_number: String,
    #[schema(example = "2025-03-02")]
    pub order_date: NaiveDate,
    #[schema(example = "TRK-AR-98765")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub tracking_code: String,
    /// Buyer placing the order
    pub buyer_id: BuyerId,
    pub product_record_id: ProductRecordId,
    pub order_status_id: OrderStatusId,
}

/// Request body for updating a purchase order. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct PurchaseOrderUpdate {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub order_number: Option<String>,
    pub order_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub tracking_code: Option<String>,
    pub buyer_id: Option<BuyerId>,
    pub product_record_id: Option<ProductRecordId>,
    pub order_status_id: Option<OrderStatusId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PurchaseOrderResponse {
    pub id: PurchaseOrderId,
    pub order_number: String,
    pub order_date: NaiveDate,
    pub tracking_code: String,
    pub buyer_id: BuyerId,
    pub product_record_id: ProductRecordId,
    pub order_status_id: OrderStatusId,
}

impl From<PurchaseOrderDBResponse> for PurchaseOrderResponse {
    fn from(db: PurchaseOrderDBResponse) -> Self {
        Self {
            id: db.id,
            order_number: db.order_number,
            order_date: db.order_date,
            tracking_code: db.tracking_code,
            buyer_id: db.buyer_id,
            product_record_id: db.product_record_id,
            order_status_id: db.order_status_id,
        }
    }
}
