//! API request/response models for buyers.

use crate::db::models::buyers::BuyerDBResponse;
use crate::services::reports::CountReport;
use crate::types::BuyerId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for registering a buyer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct BuyerCreate {
    /// Card number (must be unique)
    #[schema(example = "40123456")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub card_number_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,
}

/// Request body for updating a buyer. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct BuyerUpdate {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub card_number_id: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BuyerResponse {
    pub id: BuyerId,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<BuyerDBResponse> for BuyerResponse {
    fn from(db: BuyerDBResponse) -> Self {
        Self {
            id: db.id,
            card_number_id: db.card_number_id,
            first_name: db.first_name,
            last_name: db.last_name,
        }
    }
}

/// A buyer together with the number of purchase orders they placed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BuyerPurchaseOrdersReport {
    pub id: BuyerId,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub purchase_orders_count: i64,
}

impl From<CountReport<BuyerDBResponse>> for BuyerPurchaseOrdersReport {
    fn from(report: CountReport<BuyerDBResponse>) -> Self {
        let buyer = report.parent;
        Self {
            id: buyer.id,
            card_number_id: buyer.card_number_id,
            first_name: buyer.first_name,
            last_name: buyer.last_name,
            purchase_orders_count: report.count,
        }
    }
}
