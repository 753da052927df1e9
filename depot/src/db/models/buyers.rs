//! Database models for buyers.

use crate::api::models::buyers::{BuyerCreate, BuyerUpdate};
use crate::types::BuyerId;
use sqlx::FromRow;

/// Database request for creating a new buyer
#[derive(Debug, Clone)]
pub struct BuyerCreateDBRequest {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<BuyerCreate> for BuyerCreateDBRequest {
    fn from(create: BuyerCreate) -> Self {
        Self {
            card_number_id: create.card_number_id,
            first_name: create.first_name,
            last_name: create.last_name,
        }
    }
}

/// Database request for updating a buyer
#[derive(Debug, Clone, Default)]
pub struct BuyerUpdateDBRequest {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<BuyerUpdate> for BuyerUpdateDBRequest {
    fn from(update: BuyerUpdate) -> Self {
        Self {
            card_number_id: update.card_number_id,
            first_name: update.first_name,
            last_name: update.last_name,
        }
    }
}

/// Database response for a buyer
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct BuyerDBResponse {
    pub id: BuyerId,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}
