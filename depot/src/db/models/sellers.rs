//! Database models for sellers.

use crate::api::models::sellers::{SellerCreate, SellerUpdate};
use crate::types::{LocalityId, SellerId};
use sqlx::FromRow;

/// Database request for creating a new seller
#[derive(Debug, Clone)]
pub struct SellerCreateDBRequest {
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: Option<LocalityId>,
}

impl From<SellerCreate> for SellerCreateDBRequest {
    fn from(create: SellerCreate) -> Self {
        Self {
            cid: create.cid,
            company_name: create.company_name,
            address: create.address,
            telephone: create.telephone,
            locality_id: create.locality_id,
        }
    }
}

/// Database request for updating a seller
#[derive(Debug, Clone, Default)]
pub struct SellerUpdateDBRequest {
    pub cid: Option<i32>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<LocalityId>,
}

impl From<SellerUpdate> for SellerUpdateDBRequest {
    fn from(update: SellerUpdate) -> Self {
        Self {
            cid: update.cid,
            company_name: update.company_name,
            address: update.address,
            telephone: update.telephone,
            locality_id: update.locality_id,
        }
    }
}

/// Database response for a seller
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SellerDBResponse {
    pub id: SellerId,
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: Option<LocalityId>,
}
