//! Database models for carriers.

use crate::api::models::carriers::{CarrierCreate, CarrierUpdate};
use crate::types::{CarrierId, LocalityId};
use sqlx::FromRow;

/// Database request for creating a new carrier
#[derive(Debug, Clone)]
pub struct CarrierCreateDBRequest {
    pub cid: String,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: LocalityId,
}

impl From<CarrierCreate> for CarrierCreateDBRequest {
    fn from(create: CarrierCreate) -> Self {
        Self {
            cid: create.cid,
            company_name: create.company_name,
            address: create.address,
            telephone: create.telephone,
            locality_id: create.locality_id,
        }
    }
}

/// Database request for updating a carrier
#[derive(Debug, Clone, Default)]
pub struct CarrierUpdateDBRequest {
    pub cid: Option<String>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<LocalityId>,
}

impl From<CarrierUpdate> for CarrierUpdateDBRequest {
    fn from(update: CarrierUpdate) -> Self {
        Self {
            cid: update.cid,
            company_name: update.company_name,
            address: update.address,
            telephone: update.telephone,
            locality_id: update.locality_id,
        }
    }
}

/// Database response for a carrier
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CarrierDBResponse {
    pub id: CarrierId,
    pub cid: String,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: LocalityId,
}
