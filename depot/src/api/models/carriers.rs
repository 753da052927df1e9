//! API request/response models for carriers.

use crate::db::models::carriers::CarrierDBResponse;
use crate::types::{CarrierId, LocalityId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for registering a carrier.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CarrierCreate {
    /// Carrier identifier (must be unique)
    #[schema(example = "CID#1")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub cid: String,
    #[schema(example = "Fast Freight")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub telephone: String,
    /// Locality the carrier serves
    pub locality_id: LocalityId,
}

/// Request body for updating a carrier. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct CarrierUpdate {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub cid: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub company_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub telephone: Option<String>,
    pub locality_id: Option<LocalityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarrierResponse {
    pub id: CarrierId,
    pub cid: String,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: LocalityId,
}

impl From<CarrierDBResponse> for CarrierResponse {
    fn from(db: CarrierDBResponse) -> Self {
        Self {
            id: db.id,
            cid: db.cid,
            company_name: db.company_name,
            address: db.address,
            telephone: db.telephone,
            locality_id: db.locality_id,
        }
    }
}
