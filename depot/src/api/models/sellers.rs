//! API request/response models for sellers.

use crate::db::models::sellers::SellerDBResponse;
use crate::types::{LocalityId, SellerId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for registering a seller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct SellerCreate {
    /// Company identifier (must be unique)
    #[schema(example = 123)]
    #[validate(range(min = 1, message = "must be a positive number"))]
    pub cid: i32,
    #[schema(example = "Acme Foods")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub company_name: String,
    #[schema(example = "Av. Siempre Viva 742")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,
    #[schema(example = "541145678900")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub telephone: String,
    /// Locality the seller operates from
    #[serde(default)]
    pub locality_id: Option<LocalityId>,
}

/// Request body for updating a seller. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct SellerUpdate {
    #[validate(range(min = 1, message = "must be a positive number"))]
    pub cid: Option<i32>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub company_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub telephone: Option<String>,
    pub locality_id: Option<LocalityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SellerResponse {
    pub id: SellerId,
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: Option<LocalityId>,
}

impl From<SellerDBResponse> for SellerResponse {
    fn from(db: SellerDBResponse) -> Self {
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
