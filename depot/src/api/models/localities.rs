//! API request/response models for localities.

use crate::db::models::localities::LocalityDBResponse;
use crate::services::reports::CountReport;
use crate::types::LocalityId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a locality.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LocalityCreate {
    /// Postal code (must be unique)
    #[schema(example = "6700")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub zip_code: String,
    #[schema(example = "Lujan")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub locality_name: String,
    #[schema(example = "Buenos Aires")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub province_name: String,
    #[schema(example = "Argentina")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub country_name: String,
}

/// Request body for updating a locality. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct LocalityUpdate {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub zip_code: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub locality_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub province_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub country_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocalityResponse {
    pub id: LocalityId,
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

impl From<LocalityDBResponse> for LocalityResponse {
    fn from(db: LocalityDBResponse) -> Self {
        Self {
            id: db.id,
            zip_code: db.zip_code,
            locality_name: db.locality_name,
            province_name: db.province_name,
            country_name: db.country_name,
        }
    }
}

/// Number of sellers registered in a locality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocalitySellersReport {
    pub locality_id: LocalityId,
    pub locality_name: String,
    pub sellers_count: i64,
}

impl From<CountReport<LocalityDBResponse>> for LocalitySellersReport {
    fn from(report: CountReport<LocalityDBResponse>) -> Self {
        Self {
            locality_id: report.parent.id,
            locality_name: report.parent.locality_name,
            sellers_count: report.count,
        }
    }
}

/// Number of carriers registered in a locality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocalityCarriersReport {
    pub locality_id: LocalityId,
    pub locality_name: String,
    pub carriers_count: i64,
}

impl From<CountReport<LocalityDBResponse>> for LocalityCarriersReport {
    fn from(report: CountReport<LocalityDBResponse>) -> Self {
        Self {
            locality_id: report.parent.id,
            locality_name: report.parent.locality_name,
            carriers_count: report.count,
        }
    }
}
