//! Database models for localities.

use crate::api::models::localities::{LocalityCreate, LocalityUpdate};
use crate::types::LocalityId;
use sqlx::FromRow;

/// Database request for creating a new locality
#[derive(Debug, Clone)]
pub struct LocalityCreateDBRequest {
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

impl From<LocalityCreate> for LocalityCreateDBRequest {
    fn from(create: LocalityCreate) -> Self {
        Self {
            zip_code: create.zip_code,
            locality_name: create.locality_name,
            province_name: create.province_name,
            country_name: create.country_name,
        }
    }
}

/// Database request for updating a locality
#[derive(Debug, Clone, Default)]
pub struct LocalityUpdateDBRequest {
    pub zip_code: Option<String>,
    pub locality_name: Option<String>,
    pub province_name: Option<String>,
    pub country_name: Option<String>,
}

impl From<LocalityUpdate> for LocalityUpdateDBRequest {
    fn from(update: LocalityUpdate) -> Self {
        Self {
            zip_code: update.zip_code,
            locality_name: update.locality_name,
            province_name: update.province_name,
            country_name: update.country_name,
        }
    }
}

/// Database response for a locality
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct LocalityDBResponse {
    pub id: LocalityId,
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}
