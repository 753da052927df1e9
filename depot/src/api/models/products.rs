//! API request/response models for products.

use crate::db::models::products::ProductDBResponse;
use crate::types::{ProductId, ProductTypeId, SellerId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ProductCreate {
    /// Product code (must be unique)
    #[schema(example = "PROD-0001")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub product_code: String,
    #[schema(example = "Frozen peas 1kg")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub width: f64,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub height: f64,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub length: f64,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: ProductTypeId,
    /// Seller supplying the product
    pub seller_id: SellerId,
}

/// Request body for updating a product. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct ProductUpdate {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub product_code: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub width: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub height: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub length: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub net_weight: Option<f64>,
    pub expiration_rate: Option<f64>,
    pub recommended_freezing_temperature: Option<f64>,
    pub freezing_rate: Option<f64>,
    pub product_type_id: Option<ProductTypeId>,
    pub seller_id: Option<SellerId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: ProductId,
    pub product_code: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: ProductTypeId,
    pub seller_id: SellerId,
}

impl From<ProductDBResponse> for ProductResponse {
    fn from(db: ProductDBResponse) -> Self {
        Self {
            id: db.id,
            product_code: db.product_code,
            description: db.description,
            width: db.width,
            height: db.height,
            length: db.length,
            net_weight: db.net_weight,
            expiration_rate: db.expiration_rate,
            recommended_freezing_temperature: db.recommended_freezing_temperature,
            freezing_rate: db.freezing_rate,
            product_type_id: db.product_type_id,
            seller_id: db.seller_id,
        }
    }
}
