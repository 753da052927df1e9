//! Database models for products.

use crate::api::models::products::{ProductCreate, ProductUpdate};
use crate::types::{ProductId, ProductTypeId, SellerId};
use sqlx::FromRow;

/// Database request for creating a new product
#[derive(Debug, Clone)]
pub struct ProductCreateDBRequest {
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

impl From<ProductCreate> for ProductCreateDBRequest {
    fn from(create: ProductCreate) -> Self {
        Self {
            product_code: create.product_code,
            description: create.description,
            width: create.width,
            height: create.height,
            length: create.length,
            net_weight: create.net_weight,
            expiration_rate: create.expiration_rate,
            recommended_freezing_temperature: create.recommended_freezing_temperature,
            freezing_rate: create.freezing_rate,
            product_type_id: create.product_type_id,
            seller_id: create.seller_id,
        }
    }
}

/// Database request for updating a product
#[derive(Debug, Clone, Default)]
pub struct ProductUpdateDBRequest {
    pub product_code: Option<String>,
    pub description: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub net_weight: Option<f64>,
    pub expiration_rate: Option<f64>,
    pub recommended_freezing_temperature: Option<f64>,
    pub freezing_rate: Option<f64>,
    pub product_type_id: Option<ProductTypeId>,
    pub seller_id: Option<SellerId>,
}

impl From<ProductUpdate> for ProductUpdateDBRequest {
    fn from(update: ProductUpdate) -> Self {
        Self {
            product_code: update.product_code,
            description: update.description,
            width: update.width,
            height: update.height,
            length: update.length,
            net_weight: update.net_weight,
            expiration_rate: update.expiration_rate,
            recommended_freezing_temperature: update.recommended_freezing_temperature,
            freezing_rate: update.freezing_rate,
            product_type_id: update.product_type_id,
            seller_id: update.seller_id,
        }
    }
}

/// Database response for a product
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductDBResponse {
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
