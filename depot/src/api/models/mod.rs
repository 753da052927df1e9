//! API request/response models.
//!
//! Each entity module holds a `*Create` body, a `*Update` body where the resource can be
//! modified (all fields optional), and a `*Response`. Request bodies derive
//! [`validator::Validate`] and are bound through [`ValidatedJson`](crate::api::extractors::ValidatedJson).
//!
//! Every successful payload is wrapped in [`Data`].

pub mod batches;
pub mod buyers;
pub mod carriers;
pub mod employees;
pub mod inbound_orders;
pub mod localities;
pub mod products;
pub mod purchase_orders;
pub mod sections;
pub mod sellers;
pub mod warehouses;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Json<Self> {
        Json(Self { data })
    }
}

/// Renders a collection: `204 No Content` when empty, `200` with the envelope otherwise.
pub fn collection<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Data::new(items).into_response()
    }
}
