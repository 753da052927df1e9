//! HTTP layer.
//!
//! - **[`handlers`]**: Axum route handlers, one module per resource
//! - **[`models`]**: request and response bodies
//! - **[`extractors`]**: body, path and query extractors that map rejections onto [`crate::errors::Error`]
//!
//! All resources are served under `/api/v1`. The OpenAPI document is at
//! `/api-docs/openapi.json` and the rendered reference at `/api/docs`.

pub mod extractors;
pub mod handlers;
pub mod models;
