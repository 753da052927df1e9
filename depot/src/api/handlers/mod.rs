//! Route handlers.
//!
//! Handlers bind the request, call the matching service from [`crate::AppState`] and wrap
//! the result in [`Data`](crate::api::models::Data). They hold no rules of their own.
//!
//! - [`localities`]: localities plus the seller and carrier count reports
//! - [`sellers`], [`carriers`]
//! - [`warehouses`], [`sections`] (with the product count report), [`products`], [`batches`]
//! - [`employees`] (with the inbound order count report), [`inbound_orders`]
//! - [`buyers`] (with the purchase order count report), [`purchase_orders`]

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
