//! Repository implementations, one per table.
//!
//! Each repository wraps a borrowed connection, implements [`Repository`] for the plain
//! CRUD surface and adds whatever lookups its service needs (natural-key `exists`
//! checks, grouped counts for the reports).
//!
//! - [`Localities`], [`Sellers`], [`Carriers`]
//! - [`Warehouses`], [`Sections`], [`Products`], [`Batches`]
//! - [`Employees`], [`InboundOrders`]
//! - [`Buyers`], [`PurchaseOrders`]

pub mod batches;
pub mod buyers;
pub mod carriers;
pub mod employees;
pub mod inbound_orders;
pub mod localities;
pub mod products;
pub mod purchase_orders;
pub mod repository;
pub mod sections;
pub mod sellers;
pub mod warehouses;

pub use batches::Batches;
pub use buyers::Buyers;
pub use carriers::Carriers;
pub use employees::Employees;
pub use inbound_orders::InboundOrders;
pub use localities::Localities;
pub use products::Products;
pub use purchase_orders::PurchaseOrders;
pub use repository::Repository;
pub use sections::Sections;
pub use sellers::Sellers;
pub use warehouses::Warehouses;
