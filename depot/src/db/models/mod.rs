//! Database record models.
//!
//! Every module holds a `*CreateDBRequest`, a `*UpdateDBRequest` whose `None` fields
//! leave the column untouched, and a `*DBResponse` row deriving `sqlx::FromRow`.
//! API models convert into the request types with `From`, so the database layer
//! never sees `validator` or `utoipa`.

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
