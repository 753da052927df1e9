//! Common type definitions.
//!
//! All entity IDs are `SERIAL` surrogate keys, exposed as `i32` type aliases so signatures
//! say which table an id belongs to:
//!
//! - [`LocalityId`], [`SellerId`], [`CarrierId`]
//! - [`WarehouseId`], [`SectionId`], [`ProductId`], [`ProductTypeId`]
//! - [`EmployeeId`], [`BuyerId`]
//! - [`BatchId`], [`InboundOrderId`], [`PurchaseOrderId`]

pub type LocalityId = i32;
pub type SellerId = i32;
pub type CarrierId = i32;
pub type WarehouseId = i32;
pub type SectionId = i32;
pub type ProductId = i32;
pub type ProductTypeId = i32;
pub type EmployeeId = i32;
pub type BuyerId = i32;
pub type BatchId = i32;
pub type InboundOrderId = i32;
pub type PurchaseOrderId = i32;
pub type ProductRecordId = i32;
pub type OrderStatusId = i32;
