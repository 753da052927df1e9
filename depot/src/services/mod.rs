//! Business rules between the HTTP handlers and the repositories.
//!
//! Every service owns a cloned [`PgPool`](sqlx::PgPool) handle and opens its own connections
//! or transactions per call. Services:
//!
//! - check natural-key uniqueness inside the same transaction as the write,
//! - translate repository outcomes ([`DbError`], `Option`, `bool`) into [`Error`],
//! - merge partial updates and validate cross-field invariants on the merged values.
//!
//! Handlers obtain services through the accessors on [`AppState`](crate::AppState).

pub mod batches;
pub mod buyers;
pub mod carriers;
pub mod employees;
pub mod inbound_orders;
pub mod localities;
pub mod products;
pub mod purchase_orders;
pub mod reports;
pub mod sections;
pub mod sellers;
pub mod warehouses;

pub use batches::BatchService;
pub use buyers::BuyerService;
pub use carriers::CarrierService;
pub use employees::EmployeeService;
pub use inbound_orders::InboundOrderService;
pub use localities::LocalityService;
pub use products::ProductService;
pub use purchase_orders::PurchaseOrderService;
pub use sections::SectionService;
pub use sellers::SellerService;
pub use warehouses::WarehouseService;

use crate::db::errors::DbError;
use crate::errors::Error;
use std::fmt::Display;

pub(crate) fn not_found(resource: &str, id: impl Display) -> Error {
    Error::NotFound {
        resource: resource.to_string(),
        id: id.to_string(),
    }
}

pub(crate) fn already_exists(resource: &str, field: &str, value: impl Display) -> Error {
    Error::AlreadyExists {
        resource: resource.to_string(),
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Converts driver errors raised outside a repository (begin/commit/acquire).
pub(crate) fn db_error(err: sqlx::Error) -> Error {
    Error::Database(err.into())
}

/// Classifies a repository error raised while writing a `resource`.
///
/// A foreign key violation means the request named a parent that does not exist.
pub(crate) fn classify_write(resource: &str, err: DbError) -> Error {
    match err {
        DbError::ForeignKeyViolation { .. } => Error::InvalidReference {
            resource: resource.to_string(),
            field: err.foreign_key_column().unwrap_or_else(|| "reference".to_string()),
        },
        other => Error::Database(other),
    }
}

/// Classifies a repository error raised while deleting `resource` `id`.
///
/// A foreign key violation means dependent rows still point at the record.
pub(crate) fn classify_delete(resource: &str, id: impl Display, err: DbError) -> Error {
    match err {
        DbError::ForeignKeyViolation { .. } => Error::InUse {
            resource: resource.to_string(),
            id: id.to_string(),
        },
        other => Error::Database(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fk_violation(constraint: &str, table: &str) -> DbError {
        DbError::ForeignKeyViolation {
            constraint: Some(constraint.to_string()),
            table: Some(table.to_string()),
            message: "insert or update violates foreign key constraint".to_string(),
        }
    }

    #[test]
    fn test_classify_write_names_the_offending_column() {
        let err = classify_write("Seller", fk_violation("sellers_locality_id_fkey", "sellers"));
        match err {
            Error::InvalidReference { resource, field } => {
                assert_eq!(resource, "Seller");
                assert_eq!(field, "locality_id");
            }
            other => panic!("expected InvalidReference, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_write_without_constraint_name() {
        let err = classify_write(
            "Seller",
            DbError::ForeignKeyViolation {
                constraint: None,
                table: None,
                message: String::new(),
            },
        );
        assert!(matches!(err, Error::InvalidReference { field, .. } if field == "reference"));
    }

    #[test]
    fn test_classify_write_passes_other_errors_through() {
        let err = classify_write("Seller", DbError::NotFound);
        assert!(matches!(err, Error::Database(DbError::NotFound)));
    }

    #[test]
    fn test_classify_delete_reports_in_use() {
        let err = classify_delete("Locality", 4, fk_violation("sellers_locality_id_fkey", "sellers"));
        match err {
            Error::InUse { resource, id } => {
                assert_eq!(resource, "Locality");
                assert_eq!(id, "4");
            }
            other => panic!("expected InUse, got {other:?}"),
        }
    }
}
