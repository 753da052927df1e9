use thiserror::Error;

/// Unified error type for database operations that application code can handle
#[derive(Error, Debug)]
pub enum DbError {
    /// Entity not found by the given identifier
    #[error("Entity not found")]
    NotFound,

    /// Unique constraint violation
    #[error("Unique constraint violation")]
    UniqueViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Foreign key constraint violation
    #[error("Foreign key constraint violation")]
    ForeignKeyViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Check constraint violation
    #[error("Check constraint violation")]
    CheckViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Catch-all for non-recoverable errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convert from sqlx::Error using proper sqlx error categorization
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    DbError::UniqueViolation {
                        constraint: db_err.constraint().map(|s| s.to_string()),
                        table: db_err.table().map(|s| s.to_string()),
                        message: db_err.message().to_string(),
                    }
                } else if db_err.is_foreign_key_violation() {
                    DbError::ForeignKeyViolation {
                        constraint: db_err.constraint().map(|s| s.to_string()),
                        table: db_err.table().map(|s| s.to_string()),
                        message: db_err.message().to_string(),
                    }
                } else if db_err.is_check_violation() {
                    DbError::CheckViolation {
                        constraint: db_err.constraint().map(|s| s.to_string()),
                        table: db_err.table().map(|s| s.to_string()),
                        message: db_err.message().to_string(),
                    }
                } else {
                    // All other database errors are non-recoverable - convert to anyhow
                    DbError::Other(anyhow::Error::from(err))
                }
            }
            // All other sqlx errors are non-recoverable - convert to anyhow with context
            _ => DbError::Other(anyhow::Error::from(err)),
        }
    }
}

impl DbError {
    /// Column named by a violated foreign key, recovered from the `<table>_<column>_fkey`
    /// naming convention used throughout the schema.
    ///
    /// A delete blocked by dependent rows reports the *referencing* table, so the column
    /// belongs to that table rather than the one being written.
    pub fn foreign_key_column(&self) -> Option<String> {
        match self {
            DbError::ForeignKeyViolation {
                constraint: Some(constraint),
                table,
                ..
            } => column_from_constraint(constraint, table.as_deref(), "_fkey"),
            _ => None,
        }
    }
}

fn column_from_constraint(constraint: &str, table: Option<&str>, suffix: &str) -> Option<String> {
    let without_suffix = constraint.strip_suffix(suffix)?;
    let column = match table {
        Some(table) => without_suffix.strip_prefix(table)?.strip_prefix('_')?,
        None => without_suffix,
    };

    if column.is_empty() { None } else { Some(column.to_string()) }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;
