//! Database layer.
//!
//! ```text
//! ┌─────────────┐
//! │  Services   │  (crate::services - rules, transactions)
//! └──────┬──────┘
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries)
//! └──────┬──────┘
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - rows and write requests)
//! └──────┬──────┘
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! Repositories borrow a `&mut PgConnection`, so the same code runs against a pooled
//! connection or inside a transaction:
//!
//! ```ignore
//! let mut tx = pool.begin().await?;
//! let mut repo = Localities::new(&mut tx);
//! let locality = repo.create(&request).await?;
//! tx.commit().await?;
//! ```
//!
//! Migrations live in `migrations/` and are embedded through [`crate::migrator`].

pub mod errors;
pub mod handlers;
pub mod models;
