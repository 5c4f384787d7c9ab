//! SQL database schema migrations for the labstore data library.
//!
//! This crate provides the versioned schema migrations for labstore's
//! persistence layer. It supports SQLite, MySQL, and PostgreSQL through
//! feature flags.
//!
//! # Features
//!
//! - **`sqlite`** - Enables SQLite database support
//! - **`mysql`** - Enables MySQL database support
//! - **`postgres`** - Enables PostgreSQL database support
//!
//! All features are enabled by default. You can selectively enable only the databases you need:
//!
//! ```toml
//! [dependencies]
//! labstore-sql-migrator = { version = "0.4", default-features = false, features = ["postgres"] }
//! ```
//!
//! # Usage
//!
//! The main entry point is the [`new`] function, which creates a [`Migrator`]
//! instance configured with all labstore migrations.
//!
//! ```rust,ignore
//! use sqlx_migrator::{Migrate, Plan};
//!
//! // Acquire a database connection
//! let mut conn = pool.acquire().await?;
//!
//! // Create the migrator for your database type
//! let migrator = labstore_sql_migrator::new::<sqlx::Sqlite>()?;
//!
//! // Run all pending migrations
//! migrator.run(&mut *conn, &Plan::apply_all()).await?;
//! ```
//!
//! # Migrations
//!
//! The crate includes the following migrations:
//!
//! - [`LibraryFormsMigration`] - Replaces the first-generation library
//!   template tables with form-backed association tables. **Irreversible**:
//!   the upgrade deletes all stored template data.
//! - [`RepositoryStatusMigration`] - Swaps the boolean
//!   `tool_shed_repository.update_available` flag for the semi-structured
//!   `tool_shed_status` JSON column.
//!
//! Each migration declares its [`Reversibility`]; check it before running a
//! revert plan so operators are not surprised by a revert that cannot restore
//! dropped data.
//!
//! # Backend differences
//!
//! Backend quirks are declared once, as capabilities on the
//! [`SchemaDialect`] trait, and queried by the operations:
//!
//! - SQLite cannot drop columns in place, so column drops are skipped there
//!   and the old column stays behind.
//! - MySQL enforces a hard 64-character identifier limit, so the index on
//!   `library_dataset_dataset_info_association.library_dataset_dataset_association_id`
//!   is created under the shortened name `ix_lddaia_ldda_id` and its creation
//!   is advisory (failure is logged, never fatal).
//!
//! # Database Schema
//!
//! After running all migrations, the database will contain:
//!
//! ## Association Tables
//!
//! Three tables with the same shape, each linking one library entity to a
//! form definition and its stored values:
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | `id` | INTEGER | Primary key |
//! | `library_id` / `library_folder_id` / `library_dataset_dataset_association_id` | INTEGER | FK to the owning entity |
//! | `form_definition_id` | INTEGER | FK to `form_definition.id` |
//! | `form_values_id` | INTEGER | FK to `form_values.id` |
//!
//! ## Tool Shed Repository
//!
//! The `tool_shed_repository` table gains:
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | `tool_shed_status` | JSON | Status report payload (nullable) |

use sqlx_migrator::{Info, Migrator};

mod advisory;
mod dialect;
mod m0013;
mod m0116;

pub use dialect::SchemaDialect;
pub use m0013::LibraryFormsMigration;
pub use m0116::RepositoryStatusMigration;

/// Whether a migration's revert can restore the previous schema and data.
///
/// Every migration in this crate declares its reversibility as an associated
/// constant so tooling can warn operators before reverting a migration whose
/// upgrade destroyed data, instead of silently running an empty revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reversibility {
    /// Revert restores the prior schema state.
    Reversible,
    /// Revert is a no-op; the forward migration deleted data that cannot be
    /// reconstructed.
    Irreversible,
}

/// Creates a new [`Migrator`] instance with all labstore migrations registered.
///
/// The migrator is generic over the database type and works with SQLite, MySQL, and PostgreSQL
/// when the corresponding feature is enabled.
///
/// # Example
///
/// ```rust,ignore
/// use sqlx_migrator::{Migrate, Plan};
///
/// // For SQLite
/// let migrator = labstore_sql_migrator::new::<sqlx::Sqlite>()?;
///
/// // For PostgreSQL
/// let migrator = labstore_sql_migrator::new::<sqlx::Postgres>()?;
///
/// // Run migrations
/// migrator.run(&mut *conn, &Plan::apply_all()).await?;
/// ```
///
/// # Errors
///
/// Returns an error if migration registration fails.
pub fn new<DB: sqlx::Database>() -> Result<Migrator<DB>, sqlx_migrator::Error>
where
    LibraryFormsMigration: sqlx_migrator::Migration<DB>,
    RepositoryStatusMigration: sqlx_migrator::Migration<DB>,
{
    let mut migrator = Migrator::default();
    migrator.add_migration(Box::new(LibraryFormsMigration))?;
    migrator.add_migration(Box::new(RepositoryStatusMigration))?;

    Ok(migrator)
}
