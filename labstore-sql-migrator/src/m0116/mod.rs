//! Migration swapping the repository update flag for a status payload.
//!
//! The boolean `update_available` column on `tool_shed_repository` only said
//! that something changed upstream; the `tool_shed_status` JSON column stores
//! the full status report instead.

mod tool_shed_repository;

use sqlx_migrator::vec_box;

use crate::Reversibility;

/// Migration that replaces `tool_shed_repository.update_available` with the
/// `tool_shed_status` JSON column.
///
/// ## Changes
///
/// 1. **Drops `update_available`** (BOOLEAN) - skipped on backends that
///    cannot drop columns in place (SQLite), where the column stays behind.
///
/// 2. **Adds `tool_shed_status`** (JSON, nullable) - the semi-structured
///    status report from the tool shed.
///
/// ## Reversibility
///
/// [`Reversible`](Reversibility::Reversible): the revert drops
/// `tool_shed_status`, re-adds `update_available` with default false, and
/// backfills existing rows to false as an advisory step (a backfill failure
/// is logged, the revert still succeeds). On SQLite the revert performs no
/// column changes at all.
///
/// ## Dependencies
///
/// This migration depends on [`LibraryFormsMigration`](crate::LibraryFormsMigration).
pub struct RepositoryStatusMigration;

impl RepositoryStatusMigration {
    pub const REVERSIBILITY: Reversibility = Reversibility::Reversible;
}

#[cfg(feature = "sqlite")]
sqlx_migrator::sqlite_migration!(
    RepositoryStatusMigration,
    "main",
    "m0116_repository_status",
    vec_box![crate::LibraryFormsMigration],
    vec_box![
        tool_shed_repository::drop_update_available::Operation,
        tool_shed_repository::add_tool_shed_status::Operation,
    ]
);

#[cfg(feature = "mysql")]
sqlx_migrator::mysql_migration!(
    RepositoryStatusMigration,
    "main",
    "m0116_repository_status",
    vec_box![crate::LibraryFormsMigration],
    vec_box![
        tool_shed_repository::drop_update_available::Operation,
        tool_shed_repository::add_tool_shed_status::Operation,
    ]
);

#[cfg(feature = "postgres")]
sqlx_migrator::postgres_migration!(
    RepositoryStatusMigration,
    "main",
    "m0116_repository_status",
    vec_box![crate::LibraryFormsMigration],
    vec_box![
        tool_shed_repository::drop_update_available::Operation,
        tool_shed_repository::add_tool_shed_status::Operation,
    ]
);
