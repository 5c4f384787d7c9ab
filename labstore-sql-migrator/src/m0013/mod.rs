//! Migration replacing the first-generation library template tables with
//! form-backed association tables.
//!
//! Template fields and contents used to be stored as one row per field across
//! a family of `library_item_info*` tables. Templates are now based on forms:
//! field contents live as a jsonified list in `form_values`, and a single
//! association row links a library entity to its form definition and values.

mod legacy;
mod library_dataset_dataset_info_association;
mod library_folder_info_association;
mod library_info_association;

use sqlx_migrator::vec_box;

use crate::Reversibility;

/// Migration that eliminates the first-generation library template tables.
///
/// ## Changes
///
/// 1. **Drops fourteen legacy tables** - the whole `library_item_info*`
///    family, including the previous versions of the association tables.
///    All stored template data is deleted permanently.
///
/// 2. **Creates three association tables** - `library_info_association`,
///    `library_folder_info_association`, and
///    `library_dataset_dataset_info_association`, each linking its owning
///    entity to a `form_definition` row and a `form_values` row, with an
///    index on every foreign-key column.
///
/// ## Database-Specific Notes
///
/// - **MySQL**: the derived name for the index on
///   `library_dataset_dataset_info_association.library_dataset_dataset_association_id`
///   exceeds the 64-character identifier limit, so the index is created under
///   the shortened name `ix_lddaia_ldda_id`. Its creation is advisory: a
///   failure (for example because the index already exists) is logged and the
///   migration continues.
///
/// ## Reversibility
///
/// This migration is [`Irreversible`](Reversibility::Irreversible). The
/// upgrade deletes all first-generation template data, so every operation's
/// revert is a no-op and the schema is left exactly as the upgrade produced
/// it.
pub struct LibraryFormsMigration;

impl LibraryFormsMigration {
    /// The upgrade deletes template data that a revert cannot restore.
    pub const REVERSIBILITY: Reversibility = Reversibility::Irreversible;
}

#[cfg(feature = "sqlite")]
sqlx_migrator::sqlite_migration!(
    LibraryFormsMigration,
    "main",
    "m0013_library_forms",
    vec_box![],
    vec_box![
        legacy::drop_tables::Operation,
        library_info_association::create_table::Operation,
        library_folder_info_association::create_table::Operation,
        library_dataset_dataset_info_association::create_table::Operation,
        library_dataset_dataset_info_association::create_ldda_idx::Operation,
    ]
);

#[cfg(feature = "mysql")]
sqlx_migrator::mysql_migration!(
    LibraryFormsMigration,
    "main",
    "m0013_library_forms",
    vec_box![],
    vec_box![
        legacy::drop_tables::Operation,
        library_info_association::create_table::Operation,
        library_folder_info_association::create_table::Operation,
        library_dataset_dataset_info_association::create_table::Operation,
        library_dataset_dataset_info_association::create_ldda_idx::Operation,
    ]
);

#[cfg(feature = "postgres")]
sqlx_migrator::postgres_migration!(
    LibraryFormsMigration,
    "main",
    "m0013_library_forms",
    vec_box![],
    vec_box![
        legacy::drop_tables::Operation,
        library_info_association::create_table::Operation,
        library_folder_info_association::create_table::Operation,
        library_dataset_dataset_info_association::create_table::Operation,
        library_dataset_dataset_info_association::create_ldda_idx::Operation,
    ]
);
