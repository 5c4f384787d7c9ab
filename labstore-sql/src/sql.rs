//! Table and column identifiers for the labstore schema.

use sea_query::Iden;

/// Column identifiers for the `library_info_association` table.
///
/// Used with sea-query for type-safe SQL statement construction.
///
/// Associates a library with the form definition describing its template and
/// the stored form values, replacing the first-generation row-per-field
/// template tables.
///
/// # Columns
///
/// - `Id` - Association identifier (INTEGER, primary key)
/// - `LibraryId` - Foreign key to `library.id`
/// - `FormDefinitionId` - Foreign key to `form_definition.id`
/// - `FormValuesId` - Foreign key to `form_values.id`
#[derive(Iden, Clone)]
pub enum LibraryInfoAssociation {
    /// The table name: `library_info_association`
    Table,
    /// Association ID (primary key)
    Id,
    /// Library the template is attached to
    LibraryId,
    /// Form definition describing the template fields
    FormDefinitionId,
    /// Stored field contents (jsonified list in `form_values`)
    FormValuesId,
}

/// Column identifiers for the `library_folder_info_association` table.
///
/// Same shape as [`LibraryInfoAssociation`], attached to a library folder.
#[derive(Iden, Clone)]
pub enum LibraryFolderInfoAssociation {
    /// The table name: `library_folder_info_association`
    Table,
    /// Association ID (primary key)
    Id,
    /// Folder the template is attached to
    LibraryFolderId,
    /// Form definition describing the template fields
    FormDefinitionId,
    /// Stored field contents
    FormValuesId,
}

/// Column identifiers for the `library_dataset_dataset_info_association` table.
///
/// Same shape as [`LibraryInfoAssociation`], attached to a library dataset
/// dataset association.
#[derive(Iden, Clone)]
pub enum LibraryDatasetDatasetInfoAssociation {
    /// The table name: `library_dataset_dataset_info_association`
    Table,
    /// Association ID (primary key)
    Id,
    /// Dataset association the template is attached to
    LibraryDatasetDatasetAssociationId,
    /// Form definition describing the template fields
    FormDefinitionId,
    /// Stored field contents
    FormValuesId,
}

/// Column identifiers for the `tool_shed_repository` table.
///
/// Only the columns touched by the migrations are listed here.
///
/// # Columns
///
/// - `Id` - Repository identifier (primary key)
/// - `UpdateAvailable` - Boolean update flag, dropped in
///   [`RepositoryStatusMigration`] on backends that can drop columns
/// - `ToolShedStatus` - Semi-structured JSON status payload replacing the
///   boolean flag
///
/// [`RepositoryStatusMigration`]: https://docs.rs/labstore-sql-migrator
#[derive(Iden, Clone)]
pub enum ToolShedRepository {
    /// The table name: `tool_shed_repository`
    Table,
    /// Repository ID (primary key)
    Id,
    /// Legacy boolean update flag
    UpdateAvailable,
    /// JSON status payload reported by the tool shed
    ToolShedStatus,
}

/// Foreign-key target: the `library` table.
#[derive(Iden)]
pub enum Library {
    Table,
    Id,
}

/// Foreign-key target: the `library_folder` table.
#[derive(Iden)]
pub enum LibraryFolder {
    Table,
    Id,
}

/// Foreign-key target: the `library_dataset_dataset_association` table.
#[derive(Iden)]
pub enum LibraryDatasetDatasetAssociation {
    Table,
    Id,
}

/// Foreign-key target: the `form_definition` table.
#[derive(Iden)]
pub enum FormDefinition {
    Table,
    Id,
}

/// Foreign-key target: the `form_values` table.
#[derive(Iden)]
pub enum FormValues {
    Table,
    Id,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idents_render_snake_case_table_and_column_names() {
        assert_eq!(
            LibraryInfoAssociation::Table.to_string(),
            "library_info_association"
        );
        assert_eq!(
            LibraryDatasetDatasetInfoAssociation::LibraryDatasetDatasetAssociationId.to_string(),
            "library_dataset_dataset_association_id"
        );
        assert_eq!(
            ToolShedRepository::ToolShedStatus.to_string(),
            "tool_shed_status"
        );
    }
}
