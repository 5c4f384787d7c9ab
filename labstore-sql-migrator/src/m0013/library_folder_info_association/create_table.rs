use sea_query::{
    ColumnDef, ForeignKey, Index, IndexCreateStatement, Table, TableCreateStatement,
};

use labstore_sql::{FormDefinition, FormValues, LibraryFolder, LibraryFolderInfoAssociation};

pub struct Operation;

fn table_statement() -> TableCreateStatement {
    Table::create()
        .table(LibraryFolderInfoAssociation::Table)
        .col(
            ColumnDef::new(LibraryFolderInfoAssociation::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(LibraryFolderInfoAssociation::LibraryFolderId).integer())
        .col(ColumnDef::new(LibraryFolderInfoAssociation::FormDefinitionId).integer())
        .col(ColumnDef::new(LibraryFolderInfoAssociation::FormValuesId).integer())
        .foreign_key(
            ForeignKey::create()
                .from(
                    LibraryFolderInfoAssociation::Table,
                    LibraryFolderInfoAssociation::LibraryFolderId,
                )
                .to(LibraryFolder::Table, LibraryFolder::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .from(
                    LibraryFolderInfoAssociation::Table,
                    LibraryFolderInfoAssociation::FormDefinitionId,
                )
                .to(FormDefinition::Table, FormDefinition::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .from(
                    LibraryFolderInfoAssociation::Table,
                    LibraryFolderInfoAssociation::FormValuesId,
                )
                .to(FormValues::Table, FormValues::Id),
        )
        .to_owned()
}

fn index_statements() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("ix_library_folder_info_association_library_folder_id")
            .table(LibraryFolderInfoAssociation::Table)
            .col(LibraryFolderInfoAssociation::LibraryFolderId)
            .to_owned(),
        Index::create()
            .name("ix_library_folder_info_association_form_definition_id")
            .table(LibraryFolderInfoAssociation::Table)
            .col(LibraryFolderInfoAssociation::FormDefinitionId)
            .to_owned(),
        Index::create()
            .name("ix_library_folder_info_association_form_values_id")
            .table(LibraryFolderInfoAssociation::Table)
            .col(LibraryFolderInfoAssociation::FormValuesId)
            .to_owned(),
    ]
}

#[cfg(feature = "sqlite")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(&mut *connection).await?;

        for statment in index_statements() {
            let statment = statment.to_string(sea_query::SqliteQueryBuilder);
            sqlx::query(&statment).execute(&mut *connection).await?;
        }

        Ok(())
    }

    async fn down(
        &self,
        _connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        // The migration is irreversible; the table is kept on revert.
        Ok(())
    }
}

#[cfg(feature = "mysql")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::MySql> for Operation {
    async fn up(&self, connection: &mut sqlx::MySqlConnection) -> Result<(), sqlx_migrator::Error> {
        let statment = table_statement().to_string(sea_query::MysqlQueryBuilder);
        sqlx::query(&statment).execute(&mut *connection).await?;

        for statment in index_statements() {
            let statment = statment.to_string(sea_query::MysqlQueryBuilder);
            sqlx::query(&statment).execute(&mut *connection).await?;
        }

        Ok(())
    }

    async fn down(
        &self,
        _connection: &mut sqlx::MySqlConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        // The migration is irreversible; the table is kept on revert.
        Ok(())
    }
}

#[cfg(feature = "postgres")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Postgres> for Operation {
    async fn up(&self, connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        let statment = table_statement().to_string(sea_query::PostgresQueryBuilder);
        sqlx::query(&statment).execute(&mut *connection).await?;

        for statment in index_statements() {
            let statment = statment.to_string(sea_query::PostgresQueryBuilder);
            sqlx::query(&statment).execute(&mut *connection).await?;
        }

        Ok(())
    }

    async fn down(&self, _connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        // The migration is irreversible; the table is kept on revert.
        Ok(())
    }
}
