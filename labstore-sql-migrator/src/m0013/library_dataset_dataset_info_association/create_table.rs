use sea_query::{
    ColumnDef, ForeignKey, Index, IndexCreateStatement, Table, TableCreateStatement,
};

use labstore_sql::{
    FormDefinition, FormValues, LibraryDatasetDatasetAssociation,
    LibraryDatasetDatasetInfoAssociation,
};

pub struct Operation;

fn table_statement() -> TableCreateStatement {
    Table::create()
        .table(LibraryDatasetDatasetInfoAssociation::Table)
        .col(
            ColumnDef::new(LibraryDatasetDatasetInfoAssociation::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(
                LibraryDatasetDatasetInfoAssociation::LibraryDatasetDatasetAssociationId,
            )
            .integer(),
        )
        .col(ColumnDef::new(LibraryDatasetDatasetInfoAssociation::FormDefinitionId).integer())
        .col(ColumnDef::new(LibraryDatasetDatasetInfoAssociation::FormValuesId).integer())
        .foreign_key(
            ForeignKey::create()
                .from(
                    LibraryDatasetDatasetInfoAssociation::Table,
                    LibraryDatasetDatasetInfoAssociation::LibraryDatasetDatasetAssociationId,
                )
                .to(
                    LibraryDatasetDatasetAssociation::Table,
                    LibraryDatasetDatasetAssociation::Id,
                ),
        )
        .foreign_key(
            ForeignKey::create()
                .from(
                    LibraryDatasetDatasetInfoAssociation::Table,
                    LibraryDatasetDatasetInfoAssociation::FormDefinitionId,
                )
                .to(FormDefinition::Table, FormDefinition::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .from(
                    LibraryDatasetDatasetInfoAssociation::Table,
                    LibraryDatasetDatasetInfoAssociation::FormValuesId,
                )
                .to(FormValues::Table, FormValues::Id),
        )
        .to_owned()
}

// The index on library_dataset_dataset_association_id needs a shortened name
// on MySQL and lives in its own operation, create_ldda_idx.
fn index_statements() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("ix_library_dataset_dataset_info_association_form_definition_id")
            .table(LibraryDatasetDatasetInfoAssociation::Table)
            .col(LibraryDatasetDatasetInfoAssociation::FormDefinitionId)
            .to_owned(),
        Index::create()
            .name("ix_library_dataset_dataset_info_association_form_values_id")
            .table(LibraryDatasetDatasetInfoAssociation::Table)
            .col(LibraryDatasetDatasetInfoAssociation::FormValuesId)
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
