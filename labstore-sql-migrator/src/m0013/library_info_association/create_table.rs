use sea_query::{
    ColumnDef, ForeignKey, Index, IndexCreateStatement, Table, TableCreateStatement,
};

use labstore_sql::{FormDefinition, FormValues, Library, LibraryInfoAssociation};

pub struct Operation;

fn table_statement() -> TableCreateStatement {
    Table::create()
        .table(LibraryInfoAssociation::Table)
        .col(
            ColumnDef::new(LibraryInfoAssociation::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(LibraryInfoAssociation::LibraryId).integer())
        .col(ColumnDef::new(LibraryInfoAssociation::FormDefinitionId).integer())
        .col(ColumnDef::new(LibraryInfoAssociation::FormValuesId).integer())
        .foreign_key(
            ForeignKey::create()
                .from(
                    LibraryInfoAssociation::Table,
                    LibraryInfoAssociation::LibraryId,
                )
                .to(Library::Table, Library::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .from(
                    LibraryInfoAssociation::Table,
                    LibraryInfoAssociation::FormDefinitionId,
                )
                .to(FormDefinition::Table, FormDefinition::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .from(
                    LibraryInfoAssociation::Table,
                    LibraryInfoAssociation::FormValuesId,
                )
                .to(FormValues::Table, FormValues::Id),
        )
        .to_owned()
}

fn index_statements() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("ix_library_info_association_library_id")
            .table(LibraryInfoAssociation::Table)
            .col(LibraryInfoAssociation::LibraryId)
            .to_owned(),
        Index::create()
            .name("ix_library_info_association_form_definition_id")
            .table(LibraryInfoAssociation::Table)
            .col(LibraryInfoAssociation::FormDefinitionId)
            .to_owned(),
        Index::create()
            .name("ix_library_info_association_form_values_id")
            .table(LibraryInfoAssociation::Table)
            .col(LibraryInfoAssociation::FormValuesId)
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
