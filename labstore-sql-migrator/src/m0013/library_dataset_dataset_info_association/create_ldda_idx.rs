use sea_query::{Index, IndexCreateStatement};

use labstore_sql::LibraryDatasetDatasetInfoAssociation;

#[cfg(feature = "mysql")]
use crate::advisory::execute_advisory;
use crate::dialect::SchemaDialect;

pub struct Operation;

const DERIVED_NAME: &str =
    "ix_library_dataset_dataset_info_association_library_dataset_dataset_association_id";
const SHORT_NAME: &str = "ix_lddaia_ldda_id";

/// Backends with a hard identifier limit get the shortened name; everywhere
/// else the derived name is kept.
fn index_name<DB: SchemaDialect>() -> &'static str {
    match DB::IDENTIFIER_HARD_LIMIT {
        Some(limit) if DERIVED_NAME.len() > limit => SHORT_NAME,
        _ => DERIVED_NAME,
    }
}

fn up_statement(name: &str) -> IndexCreateStatement {
    Index::create()
        .name(name)
        .table(LibraryDatasetDatasetInfoAssociation::Table)
        .col(LibraryDatasetDatasetInfoAssociation::LibraryDatasetDatasetAssociationId)
        .to_owned()
}

#[cfg(feature = "sqlite")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment =
            up_statement(index_name::<sqlx::Sqlite>()).to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        _connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        // The migration is irreversible; the index is kept on revert.
        Ok(())
    }
}

#[cfg(feature = "mysql")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::MySql> for Operation {
    async fn up(&self, connection: &mut sqlx::MySqlConnection) -> Result<(), sqlx_migrator::Error> {
        let name = index_name::<sqlx::MySql>();
        let statment = up_statement(name).to_string(sea_query::MysqlQueryBuilder);

        // The index is an optimization. Schemas upgraded before the name was
        // shortened may carry it already, so creation is best-effort.
        execute_advisory::<sqlx::MySql>(
            connection,
            &statment,
            "adding index ix_lddaia_ldda_id to library_dataset_dataset_info_association",
        )
        .await?;

        Ok(())
    }

    async fn down(
        &self,
        _connection: &mut sqlx::MySqlConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        // The migration is irreversible; the index is kept on revert.
        Ok(())
    }
}

#[cfg(feature = "postgres")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Postgres> for Operation {
    async fn up(&self, connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        let statment =
            up_statement(index_name::<sqlx::Postgres>()).to_string(sea_query::PostgresQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(&self, _connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        // The migration is irreversible; the index is kept on revert.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortened_name_applies_only_where_the_limit_does() {
        #[cfg(feature = "mysql")]
        assert_eq!(index_name::<sqlx::MySql>(), SHORT_NAME);
        #[cfg(feature = "sqlite")]
        assert_eq!(index_name::<sqlx::Sqlite>(), DERIVED_NAME);
        #[cfg(feature = "postgres")]
        assert_eq!(index_name::<sqlx::Postgres>(), DERIVED_NAME);
    }

    #[cfg(feature = "mysql")]
    #[test]
    fn mysql_statement_uses_the_shortened_name() {
        let statment =
            up_statement(index_name::<sqlx::MySql>()).to_string(sea_query::MysqlQueryBuilder);

        assert!(statment.contains("ix_lddaia_ldda_id"));
        assert!(statment.contains("library_dataset_dataset_association_id"));
    }
}
