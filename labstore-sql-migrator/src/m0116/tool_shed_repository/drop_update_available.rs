use sea_query::{ColumnDef, Query, Table, TableAlterStatement, UpdateStatement};

use labstore_sql::ToolShedRepository;

use crate::advisory::execute_advisory;
use crate::dialect::SchemaDialect;

pub struct Operation;

fn describe() {
    tracing::info!(
        "swapping tool_shed_repository.update_available for the tool_shed_status JSON column"
    );
}

fn up_statement() -> TableAlterStatement {
    Table::alter()
        .table(ToolShedRepository::Table)
        .drop_column(ToolShedRepository::UpdateAvailable)
        .to_owned()
}

fn down_statement() -> TableAlterStatement {
    Table::alter()
        .table(ToolShedRepository::Table)
        .add_column(
            ColumnDef::new(ToolShedRepository::UpdateAvailable)
                .boolean()
                .default(false),
        )
        .to_owned()
}

fn backfill_statement() -> UpdateStatement {
    Query::update()
        .table(ToolShedRepository::Table)
        .value(ToolShedRepository::UpdateAvailable, false)
        .to_owned()
}

#[cfg(feature = "sqlite")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        describe();
        // The boolean column stays behind where it cannot be dropped in place.
        if sqlx::Sqlite::SUPPORTS_DROP_COLUMN {
            let statment = up_statement().to_string(sea_query::SqliteQueryBuilder);
            sqlx::query(&statment).execute(connection).await?;
        }

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        if sqlx::Sqlite::SUPPORTS_DROP_COLUMN {
            let statment = down_statement().to_string(sea_query::SqliteQueryBuilder);
            sqlx::query(&statment).execute(&mut *connection).await?;

            let statment = backfill_statement().to_string(sea_query::SqliteQueryBuilder);
            execute_advisory::<sqlx::Sqlite>(
                connection,
                &statment,
                "backfilling update_available on tool_shed_repository",
            )
            .await?;
        }

        Ok(())
    }
}

#[cfg(feature = "mysql")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::MySql> for Operation {
    async fn up(&self, connection: &mut sqlx::MySqlConnection) -> Result<(), sqlx_migrator::Error> {
        describe();
        if sqlx::MySql::SUPPORTS_DROP_COLUMN {
            let statment = up_statement().to_string(sea_query::MysqlQueryBuilder);
            sqlx::query(&statment).execute(connection).await?;
        }

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::MySqlConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        if sqlx::MySql::SUPPORTS_DROP_COLUMN {
            let statment = down_statement().to_string(sea_query::MysqlQueryBuilder);
            sqlx::query(&statment).execute(&mut *connection).await?;

            let statment = backfill_statement().to_string(sea_query::MysqlQueryBuilder);
            execute_advisory::<sqlx::MySql>(
                connection,
                &statment,
                "backfilling update_available on tool_shed_repository",
            )
            .await?;
        }

        Ok(())
    }
}

#[cfg(feature = "postgres")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Postgres> for Operation {
    async fn up(&self, connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        describe();
        if sqlx::Postgres::SUPPORTS_DROP_COLUMN {
            let statment = up_statement().to_string(sea_query::PostgresQueryBuilder);
            sqlx::query(&statment).execute(connection).await?;
        }

        Ok(())
    }

    async fn down(&self, connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        if sqlx::Postgres::SUPPORTS_DROP_COLUMN {
            let statment = down_statement().to_string(sea_query::PostgresQueryBuilder);
            sqlx::query(&statment).execute(&mut *connection).await?;

            let statment = backfill_statement().to_string(sea_query::PostgresQueryBuilder);
            execute_advisory::<sqlx::Postgres>(
                connection,
                &statment,
                "backfilling update_available on tool_shed_repository",
            )
            .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "mysql")]
    #[test]
    fn mysql_statements_swap_and_backfill_the_flag() {
        let up = up_statement().to_string(sea_query::MysqlQueryBuilder);
        assert!(up.contains("DROP COLUMN"));
        assert!(up.contains("update_available"));

        let down = down_statement().to_string(sea_query::MysqlQueryBuilder);
        assert!(down.contains("ADD COLUMN"));
        assert!(down.contains("update_available"));

        let backfill = backfill_statement().to_string(sea_query::MysqlQueryBuilder);
        assert!(backfill.starts_with("UPDATE"));
        assert!(backfill.contains("update_available"));
        assert!(backfill.contains("FALSE"));
    }
}
