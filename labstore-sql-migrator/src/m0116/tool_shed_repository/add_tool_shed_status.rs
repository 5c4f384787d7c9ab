use sea_query::{ColumnDef, Table, TableAlterStatement};

use labstore_sql::ToolShedRepository;

use crate::dialect::SchemaDialect;

pub struct Operation;

fn up_statement() -> TableAlterStatement {
    Table::alter()
        .table(ToolShedRepository::Table)
        .add_column(
            ColumnDef::new(ToolShedRepository::ToolShedStatus)
                .json()
                .null(),
        )
        .to_owned()
}

fn down_statement() -> TableAlterStatement {
    Table::alter()
        .table(ToolShedRepository::Table)
        .drop_column(ToolShedRepository::ToolShedStatus)
        .to_owned()
}

#[cfg(feature = "sqlite")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        // The status column stays behind where it cannot be dropped in place.
        if sqlx::Sqlite::SUPPORTS_DROP_COLUMN {
            let statment = down_statement().to_string(sea_query::SqliteQueryBuilder);
            sqlx::query(&statment).execute(connection).await?;
        }

        Ok(())
    }
}

#[cfg(feature = "mysql")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::MySql> for Operation {
    async fn up(&self, connection: &mut sqlx::MySqlConnection) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement().to_string(sea_query::MysqlQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::MySqlConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        if sqlx::MySql::SUPPORTS_DROP_COLUMN {
            let statment = down_statement().to_string(sea_query::MysqlQueryBuilder);
            sqlx::query(&statment).execute(connection).await?;
        }

        Ok(())
    }
}

#[cfg(feature = "postgres")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Postgres> for Operation {
    async fn up(&self, connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement().to_string(sea_query::PostgresQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(&self, connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        if sqlx::Postgres::SUPPORTS_DROP_COLUMN {
            let statment = down_statement().to_string(sea_query::PostgresQueryBuilder);
            sqlx::query(&statment).execute(connection).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "mysql")]
    #[test]
    fn mysql_statement_adds_a_nullable_json_column() {
        let statment = up_statement().to_string(sea_query::MysqlQueryBuilder);

        assert!(statment.contains("ADD COLUMN"));
        assert!(statment.contains("tool_shed_status"));
        assert!(statment.to_lowercase().contains("json"));
    }
}
