use sea_query::{Alias, Table, TableDropStatement};

pub struct Operation;

/// The first-generation library template tables. Template fields and
/// contents were stored as one row per field across these; all of them are
/// dropped together with their data.
const LEGACY_TABLES: [&str; 14] = [
    "library_item_info_permissions",
    "library_item_info_template_permissions",
    "library_item_info_element",
    "library_item_info_template_element",
    "library_info_template_association",
    "library_folder_info_template_association",
    "library_dataset_info_template_association",
    "library_dataset_dataset_info_template_association",
    "library_info_association",
    "library_folder_info_association",
    "library_dataset_info_association",
    "library_dataset_dataset_info_association",
    "library_item_info",
    "library_item_info_template",
];

fn up_statements() -> Vec<TableDropStatement> {
    LEGACY_TABLES
        .iter()
        .map(|name| Table::drop().table(Alias::new(*name)).to_owned())
        .collect()
}

fn describe() {
    tracing::info!(
        tables = LEGACY_TABLES.len(),
        "dropping first-generation library template tables; existing template data is deleted permanently"
    );
}

#[cfg(feature = "sqlite")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        describe();
        for statment in up_statements() {
            let statment = statment.to_string(sea_query::SqliteQueryBuilder);
            sqlx::query(&statment).execute(&mut *connection).await?;
        }

        Ok(())
    }

    async fn down(
        &self,
        _connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        // Template data was deleted on upgrade; there is nothing to restore.
        tracing::warn!("library template tables cannot be restored on revert");
        Ok(())
    }
}

#[cfg(feature = "mysql")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::MySql> for Operation {
    async fn up(&self, connection: &mut sqlx::MySqlConnection) -> Result<(), sqlx_migrator::Error> {
        describe();
        for statment in up_statements() {
            let statment = statment.to_string(sea_query::MysqlQueryBuilder);
            sqlx::query(&statment).execute(&mut *connection).await?;
        }

        Ok(())
    }

    async fn down(
        &self,
        _connection: &mut sqlx::MySqlConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        // Template data was deleted on upgrade; there is nothing to restore.
        tracing::warn!("library template tables cannot be restored on revert");
        Ok(())
    }
}

#[cfg(feature = "postgres")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Postgres> for Operation {
    async fn up(&self, connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        describe();
        for statment in up_statements() {
            let statment = statment.to_string(sea_query::PostgresQueryBuilder);
            sqlx::query(&statment).execute(&mut *connection).await?;
        }

        Ok(())
    }

    async fn down(&self, _connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        // Template data was deleted on upgrade; there is nothing to restore.
        tracing::warn!("library template tables cannot be restored on revert");
        Ok(())
    }
}
