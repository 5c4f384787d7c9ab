//! Best-effort statement execution.

/// Executes a statement whose failure must not abort the enclosing
/// migration.
///
/// A failure is logged with its context and swallowed; the caller always
/// continues. Used for steps that are optimizations or backfills rather than
/// correctness requirements.
pub(crate) async fn execute_advisory<DB>(
    connection: &mut <DB as sqlx::Database>::Connection,
    statment: &str,
    context: &str,
) -> Result<(), sqlx_migrator::Error>
where
    DB: sqlx::Database,
    for<'c> &'c mut <DB as sqlx::Database>::Connection: sqlx::Executor<'c, Database = DB>,
    for<'q> <DB as sqlx::Database>::Arguments<'q>: sqlx::IntoArguments<'q, DB>,
{
    if let Err(err) = sqlx::query(statment).execute(connection).await {
        tracing::error!(%err, context, "advisory statement failed; continuing");
    }

    Ok(())
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use sqlx::{Connection, SqliteConnection};
    use tracing_test::traced_test;

    use super::*;

    #[traced_test]
    #[tokio::test]
    async fn a_failing_statement_is_logged_not_propagated() -> anyhow::Result<()> {
        let mut conn = SqliteConnection::connect("sqlite::memory:").await?;

        let outcome = execute_advisory::<sqlx::Sqlite>(
            &mut conn,
            "DROP TABLE does_not_exist",
            "dropping a missing table",
        )
        .await;

        assert!(outcome.is_ok());
        assert!(logs_contain("advisory statement failed"));

        Ok(())
    }

    #[tokio::test]
    async fn a_successful_statement_takes_effect() -> anyhow::Result<()> {
        let mut conn = SqliteConnection::connect("sqlite::memory:").await?;

        execute_advisory::<sqlx::Sqlite>(
            &mut conn,
            "CREATE TABLE advisory_scratch (id INTEGER)",
            "creating a table",
        )
        .await?;

        sqlx::query("SELECT id FROM advisory_scratch")
            .fetch_all(&mut conn)
            .await?;

        Ok(())
    }
}
