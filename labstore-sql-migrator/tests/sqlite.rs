#![cfg(feature = "sqlite")]

use labstore_sql_migrator::{LibraryFormsMigration, RepositoryStatusMigration, Reversibility};
use sqlx::{Connection, Row, SqliteConnection};
use sqlx_migrator::{Migrate, Plan};

/// Tables created by earlier migrations that this fragment only references.
const PARENT_TABLES: [&str; 5] = [
    "library",
    "library_folder",
    "library_dataset_dataset_association",
    "form_definition",
    "form_values",
];

/// The first-generation template tables the upgrade is expected to remove.
/// Three of these names are recreated with the new association shape.
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

const ASSOCIATION_TABLES: [&str; 3] = [
    "library_info_association",
    "library_folder_info_association",
    "library_dataset_dataset_info_association",
];

/// Builds the schema state the sequence expects to find: parent tables plus
/// the legacy template tables in their row-per-field shape.
async fn seed_schema(conn: &mut SqliteConnection) -> anyhow::Result<()> {
    for table in PARENT_TABLES {
        sqlx::query(&format!(
            "CREATE TABLE {table} (id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT)"
        ))
        .execute(&mut *conn)
        .await?;
    }

    for table in LEGACY_TABLES {
        sqlx::query(&format!(
            "CREATE TABLE {table} (id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT, library_item_info_id INTEGER)"
        ))
        .execute(&mut *conn)
        .await?;
    }

    sqlx::query(
        "CREATE TABLE tool_shed_repository (id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT, update_available BOOLEAN DEFAULT 0)",
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn upgraded_connection() -> anyhow::Result<SqliteConnection> {
    let mut conn = SqliteConnection::connect("sqlite::memory:").await?;
    seed_schema(&mut conn).await?;

    let migrator = labstore_sql_migrator::new::<sqlx::Sqlite>()?;
    migrator.run(&mut conn, &Plan::apply_all()).await?;

    Ok(conn)
}

async fn table_exists(conn: &mut SqliteConnection, table: &str) -> anyhow::Result<bool> {
    let row = sqlx::query("SELECT count(*) AS n FROM sqlite_master WHERE type = 'table' AND name = ?")
        .bind(table)
        .fetch_one(conn)
        .await?;

    Ok(row.get::<i64, _>("n") > 0)
}

async fn table_columns(conn: &mut SqliteConnection, table: &str) -> anyhow::Result<Vec<String>> {
    let rows = sqlx::query(&format!("PRAGMA table_info({table})"))
        .fetch_all(conn)
        .await?;

    Ok(rows.iter().map(|row| row.get::<String, _>("name")).collect())
}

async fn index_exists(conn: &mut SqliteConnection, index: &str) -> anyhow::Result<bool> {
    let row = sqlx::query("SELECT count(*) AS n FROM sqlite_master WHERE type = 'index' AND name = ?")
        .bind(index)
        .fetch_one(conn)
        .await?;

    Ok(row.get::<i64, _>("n") > 0)
}

#[tokio::test]
async fn upgrade_replaces_legacy_template_tables() -> anyhow::Result<()> {
    let mut conn = upgraded_connection().await?;

    for table in LEGACY_TABLES {
        if ASSOCIATION_TABLES.contains(&table) {
            continue;
        }
        assert!(
            !table_exists(&mut conn, table).await?,
            "{table} should be dropped"
        );
    }

    let columns = table_columns(&mut conn, "library_info_association").await?;
    assert_eq!(
        columns,
        vec!["id", "library_id", "form_definition_id", "form_values_id"]
    );

    let columns = table_columns(&mut conn, "library_folder_info_association").await?;
    assert_eq!(
        columns,
        vec![
            "id",
            "library_folder_id",
            "form_definition_id",
            "form_values_id"
        ]
    );

    let columns = table_columns(&mut conn, "library_dataset_dataset_info_association").await?;
    assert_eq!(
        columns,
        vec![
            "id",
            "library_dataset_dataset_association_id",
            "form_definition_id",
            "form_values_id"
        ]
    );

    Ok(())
}

#[tokio::test]
async fn upgrade_indexes_every_association_column() -> anyhow::Result<()> {
    let mut conn = upgraded_connection().await?;

    for index in [
        "ix_library_info_association_library_id",
        "ix_library_info_association_form_definition_id",
        "ix_library_info_association_form_values_id",
        "ix_library_folder_info_association_library_folder_id",
        "ix_library_dataset_dataset_info_association_form_values_id",
        // SQLite has no identifier limit, so the derived name is kept.
        "ix_library_dataset_dataset_info_association_library_dataset_dataset_association_id",
    ] {
        assert!(
            index_exists(&mut conn, index).await?,
            "{index} should exist"
        );
    }

    Ok(())
}

#[tokio::test]
async fn upgrade_keeps_the_flag_and_adds_the_status_column_on_sqlite() -> anyhow::Result<()> {
    let mut conn = upgraded_connection().await?;

    let columns = table_columns(&mut conn, "tool_shed_repository").await?;
    // SQLite cannot drop columns in place, so the flag stays behind.
    assert!(columns.contains(&"update_available".to_string()));
    assert!(columns.contains(&"tool_shed_status".to_string()));

    Ok(())
}

#[tokio::test]
async fn revert_changes_nothing_on_sqlite() -> anyhow::Result<()> {
    let mut conn = upgraded_connection().await?;

    let migrator = labstore_sql_migrator::new::<sqlx::Sqlite>()?;
    migrator.run(&mut conn, &Plan::revert_all()).await?;

    // m0013 is irreversible: the association tables survive and the legacy
    // tables are not restored.
    for table in ASSOCIATION_TABLES {
        assert!(table_exists(&mut conn, table).await?, "{table} should survive");
    }
    assert!(!table_exists(&mut conn, "library_item_info").await?);

    // m0116's revert performs no column changes on SQLite.
    let columns = table_columns(&mut conn, "tool_shed_repository").await?;
    assert!(columns.contains(&"update_available".to_string()));
    assert!(columns.contains(&"tool_shed_status".to_string()));

    Ok(())
}

#[tokio::test]
async fn upgrade_fails_without_the_legacy_schema() -> anyhow::Result<()> {
    // Dropping the legacy tables is a required step: against an empty schema
    // it must abort instead of silently skipping ahead.
    let mut conn = SqliteConnection::connect("sqlite::memory:").await?;

    let migrator = labstore_sql_migrator::new::<sqlx::Sqlite>()?;
    let outcome = migrator.run(&mut conn, &Plan::apply_all()).await;

    assert!(outcome.is_err());

    Ok(())
}

#[tracing_test::traced_test]
#[tokio::test]
async fn upgrade_announces_each_migration() -> anyhow::Result<()> {
    let _conn = upgraded_connection().await?;

    assert!(logs_contain(
        "dropping first-generation library template tables"
    ));
    assert!(logs_contain(
        "swapping tool_shed_repository.update_available"
    ));

    Ok(())
}

#[test]
fn reversibility_is_declared_per_migration() {
    assert_eq!(
        LibraryFormsMigration::REVERSIBILITY,
        Reversibility::Irreversible
    );
    assert_eq!(
        RepositoryStatusMigration::REVERSIBILITY,
        Reversibility::Reversible
    );
}
