//! DDL capability flags per database backend.

/// Capability flags for schema operations that backends do not all support
/// the same way.
///
/// Operations consult these constants instead of matching on an engine name,
/// so each backend's quirks are declared in one place.
pub trait SchemaDialect: sqlx::Database {
    /// Whether `ALTER TABLE ... DROP COLUMN` works in place.
    const SUPPORTS_DROP_COLUMN: bool;

    /// Hard cap on identifier length. Exceeding it is an error on this
    /// backend rather than a silent truncation.
    const IDENTIFIER_HARD_LIMIT: Option<usize>;
}

#[cfg(feature = "sqlite")]
impl SchemaDialect for sqlx::Sqlite {
    // Dropping a column requires rewriting the whole table; the migrations
    // leave the column in place instead.
    const SUPPORTS_DROP_COLUMN: bool = false;
    const IDENTIFIER_HARD_LIMIT: Option<usize> = None;
}

#[cfg(feature = "mysql")]
impl SchemaDialect for sqlx::MySql {
    const SUPPORTS_DROP_COLUMN: bool = true;
    const IDENTIFIER_HARD_LIMIT: Option<usize> = Some(64);
}

#[cfg(feature = "postgres")]
impl SchemaDialect for sqlx::Postgres {
    const SUPPORTS_DROP_COLUMN: bool = true;
    // Postgres truncates long identifiers to 63 bytes instead of erroring.
    const IDENTIFIER_HARD_LIMIT: Option<usize> = None;
}
