//! Shared SQL surface for the labstore data library application.
//!
//! This crate provides the pieces of the SQL layer that are shared between the
//! application and its schema migrations: [sea-query](https://crates.io/crates/sea-query)
//! identifier enums for every table the persistence layer touches, and the
//! [`Json<T>`] wrapper type for semi-structured payload columns such as
//! `tool_shed_repository.tool_shed_status`.
//!
//! # Features
//!
//! - **`sqlite`** - Enables SQLite database support
//! - **`mysql`** - Enables MySQL database support
//! - **`postgres`** - Enables PostgreSQL database support
//!
//! All features are enabled by default. You can selectively enable only the databases you need:
//!
//! ```toml
//! [dependencies]
//! labstore-sql = { version = "0.4", default-features = false, features = ["postgres"] }
//! ```

mod sql;
mod sql_types;

pub use sql::*;
pub use sql_types::Json;
