//! SQL type wrappers for serialization.
//!
//! This module provides the [`Json`] wrapper type for storing semi-structured
//! payloads (such as the tool shed status report) in SQL TEXT/JSON columns.

use std::ops::{Deref, DerefMut};

#[cfg(feature = "sqlite")]
use sqlx::database::Database;
#[cfg(feature = "sqlite")]
use sqlx::decode::Decode;
#[cfg(feature = "sqlite")]
use sqlx::encode::{Encode, IsNull};
#[cfg(feature = "sqlite")]
use sqlx::error::BoxDynError;
#[cfg(feature = "sqlite")]
use sqlx::sqlite::{SqliteArgumentValue, SqliteTypeInfo};
#[cfg(feature = "sqlite")]
use sqlx::types::Type;

/// A wrapper type for JSON-serialized data in SQL databases.
///
/// `Json<T>` wraps a value of type `T` and serializes it to a JSON string when
/// storing to or reading from SQL databases. It is the Rust-side type for the
/// `tool_shed_repository.tool_shed_status` column, whose payload is a
/// semi-structured status report rather than a fixed shape.
///
/// # Database Support
///
/// Currently implements SQLx traits for SQLite. Data is stored as TEXT; MySQL
/// and PostgreSQL rows are read through their native JSON support instead.
///
/// # Deref
///
/// `Json<T>` implements `Deref` and `DerefMut` to `T`, allowing transparent
/// access to the inner value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Json<T: ?Sized>(pub T);

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> AsRef<T> for Json<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> AsMut<T> for Json<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Json<T>
where
    T: serde::Serialize,
{
    /// Serializes the wrapped value to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn encode_to(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}

impl<T> Json<T>
where
    T: serde::de::DeserializeOwned,
{
    /// Deserializes a value from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the data is invalid.
    pub fn decode_from_str(raw: &str) -> Result<Self, serde_json::Error> {
        let data = serde_json::from_str::<T>(raw)?;
        Ok(Self(data))
    }
}

#[cfg(feature = "sqlite")]
impl<T> Type<sqlx::Sqlite> for Json<T> {
    fn type_info() -> SqliteTypeInfo {
        <&str as Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <&str as Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<T> Encode<'_, sqlx::Sqlite> for Json<T>
where
    T: serde::Serialize,
{
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Sqlite as Database>::ArgumentBuffer<'_>,
    ) -> Result<IsNull, BoxDynError> {
        buf.push(SqliteArgumentValue::Text(std::borrow::Cow::Owned(
            self.encode_to()?,
        )));

        Ok(IsNull::No)
    }
}

#[cfg(feature = "sqlite")]
impl<'r, T> Decode<'r, sqlx::Sqlite> for Json<T>
where
    T: serde::de::DeserializeOwned,
    String: sqlx::Decode<'r, sqlx::Sqlite>,
{
    fn decode(value: <sqlx::Sqlite as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = String::decode(value)?;
        let data = Json::<T>::decode_from_str(&raw)?;

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Status {
        revision_update: String,
        revision_upgrade: String,
    }

    #[test]
    fn encodes_and_decodes_a_status_payload() {
        let status = Json(Status {
            revision_update: "False".into(),
            revision_upgrade: "True".into(),
        });

        let raw = status.encode_to().unwrap();
        let decoded = Json::<Status>::decode_from_str(&raw).unwrap();

        assert_eq!(decoded.0, status.0);
    }

    #[test]
    fn deref_exposes_the_inner_value() {
        let status = Json(Status {
            revision_update: "False".into(),
            revision_upgrade: "False".into(),
        });

        assert_eq!(status.revision_update, "False");
    }
}
