//! Core database connection trait.
//!
//! This module defines the `Connection` trait: the database handle a
//! `Store` is given for every call. Drivers implement it over their client.

use anyhow::Result;
use async_trait::async_trait;
use clickhouse::Row;
use serde::de::DeserializeOwned;

/// A positional statement parameter, bound to the next `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Int64(i64),
    String(String),
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int64(v) => write!(f, "{}", v),
            Self::String(s) => write!(f, "'{}'", s),
        }
    }
}

/// Database handle used by the version store.
///
/// Statements use `?` placeholders; `params` are bound to them in order.
/// Implementations must return the driver's error unchanged so callers can
/// downcast it.
///
/// Cancellation is dropping the returned future. Deadlines belong to the
/// caller:
///
/// ```ignore
/// tokio::time::timeout(Duration::from_secs(5), store.get_latest_version(&conn)).await??;
/// ```
#[async_trait]
pub trait Connection: Send + Sync {
    /// Execute a statement that returns no rows (DDL, INSERT, ALTER).
    async fn execute(&self, sql: &str, params: &[Param]) -> Result<()>;

    /// Execute a query and decode every returned row as `T`.
    async fn fetch_all<T>(&self, sql: &str, params: &[Param]) -> Result<Vec<T>>
    where
        T: Row + DeserializeOwned + Send + 'static;
}
