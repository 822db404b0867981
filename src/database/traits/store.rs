//! Version store trait.
//!
//! `Store` is the bookkeeping contract a migration runner drives: create the
//! version table, record and remove applied versions, and read them back.

use anyhow::Result;
use async_trait::async_trait;
use time::OffsetDateTime;

use super::connection::Connection;

/// Request to record an applied migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertRequest {
    pub version: i64,
}

impl InsertRequest {
    pub fn new(version: i64) -> Self {
        Self { version }
    }
}

/// Result of looking up a single migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMigrationResult {
    /// When the version was recorded (server time)
    pub timestamp: OffsetDateTime,
    pub is_applied: bool,
}

/// One entry of the applied-migrations listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMigrationsResult {
    pub version: i64,
    pub is_applied: bool,
}

/// Returned by `Store::get_migration` when the version has no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("version not found: {version}")]
pub struct VersionNotFound {
    pub version: i64,
}

/// Check whether `err` is the [`VersionNotFound`] sentinel.
pub fn is_version_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<VersionNotFound>().is_some()
}

/// Storage for migration bookkeeping.
///
/// Every operation runs exactly one statement on the given connection.
/// Errors other than [`VersionNotFound`] are the connection's errors,
/// passed through unchanged.
#[async_trait]
pub trait Store: Send + Sync {
    /// Name of the version table.
    fn table_name(&self) -> &str;

    /// Create the version table if it does not exist.
    async fn create_version_table<C: Connection>(&self, conn: &C) -> Result<()>;

    /// Record an applied version.
    async fn insert<C: Connection>(&self, conn: &C, req: InsertRequest) -> Result<()>;

    /// Remove a version record.
    async fn delete<C: Connection>(&self, conn: &C, version: i64) -> Result<()>;

    /// Look up one version.
    ///
    /// # Errors
    ///
    /// Returns [`VersionNotFound`] when no row exists for `version`.
    async fn get_migration<C: Connection>(
        &self,
        conn: &C,
        version: i64,
    ) -> Result<GetMigrationResult>;

    /// Highest recorded version, or 0 when none exist.
    async fn get_latest_version<C: Connection>(&self, conn: &C) -> Result<i64>;

    /// All recorded versions in ascending order.
    async fn list_migrations<C: Connection>(&self, conn: &C) -> Result<Vec<ListMigrationsResult>>;
}
