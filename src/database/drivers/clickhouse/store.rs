//! ClickHouse version store.
//!
//! Implements `Store` for replicated ClickHouse tables. Each operation is a
//! single statement from `queries`; database errors are returned untouched.
//!
//! Deletes are mutations. Even with `mutations_sync = 2` an `ON CLUSTER`
//! delete is queued through the distributed DDL log, so a read issued right
//! after `delete` may still see the row on some replicas.

use anyhow::Result;
use async_trait::async_trait;

use super::queries;
use super::types::{LatestVersionRow, VersionRow};
use crate::database::traits::{
    Connection, GetMigrationResult, InsertRequest, ListMigrationsResult, Param, Store,
    StoreConfig, VersionNotFound,
};

/// Migration version store backed by a ClickHouse table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickHouseStore {
    table_name: String,
    table_engine: String,
    cluster_name: Option<String>,
}

impl ClickHouseStore {
    /// Create a store, resolving defaults from `config`.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            table_name: config.resolved_table_name(),
            table_engine: config.resolved_table_engine(),
            cluster_name: config.resolved_cluster_name(),
        }
    }

    pub fn table_engine(&self) -> &str {
        &self.table_engine
    }

    pub fn cluster_name(&self) -> Option<&str> {
        self.cluster_name.as_deref()
    }
}

impl Default for ClickHouseStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

#[async_trait]
impl Store for ClickHouseStore {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn create_version_table<C: Connection>(&self, conn: &C) -> Result<()> {
        tracing::debug!(
            "Creating version table {} (cluster: {:?})",
            self.table_name,
            self.cluster_name
        );
        let sql = queries::create_version_table(
            &self.table_name,
            self.cluster_name(),
            &self.table_engine,
        );
        conn.execute(&sql, &[]).await
    }

    async fn insert<C: Connection>(&self, conn: &C, req: InsertRequest) -> Result<()> {
        tracing::debug!("Recording version {} in {}", req.version, self.table_name);
        let sql = queries::insert_version(&self.table_name);
        conn.execute(&sql, &[Param::Int64(req.version)]).await
    }

    async fn delete<C: Connection>(&self, conn: &C, version: i64) -> Result<()> {
        tracing::debug!("Deleting version {} from {}", version, self.table_name);
        let sql = queries::delete_version(&self.table_name, self.cluster_name());
        conn.execute(&sql, &[Param::Int64(version)]).await
    }

    async fn get_migration<C: Connection>(
        &self,
        conn: &C,
        version: i64,
    ) -> Result<GetMigrationResult> {
        let sql = queries::get_migration(&self.table_name);
        let rows: Vec<VersionRow> = conn.fetch_all(&sql, &[Param::Int64(version)]).await?;

        let row = rows
            .into_iter()
            .next()
            .ok_or(VersionNotFound { version })?;

        Ok(GetMigrationResult {
            timestamp: row.timestamp,
            is_applied: true,
        })
    }

    async fn get_latest_version<C: Connection>(&self, conn: &C) -> Result<i64> {
        let sql = queries::get_latest_version(&self.table_name);
        let rows: Vec<LatestVersionRow> = conn.fetch_all(&sql, &[]).await?;
        Ok(rows.first().map(|row| row.version_id).unwrap_or(0))
    }

    async fn list_migrations<C: Connection>(&self, conn: &C) -> Result<Vec<ListMigrationsResult>> {
        let sql = queries::list_migrations(&self.table_name);
        let rows: Vec<VersionRow> = conn.fetch_all(&sql, &[]).await?;

        Ok(rows
            .into_iter()
            .map(|row| ListMigrationsResult {
                version: row.version_id,
                is_applied: true,
            })
            .collect())
    }
}
