//! Store configuration.
//!
//! This module contains:
//! - `StoreConfig` - Table name, engine clause and cluster for the version table
//! - `DEFAULT_TABLE_NAME` - Table used when none is configured

use serde::{Deserialize, Serialize};

/// Version table used when no table name is configured.
pub const DEFAULT_TABLE_NAME: &str = "goose_db_version";

/// Construction parameters for a version store.
///
/// Every field is optional and an empty string counts as unset, so the
/// struct can be embedded in a caller's config file with
/// `#[serde(default)]` semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Version table name (may be qualified as `database.table`)
    pub table_name: Option<String>,
    /// Full `ENGINE = ...` clause body
    pub table_engine: Option<String>,
    /// Cluster for `ON CLUSTER` DDL and mutations
    pub cluster_name: Option<String>,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn with_table_engine(mut self, table_engine: impl Into<String>) -> Self {
        self.table_engine = Some(table_engine.into());
        self
    }

    pub fn with_cluster_name(mut self, cluster_name: impl Into<String>) -> Self {
        self.cluster_name = Some(cluster_name.into());
        self
    }

    /// Resolved table name, falling back to [`DEFAULT_TABLE_NAME`].
    pub fn resolved_table_name(&self) -> String {
        non_empty(&self.table_name)
            .unwrap_or(DEFAULT_TABLE_NAME)
            .to_string()
    }

    /// Resolved engine clause.
    ///
    /// Defaults to a replicated replacing merge tree whose ZooKeeper path
    /// embeds the resolved table name.
    pub fn resolved_table_engine(&self) -> String {
        match non_empty(&self.table_engine) {
            Some(engine) => engine.to_string(),
            None => default_table_engine(&self.resolved_table_name()),
        }
    }

    /// Resolved cluster name. `None` means single-node DDL.
    pub fn resolved_cluster_name(&self) -> Option<String> {
        non_empty(&self.cluster_name).map(str::to_string)
    }
}

/// Default engine clause for `table_name`.
pub fn default_table_engine(table_name: &str) -> String {
    format!(
        "ReplicatedReplacingMergeTree('/clickhouse/tables/{{shard}}/{}', '{{replica}}')",
        table_name
    )
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
