//! SQL statements for the ClickHouse version table.
//!
//! Replicated tables need a few dialect specifics:
//! - inserts wait for a replica quorum (`insert_quorum='auto'`)
//! - deletes are mutations, run with `mutations_sync = 2` so every replica
//!   has applied them before the statement returns
//! - reads use `FINAL` so ReplacingMergeTree duplicates are merged away
//!
//! Value placeholders (`?`) are bound by the connection. Table, engine and
//! cluster are trusted configuration and are interpolated as-is.

/// Columns read back from the version table, in `VersionRow` order.
const VERSION_COLUMNS: &str = "version_id, timestamp";

fn on_cluster(cluster_name: Option<&str>) -> String {
    match cluster_name {
        Some(cluster) => format!(" ON CLUSTER {}", cluster),
        None => String::new(),
    }
}

pub fn create_version_table(
    table_name: &str,
    cluster_name: Option<&str>,
    table_engine: &str,
) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {}{} (\
         version_id Int64, \
         timestamp DateTime DEFAULT now(), \
         PRIMARY KEY (version_id)\
         ) ENGINE = {}",
        table_name,
        on_cluster(cluster_name),
        table_engine
    )
}

pub fn insert_version(table_name: &str) -> String {
    format!(
        "INSERT INTO {} (version_id) \
         SETTINGS insert_quorum='auto', insert_quorum_parallel=0, select_sequential_consistency=1 \
         VALUES (?)",
        table_name
    )
}

pub fn delete_version(table_name: &str, cluster_name: Option<&str>) -> String {
    format!(
        "ALTER TABLE {}{} DELETE WHERE version_id = ? SETTINGS mutations_sync = 2",
        table_name,
        on_cluster(cluster_name)
    )
}

pub fn get_migration(table_name: &str) -> String {
    format!(
        "SELECT {} FROM {} FINAL WHERE version_id = ?",
        VERSION_COLUMNS, table_name
    )
}

pub fn get_latest_version(table_name: &str) -> String {
    format!(
        "SELECT COALESCE(MAX(version_id), 0) AS version_id FROM {} FINAL",
        table_name
    )
}

pub fn list_migrations(table_name: &str) -> String {
    format!(
        "SELECT {} FROM {} FINAL ORDER BY version_id",
        VERSION_COLUMNS, table_name
    )
}
