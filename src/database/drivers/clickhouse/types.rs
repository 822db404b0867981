//! ClickHouse row types for the version table.
//!
//! Rows are decoded from RowBinary by the `clickhouse` client, so field
//! order must match the selected column order:
//! - `version_id` - Int64
//! - `timestamp`  - DateTime (seconds since epoch, UTC)

use clickhouse::Row;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One row of the version table.
#[derive(Debug, Clone, PartialEq, Eq, Row, Serialize, Deserialize)]
pub struct VersionRow {
    pub version_id: i64,
    #[serde(with = "clickhouse::serde::time::datetime")]
    pub timestamp: OffsetDateTime,
}

/// Single-column result of the latest-version query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Row, Serialize, Deserialize)]
pub struct LatestVersionRow {
    pub version_id: i64,
}
