//! ClickHouse version store driver.
//!
//! This module implements the `Connection` and `Store` traits for ClickHouse,
//! a column-oriented OLAP database management system.
//!
//! Features:
//! - HTTP-based connection (port 8123 by default) via the `clickhouse` crate
//! - Quorum inserts and synchronous mutations for replicated tables
//! - `FINAL` reads over a ReplacingMergeTree version table

mod connection;
mod queries;
mod store;
mod types;

pub use connection::ClickHouseConnection;
pub use store::ClickHouseStore;
pub use types::VersionRow;
