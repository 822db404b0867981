//! Version store driver implementations.
//!
//! - **ClickHouse**: replicated ReplacingMergeTree version table over HTTP
//!
//! Each driver implements the `Connection` and `Store` traits.

pub mod clickhouse;
