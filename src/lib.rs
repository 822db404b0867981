//! ClickHouse storage for goose-style migration version tracking.
//!
//! A migration runner records applied versions through the [`Store`] trait.
//! [`ClickHouseStore`] keeps them in a replicated ReplacingMergeTree table,
//! using quorum inserts, synchronous mutations and `FINAL` reads.

pub mod database;

pub use database::{
    ClickHouseConnection, ClickHouseStore, Connection, GetMigrationResult, InsertRequest,
    ListMigrationsResult, Param, Store, StoreConfig, VersionNotFound, is_version_not_found,
};
