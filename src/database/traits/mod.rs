//! Version store abstraction traits and types.
//!
//! It defines:
//!
//! - **Types** (`types`): `StoreConfig` and its defaults
//! - **Connection** (`connection`): The database handle trait and statement parameters
//! - **Store** (`store`): The bookkeeping trait, its request/result types and the
//!   not-found sentinel
//!
//! # Example
//!
//! ```ignore
//! use goose_clickhouse_store::database::traits::{InsertRequest, Store, StoreConfig};
//! use goose_clickhouse_store::database::drivers::clickhouse::{
//!     ClickHouseConnection, ClickHouseStore,
//! };
//!
//! let conn = ClickHouseConnection::from_url("http://default:@localhost:8123/default")?;
//! let store = ClickHouseStore::new(StoreConfig::new().with_cluster_name("main"));
//!
//! store.create_version_table(&conn).await?;
//! store.insert(&conn, InsertRequest::new(1)).await?;
//! ```

pub mod connection;
pub mod store;
pub mod types;

pub use connection::{Connection, Param};

pub use store::{
    GetMigrationResult, InsertRequest, ListMigrationsResult, Store, VersionNotFound,
    is_version_not_found,
};

pub use types::{DEFAULT_TABLE_NAME, StoreConfig, default_table_engine};
