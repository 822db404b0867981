pub mod drivers;
pub mod traits;

pub use drivers::clickhouse::{ClickHouseConnection, ClickHouseStore};

pub use traits::{
    Connection, GetMigrationResult, InsertRequest, ListMigrationsResult, Param, Store,
    StoreConfig, VersionNotFound, is_version_not_found,
};
