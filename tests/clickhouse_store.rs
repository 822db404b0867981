//! Integration tests against a live ClickHouse server.
//!
//! Set `CLICKHOUSE_URL` (for example `http://default:@localhost:8123/default`)
//! to run them; `CLICKHOUSE_CLUSTER` additionally runs DDL `ON CLUSTER`.
//! Without `CLICKHOUSE_URL` every test returns early.

use std::time::{SystemTime, UNIX_EPOCH};

use goose_clickhouse_store::{
    ClickHouseConnection, ClickHouseStore, Connection, InsertRequest, Store, StoreConfig,
    is_version_not_found,
};
use tracing_subscriber::EnvFilter;

struct Harness {
    conn: ClickHouseConnection,
    store: ClickHouseStore,
}

impl Harness {
    async fn drop_table(&self) {
        let sql = format!("DROP TABLE IF EXISTS {}", self.store.table_name());
        let _ = self.conn.execute(&sql, &[]).await;
    }
}

async fn harness(prefix: &str) -> Option<Harness> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let url = match std::env::var("CLICKHOUSE_URL") {
        Ok(url) if !url.is_empty() => url,
        _ => {
            eprintln!("CLICKHOUSE_URL not set, skipping");
            return None;
        }
    };

    let conn = ClickHouseConnection::from_url(&url).unwrap();
    conn.test_connection().await.unwrap();

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut config = StoreConfig::new()
        .with_table_name(format!("{}_{}", prefix, nanos))
        .with_table_engine("ReplacingMergeTree");
    if let Ok(cluster) = std::env::var("CLICKHOUSE_CLUSTER") {
        config = config.with_cluster_name(cluster);
    }

    let harness = Harness {
        conn,
        store: ClickHouseStore::new(config),
    };
    harness.store.create_version_table(&harness.conn).await.unwrap();
    Some(harness)
}

#[tokio::test]
async fn test_create_version_table_is_idempotent() {
    let Some(h) = harness("idempotent").await else {
        return;
    };

    h.store.create_version_table(&h.conn).await.unwrap();
    assert_eq!(h.store.get_latest_version(&h.conn).await.unwrap(), 0);

    h.drop_table().await;
}

#[tokio::test]
async fn test_insert_then_read_back() {
    let Some(h) = harness("insert").await else {
        return;
    };

    for version in [3, 1, 2] {
        h.store.insert(&h.conn, InsertRequest::new(version)).await.unwrap();
    }
    h.store.insert(&h.conn, InsertRequest::new(2)).await.unwrap();

    assert!(h.store.get_latest_version(&h.conn).await.unwrap() >= 3);

    let versions: Vec<i64> = h
        .store
        .list_migrations(&h.conn)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.version)
        .collect();
    assert_eq!(versions, vec![1, 2, 3]);

    let migration = h.store.get_migration(&h.conn, 2).await.unwrap();
    assert!(migration.is_applied);

    h.drop_table().await;
}

#[tokio::test]
async fn test_missing_version_is_not_found() {
    let Some(h) = harness("missing").await else {
        return;
    };

    let err = h.store.get_migration(&h.conn, 404).await.unwrap_err();
    assert!(is_version_not_found(&err));

    h.drop_table().await;
}

#[tokio::test]
async fn test_delete_removes_version() {
    let Some(h) = harness("delete").await else {
        return;
    };

    h.store.insert(&h.conn, InsertRequest::new(1)).await.unwrap();
    h.store.insert(&h.conn, InsertRequest::new(2)).await.unwrap();
    h.store.delete(&h.conn, 2).await.unwrap();

    let versions: Vec<i64> = h
        .store
        .list_migrations(&h.conn)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.version)
        .collect();
    assert_eq!(versions, vec![1]);
    assert_eq!(h.store.get_latest_version(&h.conn).await.unwrap(), 1);

    h.drop_table().await;
}
