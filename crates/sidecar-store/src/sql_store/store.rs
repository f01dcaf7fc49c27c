use crate::error::{StoreError, StoreResult};
use crate::sql_store::migrations::MigrationRunner;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sidecar_core::{ActionStore, CollectorAction, CollectorActions, CoreResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::path::PathBuf;
use std::str::FromStr;

/// SQLite-backed implementation of [`ActionStore`].
#[derive(Debug, Clone)]
pub struct SqlActionStore {
    pool: SqlitePool,
}

impl SqlActionStore {
    /// Create a new store with database URL or plain file path.
    pub async fn new(database_url: &str) -> StoreResult<Self> {
        Self::new_with_config(database_url, None).await
    }

    /// Create a store with a custom pool size.
    pub async fn new_with_config(
        database_url: &str,
        max_connections: Option<u32>,
    ) -> StoreResult<Self> {
        let max_conn = max_connections.unwrap_or_else(|| {
            std::env::var("SIDECAR_HUB_DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10)
        });

        // Robust handling for sqlite file URLs; enable create_if_missing
        let pool = if let Some(path_str) = database_url.strip_prefix("sqlite://") {
            let path = PathBuf::from(path_str);
            let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
            SqlitePoolOptions::new().max_connections(max_conn).connect_with(options).await?
        } else {
            // Fallback for other forms (e.g., sqlite::memory: or bare paths)
            let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
            SqlitePoolOptions::new().max_connections(max_conn).connect_with(options).await?
        };

        sqlx::query("PRAGMA foreign_keys = ON;").execute(&pool).await?;
        sqlx::query("PRAGMA journal_mode = WAL;").execute(&pool).await?;
        sqlx::query("PRAGMA synchronous = NORMAL;").execute(&pool).await?;

        let store = Self { pool };

        let migration_runner = MigrationRunner::new(store.pool.clone());
        migration_runner.migrate().await?;

        Ok(store)
    }

    /// Create a store from an existing pool (for testing)
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run migrations manually
    pub async fn migrate(&self) -> StoreResult<()> {
        MigrationRunner::new(self.pool.clone()).migrate().await
    }

    fn decode_row(row: &sqlx::sqlite::SqliteRow) -> StoreResult<CollectorActions> {
        let actions_json: String = row.get("actions_json");
        let actions: Vec<CollectorAction> =
            serde_json::from_str(&actions_json).map_err(StoreError::Serialization)?;

        Ok(CollectorActions {
            id: row.get::<String, _>("doc_id"),
            sidecar_id: row.get::<String, _>("sidecar_id"),
            created_at: row.get::<DateTime<Utc>, _>("created_at"),
            actions,
        })
    }
}

#[async_trait]
impl ActionStore for SqlActionStore {
    async fn find_by_sidecar(
        &self,
        sidecar_id: &str,
        remove: bool,
    ) -> CoreResult<Option<CollectorActions>> {
        if remove {
            // Read and delete in one transaction so a delivered document
            // cannot be served twice.
            let mut tx = self.pool.begin().await.map_err(StoreError::Database)?;

            let row = sqlx::query(
                "SELECT sidecar_id, doc_id, actions_json, created_at FROM collector_actions WHERE sidecar_id = ?",
            )
            .bind(sidecar_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(StoreError::Database)?;

            let found = match row {
                Some(row) => Some(Self::decode_row(&row)?),
                None => None,
            };

            if found.is_some() {
                sqlx::query("DELETE FROM collector_actions WHERE sidecar_id = ?")
                    .bind(sidecar_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(StoreError::Database)?;
            }

            tx.commit().await.map_err(StoreError::Database)?;
            Ok(found)
        } else {
            let row = sqlx::query(
                "SELECT sidecar_id, doc_id, actions_json, created_at FROM collector_actions WHERE sidecar_id = ?",
            )
            .bind(sidecar_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::Database)?;

            match row {
                Some(row) => Ok(Some(Self::decode_row(&row)?)),
                None => Ok(None),
            }
        }
    }

    async fn save(&self, actions: &CollectorActions) -> CoreResult<CollectorActions> {
        let actions_json =
            serde_json::to_string(&actions.actions).map_err(StoreError::Serialization)?;

        // Try update by sidecar id first
        let result = sqlx::query(
            r#"
            UPDATE collector_actions
            SET doc_id = ?, actions_json = ?, created_at = ?
            WHERE sidecar_id = ?
            "#,
        )
        .bind(&actions.id)
        .bind(&actions_json)
        .bind(actions.created_at)
        .bind(&actions.sidecar_id)
        .execute(&self.pool)
        .await
        .map_err(StoreError::Database)?;

        if result.rows_affected() == 0 {
            sqlx::query(
                r#"
                INSERT INTO collector_actions (sidecar_id, doc_id, actions_json, created_at)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(&actions.sidecar_id)
            .bind(&actions.id)
            .bind(&actions_json)
            .bind(actions.created_at)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Database)?;
        }

        Ok(actions.clone())
    }

    async fn delete(&self, sidecar_id: &str) -> CoreResult<bool> {
        let result = sqlx::query("DELETE FROM collector_actions WHERE sidecar_id = ?")
            .bind(sidecar_id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Database)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn store() -> SqlActionStore {
        // Single connection so the in-memory database is shared across queries
        SqlActionStore::new_with_config("sqlite::memory:", Some(1)).await.unwrap()
    }

    #[tokio::test]
    async fn save_and_find_round_trips() {
        let store = store().await;
        let doc = CollectorActions::create(
            "sc-1",
            vec![
                CollectorAction::new("collector-1").with_property("start", json!(true)),
                CollectorAction::new("collector-2"),
            ],
        );

        store.save(&doc).await.unwrap();

        let found = store.find_by_sidecar("sc-1", false).await.unwrap().unwrap();
        assert_eq!(found.id, doc.id);
        assert_eq!(found.actions, doc.actions);
    }

    #[tokio::test]
    async fn unknown_sidecar_finds_nothing() {
        let store = store().await;
        assert!(store.find_by_sidecar("unknown", false).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn removing_read_deletes_the_document() {
        let store = store().await;
        let doc = CollectorActions::create("sc-1", vec![CollectorAction::new("collector-1")]);
        store.save(&doc).await.unwrap();

        assert!(store.find_by_sidecar("sc-1", true).await.unwrap().is_some());
        assert!(store.find_by_sidecar("sc-1", false).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_upserts_by_sidecar_id() {
        let store = store().await;
        let first = CollectorActions::create("sc-1", vec![CollectorAction::new("a")]);
        store.save(&first).await.unwrap();

        let second = CollectorActions::replace_actions(
            first.id.clone(),
            "sc-1",
            vec![CollectorAction::new("b")],
        );
        store.save(&second).await.unwrap();

        let found = store.find_by_sidecar("sc-1", false).await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(found.actions.len(), 1);
        assert_eq!(found.actions[0].collector_id, "b");
    }

    #[tokio::test]
    async fn file_backed_database_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("actions.db");
        let url = format!("sqlite://{}", db_path.display());

        let store = SqlActionStore::new(&url).await.unwrap();
        let doc = CollectorActions::create("sc-1", vec![CollectorAction::new("collector-1")]);
        store.save(&doc).await.unwrap();

        assert!(db_path.exists());
        assert!(store.delete("sc-1").await.unwrap());
    }
}
