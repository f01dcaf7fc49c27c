use crate::error::StoreResult;
use sqlx::SqlitePool;

/// Database migration manager
pub struct MigrationRunner {
    pool: SqlitePool,
}

impl MigrationRunner {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run all pending migrations
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        let applied_versions: Vec<i64> =
            sqlx::query_scalar("SELECT version FROM _migrations ORDER BY version")
                .fetch_all(&self.pool)
                .await?;

        if !applied_versions.contains(&1) {
            self.run_script(include_str!("../../migrations/001_initial_schema.sql")).await?;

            sqlx::query("INSERT INTO _migrations (version, name) VALUES (1, '001_initial_schema')")
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }

    /// Execute a multi-statement SQL script inside one transaction.
    /// Statements are ';'-terminated; comment-only fragments are skipped.
    async fn run_script(&self, script: &str) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        for statement in script.split(';') {
            let trimmed: String = statement
                .lines()
                .filter(|line| {
                    let t = line.trim_start();
                    !t.is_empty() && !t.starts_with("--")
                })
                .collect::<Vec<_>>()
                .join("\n");

            if trimmed.trim().is_empty() {
                continue;
            }

            sqlx::query(&trimmed).execute(&mut *tx).await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
