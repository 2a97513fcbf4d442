use chrono::Utc;
use pawhaven_kernel::Migration;
use sqlx::SqlitePool;

use crate::error::DbError;

const LEDGER_TABLE: &str = "_pawhaven_migrations";

/// Apply module migrations that have not run against this store yet.
///
/// Each migration runs in its own transaction together with its ledger row,
/// so a failed migration leaves no trace and is retried on the next start.
/// Returns the number of migrations applied.
pub async fn run_migrations(
    pool: &SqlitePool,
    migrations: &[(String, Migration)],
) -> Result<usize, DbError> {
    sqlx::query(&format!(
        "CREATE TABLE IF NOT EXISTS {LEDGER_TABLE} (
            module TEXT NOT NULL,
            id TEXT NOT NULL,
            applied_at TEXT NOT NULL,
            PRIMARY KEY (module, id)
        )"
    ))
    .execute(pool)
    .await?;

    let mut applied = 0;

    for (module, migration) in migrations {
        let already: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {LEDGER_TABLE} WHERE module = ? AND id = ?"
        ))
        .bind(module)
        .bind(migration.id)
        .fetch_one(pool)
        .await?;

        if already > 0 {
            tracing::debug!(module = %module, migration = migration.id, "migration already applied");
            continue;
        }

        let failed = |source| DbError::Migration {
            module: module.clone(),
            id: migration.id,
            source,
        };

        let mut tx = pool.begin().await?;
        sqlx::raw_sql(migration.up)
            .execute(&mut *tx)
            .await
            .map_err(failed)?;
        sqlx::query(&format!(
            "INSERT INTO {LEDGER_TABLE} (module, id, applied_at) VALUES (?, ?, ?)"
        ))
        .bind(module)
        .bind(migration.id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::info!(module = %module, migration = migration.id, "migration applied");
        applied += 1;
    }

    Ok(applied)
}
