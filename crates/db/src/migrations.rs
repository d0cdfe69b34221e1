use sqlx::migrate::{MigrateError, Migrator};
use tracing::info;

use crate::DbPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

pub async fn run_pending(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!(event_name = "db.migrations.applied", "database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use sqlx::Row;

    use super::run_pending;
    use crate::connect_with_settings;

    const MANAGED_SCHEMA_OBJECTS: &[&str] = &[
        "material_request",
        "idx_material_request_status",
        "idx_material_request_date_requested",
    ];

    #[tokio::test]
    async fn migrations_create_the_managed_schema() {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("connect");
        run_pending(&pool).await.expect("run migrations");

        let rows = sqlx::query(
            "SELECT name FROM sqlite_master WHERE type IN ('table', 'index') AND name NOT LIKE 'sqlite_%' AND name NOT LIKE '_sqlx_%'",
        )
        .fetch_all(&pool)
        .await
        .expect("query sqlite_master");

        let names: Vec<String> =
            rows.iter().map(|row| row.get::<String, _>("name")).collect();
        for object in MANAGED_SCHEMA_OBJECTS {
            assert!(names.iter().any(|n| n == object), "missing schema object {object}");
        }
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("connect");
        run_pending(&pool).await.expect("first run");
        run_pending(&pool).await.expect("second run");
    }
}
