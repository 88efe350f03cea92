//! Database-backed tests. Each test skips itself when `SKIP_DB_TESTS` is set
//! or no PostgreSQL is reachable at `DATABASE_URL`.



use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::connect;

pub(crate) async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

/// Account names are unique; tests share one database.
pub(crate) fn unique(prefix: &str) -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}_{nanos}")
}
