#![cfg(test)]
use configs::{AuthConfig, DatabaseConfig};
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::auth::password::PasswordService;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Argon2 with minimal cost so tests stay fast.
pub fn cheap_passwords() -> PasswordService {
    PasswordService::new(&AuthConfig { memory_kib: 1024, iterations: 1, parallelism: 1 })
        .expect("valid argon2 params")
}

/// Database tests run only against an explicitly configured database.
pub fn skip_db() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    MIGRATED
        .get_or_init(|| async {
            let db = connect_with_config(&DatabaseConfig::from_env()).await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
            drop(db);
        })
        .await;

    // fresh connection for the current test's runtime
    let mut cfg = DatabaseConfig::from_env();
    cfg.min_connections = 1;
    cfg.acquire_timeout_secs = 10;
    Ok(connect_with_config(&cfg).await?)
}

/// Phone number unlikely to collide with earlier runs.
pub fn unique_phone() -> String {
    let n = uuid::Uuid::new_v4().as_u128() % 10_000_000_000;
    format!("09{:010}", n)
}
