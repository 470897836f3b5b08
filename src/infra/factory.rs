use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::infra::repositories::{
    postgres_reservation_repo::PostgresReservationRepo, postgres_service_repo::PostgresServiceRepo,
    postgres_studio_repo::PostgresStudioRepo,
    sqlite_reservation_repo::SqliteReservationRepo, sqlite_service_repo::SqliteServiceRepo,
    sqlite_studio_repo::SqliteStudioRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState::new(
            config.clone(),
            Arc::new(PostgresStudioRepo::new(pool.clone())),
            Arc::new(PostgresServiceRepo::new(pool.clone())),
            Arc::new(PostgresReservationRepo::new(pool)),
        )
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        sqlite_state(config.clone(), pool)
    }
}

/// State over an already-migrated SQLite pool.
pub fn sqlite_state(config: Config, pool: SqlitePool) -> AppState {
    AppState::new(
        config,
        Arc::new(SqliteStudioRepo::new(pool.clone())),
        Arc::new(SqliteServiceRepo::new(pool.clone())),
        Arc::new(SqliteReservationRepo::new(pool)),
    )
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
