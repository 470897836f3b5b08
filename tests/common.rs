use studio_availability::{
    api::router::create_router,
    config::Config,
    infra::factory::{run_sqlite_migrations, sqlite_state},
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, Utc};
use tower::ServiceExt;
use serde_json::Value;

pub fn test_config(database_url: &str) -> Config {
    Config {
        database_url: database_url.to_string(),
        port: 0,
        log_dir: "./logs".to_string(),
        max_range_days: 366,
        source_fetch_timeout_ms: 5000,
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    #[allow(dead_code)]
    pub fn availability_status(&self) -> &str {
        self.headers
            .get("x-availability-status")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }
}

pub async fn send_get(router: &Router, uri: &str) -> TestResponse {
    let response = router.clone().oneshot(
        Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
    ).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse { status, headers, body }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool).await;

        let state = Arc::new(sqlite_state(test_config(&db_url), pool.clone()));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        send_get(&self.router, uri).await
    }

    pub async fn create_studio(&self, schedule_json: Option<&str>, capacity_natural: Option<i64>, capacity_artificial: Option<i64>) -> String {
        let id = Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO studios (id, name, weekly_schedule, capacity_natural, capacity_artificial, created_at) VALUES (?, ?, ?, ?, ?, ?)")
            .bind(&id)
            .bind("Studio Teste")
            .bind(schedule_json)
            .bind(capacity_natural)
            .bind(capacity_artificial)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .expect("Failed to insert studio");
        id
    }

    pub async fn create_service(&self, studio_id: &str, category: &str, active: bool) -> String {
        let id = Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO services (id, studio_id, name, category, active) VALUES (?, ?, ?, ?, ?)")
            .bind(&id)
            .bind(studio_id)
            .bind(format!("{} service", category))
            .bind(category)
            .bind(active)
            .execute(&self.pool)
            .await
            .expect("Failed to insert service");
        id
    }

    pub async fn create_reservation(&self, studio_id: &str, service_id: &str, on: &str, at: &str, status: &str) {
        sqlx::query("INSERT INTO reservations (id, studio_id, service_id, reservation_date, reservation_time, status, customer_name, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)")
            .bind(Uuid::new_v4().to_string())
            .bind(studio_id)
            .bind(service_id)
            .bind(date(on))
            .bind(at)
            .bind(status)
            .bind("Cliente")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .expect("Failed to insert reservation");
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
