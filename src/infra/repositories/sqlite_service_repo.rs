use crate::domain::{models::service::StudioService, ports::ServiceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteServiceRepo {
    pool: SqlitePool,
}

impl SqliteServiceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for SqliteServiceRepo {
    async fn list_active(&self, studio_id: &str) -> Result<Vec<StudioService>, AppError> {
        sqlx::query_as::<_, StudioService>(
            "SELECT id, category, active FROM services WHERE studio_id = ? AND active = 1",
        )
            .bind(studio_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
