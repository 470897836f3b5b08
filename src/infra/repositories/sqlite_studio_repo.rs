use crate::domain::{models::studio::StudioConfig, ports::StudioRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteStudioRepo {
    pool: SqlitePool,
}

impl SqliteStudioRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudioRepository for SqliteStudioRepo {
    async fn find_config(&self, studio_id: &str) -> Result<Option<StudioConfig>, AppError> {
        sqlx::query_as::<_, StudioConfig>(
            "SELECT id, weekly_schedule, capacity_natural, capacity_artificial FROM studios WHERE id = ?",
        )
            .bind(studio_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
