use crate::domain::{models::service::StudioService, ports::ServiceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresServiceRepo {
    pool: PgPool,
}

impl PostgresServiceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for PostgresServiceRepo {
    async fn list_active(&self, studio_id: &str) -> Result<Vec<StudioService>, AppError> {
        sqlx::query_as::<_, StudioService>(
            "SELECT id, category, active FROM services WHERE studio_id = $1 AND active = TRUE",
        )
            .bind(studio_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
