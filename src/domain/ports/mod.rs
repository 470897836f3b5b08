use crate::domain::models::{
    reservation::Reservation, service::StudioService, studio::StudioConfig,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait StudioRepository: Send + Sync {
    async fn find_config(&self, studio_id: &str) -> Result<Option<StudioConfig>, AppError>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Only services currently marked active.
    async fn list_active(&self, studio_id: &str) -> Result<Vec<StudioService>, AppError>;
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Reservations dated within `[start, end]`, excluding cancelled ones.
    async fn list_by_range(
        &self,
        studio_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Reservation>, AppError>;
}
