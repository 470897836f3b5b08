use crate::domain::{models::reservation::Reservation, ports::ReservationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteReservationRepo {
    pool: SqlitePool,
}

impl SqliteReservationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepo {
    async fn list_by_range(
        &self,
        studio_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>(
            "SELECT reservation_date AS date, reservation_time AS time, service_id, status FROM reservations
             WHERE studio_id = ? AND reservation_date >= ? AND reservation_date <= ? AND LOWER(status) != 'cancelled'
             ORDER BY reservation_date, reservation_time"
        )
            .bind(studio_id).bind(start).bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
