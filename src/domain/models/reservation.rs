use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use sqlx::FromRow;

pub const CANCELLED_STATUS: &str = "cancelled";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Reservation {
    pub date: NaiveDate,
    pub time: String,
    pub service_id: String,
    pub status: String,
}

impl Reservation {
    pub fn is_cancelled(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case(CANCELLED_STATUS)
    }
}
