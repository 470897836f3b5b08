use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Studio configuration as stored. `weekly_schedule` is raw JSON in either
/// the flat or the per-weekday shape; capacities may be unset.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct StudioConfig {
    pub id: String,
    pub weekly_schedule: Option<String>,
    pub capacity_natural: Option<i64>,
    pub capacity_artificial: Option<i64>,
}
