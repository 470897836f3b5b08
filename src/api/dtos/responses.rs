use serde::Serialize;
use crate::domain::models::availability::{DayAvailability, SlotAvailability};
use crate::domain::services::schedule::format_slot_time;

#[derive(Debug, Serialize)]
pub struct SlotResponse {
    pub time: String,
    pub available: u32,
}

impl From<&SlotAvailability> for SlotResponse {
    fn from(slot: &SlotAvailability) -> Self {
        Self {
            time: format_slot_time(slot.time),
            available: slot.available,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DayAvailabilityResponse {
    pub date: String,
    pub slots: Vec<SlotResponse>,
}

impl From<&DayAvailability> for DayAvailabilityResponse {
    fn from(day: &DayAvailability) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            slots: day.slots.iter().map(SlotResponse::from).collect(),
        }
    }
}

/// Single-day view; `slots` is empty when nothing is open.
#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub slots: Vec<SlotResponse>,
}
