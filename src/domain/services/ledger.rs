use chrono::{NaiveDate, NaiveTime};
use crate::domain::models::reservation::Reservation;
use crate::domain::services::schedule::parse_slot_time;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub service_id: String,
}

/// Non-cancelled reservations of one range, ungrouped.
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    entries: Vec<LedgerEntry>,
}

impl BookingLedger {
    /// Drops cancelled reservations even if the repository already did, and
    /// reservations whose time cannot match any slot.
    pub fn from_reservations(reservations: Vec<Reservation>) -> Self {
        let entries = reservations
            .into_iter()
            .filter(|r| !r.is_cancelled())
            .filter_map(|r| match parse_slot_time(&r.time) {
                Some(time) => Some(LedgerEntry { date: r.date, time, service_id: r.service_id }),
                None => {
                    warn!("Ignoring reservation on {} with unparseable time '{}'", r.date, r.time);
                    None
                }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
