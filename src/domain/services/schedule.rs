use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::de::Error as _;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Weekday labels indexed from Sunday (0) to Saturday (6).
pub const WEEKDAY_LABELS: [&str; 7] = [
    "domingo", "segunda", "terca", "quarta", "quinta", "sexta", "sabado",
];

/// Operating hours as configured: one list shared by every weekday, or a
/// list per weekday label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatingHours {
    Flat(Vec<String>),
    ByWeekday(BTreeMap<String, Vec<String>>),
}

impl OperatingHours {
    /// Only the outer shape is strict. Non-string slot entries and labels
    /// whose value is not a list are skipped with a warning.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Array(entries) => Ok(OperatingHours::Flat(string_entries(entries))),
            Value::Object(days) => {
                let days = days
                    .into_iter()
                    .filter_map(|(label, value)| match value {
                        Value::Array(entries) => Some((label, string_entries(entries))),
                        Value::Null => Some((label, Vec::new())),
                        other => {
                            warn!("Ignoring schedule label '{}' with non-list value {}", label, other);
                            None
                        }
                    })
                    .collect();
                Ok(OperatingHours::ByWeekday(days))
            }
            other => Err(serde_json::Error::custom(format!(
                "expected a list of times or a weekday mapping, found {}",
                other
            ))),
        }
    }

    /// Raw slot strings configured for `weekday` (0 = Sunday), in configured order.
    pub fn entries_for(&self, weekday: usize) -> Vec<&str> {
        match self {
            OperatingHours::Flat(times) => times.iter().map(String::as_str).collect(),
            OperatingHours::ByWeekday(days) => days
                .iter()
                .filter(|(label, _)| weekday_index(label) == Some(weekday))
                .flat_map(|(_, times)| times.iter().map(String::as_str))
                .collect(),
        }
    }
}

fn string_entries(entries: Vec<Value>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(time) => Some(time),
            other => {
                warn!("Dropping non-string schedule entry {}", other);
                None
            }
        })
        .collect()
}

/// Canonical per-weekday slot lists. Built once from either shape of
/// [`OperatingHours`]; nothing downstream needs to know which shape it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [Vec<NaiveTime>; 7],
}

impl WeeklySchedule {
    pub fn from_operating_hours(hours: &OperatingHours) -> Self {
        if let OperatingHours::ByWeekday(days) = hours {
            for label in days.keys().filter(|l| weekday_index(l).is_none()) {
                warn!("Ignoring unknown weekday label '{}' in schedule", label);
            }
        }

        let days = std::array::from_fn(|weekday| normalize_slots(&hours.entries_for(weekday)));
        Self { days }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        OperatingHours::from_json(raw).map(|hours| Self::from_operating_hours(&hours))
    }

    /// Slots for `weekday` (0 = Sunday). Out-of-range indices have no slots.
    pub fn slots_for(&self, weekday: usize) -> &[NaiveTime] {
        self.days.get(weekday).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn slots_on(&self, date: NaiveDate) -> &[NaiveTime] {
        self.slots_for(date.weekday().num_days_from_sunday() as usize)
    }
}

/// Maps a weekday label to its index. Case-insensitive; the accented
/// spellings of terça and sábado are accepted.
pub fn weekday_index(label: &str) -> Option<usize> {
    let label = label.trim().to_lowercase();
    let label = match label.as_str() {
        "terça" => "terca",
        "sábado" => "sabado",
        other => other,
    };
    WEEKDAY_LABELS.iter().position(|l| *l == label)
}

pub fn parse_slot_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

pub fn format_slot_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn normalize_slots(entries: &[&str]) -> Vec<NaiveTime> {
    let mut slots: Vec<NaiveTime> = Vec::with_capacity(entries.len());
    for entry in entries {
        match parse_slot_time(entry) {
            Some(time) if !slots.contains(&time) => slots.push(time),
            Some(_) => {}
            None => warn!("Dropping unparseable schedule entry '{}'", entry),
        }
    }
    slots
}
