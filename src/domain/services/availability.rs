use chrono::{NaiveDate, NaiveTime};
use crate::domain::models::availability::{
    CategoryFilter, DateRange, DayAvailability, SlotAvailability,
};
use crate::domain::models::service::ServiceCategory;
use crate::domain::services::capacity::CapacityModel;
use crate::domain::services::category::CategoryIndex;
use crate::domain::services::ledger::BookingLedger;
use crate::domain::services::schedule::WeeklySchedule;
use std::collections::HashMap;

/// Reservations held in one slot, per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotUsage {
    pub natural: u32,
    pub artificial: u32,
}

impl SlotUsage {
    pub fn count(&self, category: ServiceCategory) -> u32 {
        match category {
            ServiceCategory::Natural => self.natural,
            ServiceCategory::Artificial => self.artificial,
        }
    }

    fn charge(self, category: ServiceCategory) -> Self {
        match category {
            ServiceCategory::Natural => Self {
                natural: self.natural.saturating_add(1),
                ..self
            },
            ServiceCategory::Artificial => Self {
                artificial: self.artificial.saturating_add(1),
                ..self
            },
        }
    }
}

pub type Occupancy = HashMap<(NaiveDate, NaiveTime), SlotUsage>;

/// Groups the ledger by (date, time) and charges each reservation to the
/// category of its service.
pub fn tally_occupancy(ledger: &BookingLedger, categories: &CategoryIndex) -> Occupancy {
    ledger.entries().iter().fold(Occupancy::new(), |mut occupancy, entry| {
        let slot = occupancy.entry((entry.date, entry.time)).or_default();
        *slot = slot.charge(categories.category_of(&entry.service_id));
        occupancy
    })
}

/// Remaining room in a slot under `filter`. Each pool is clamped at zero
/// before pools are combined, and `All` sums the two pools.
pub fn available_in_slot(capacity: CapacityModel, usage: SlotUsage, filter: CategoryFilter) -> u32 {
    let remaining = |category| {
        capacity
            .for_category(category)
            .saturating_sub(usage.count(category))
    };

    match filter {
        CategoryFilter::Natural => remaining(ServiceCategory::Natural),
        CategoryFilter::Artificial => remaining(ServiceCategory::Artificial),
        CategoryFilter::All => remaining(ServiceCategory::Natural)
            .saturating_add(remaining(ServiceCategory::Artificial)),
    }
}

/// Open slots per day over `range`. Days are chronological and slots keep
/// schedule order; exhausted slots and days left without slots are omitted.
pub fn calculate_availability(
    schedule: &WeeklySchedule,
    capacity: CapacityModel,
    categories: &CategoryIndex,
    ledger: &BookingLedger,
    range: DateRange,
    filter: CategoryFilter,
) -> Vec<DayAvailability> {
    if range.is_empty() {
        return Vec::new();
    }

    let occupancy = tally_occupancy(ledger, categories);

    range
        .days()
        .filter_map(|date| {
            let slots: Vec<SlotAvailability> = schedule
                .slots_on(date)
                .iter()
                .filter_map(|&time| {
                    let usage = occupancy.get(&(date, time)).copied().unwrap_or_default();
                    let available = available_in_slot(capacity, usage, filter);
                    (available > 0).then_some(SlotAvailability { time, available })
                })
                .collect();

            (!slots.is_empty()).then_some(DayAvailability { date, slots })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::reservation::Reservation;
    use crate::domain::models::service::StudioService;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn monday() -> NaiveDate {
        date(2030, 1, 7)
    }

    fn schedule() -> WeeklySchedule {
        WeeklySchedule::from_json(r#"{"segunda": ["09:00", "10:00"]}"#).unwrap()
    }

    fn categories() -> CategoryIndex {
        CategoryIndex::from_services(&[
            StudioService { id: "mani".into(), category: "natural".into(), active: true },
            StudioService { id: "gel".into(), category: "artificial".into(), active: true },
        ])
    }

    fn booking(on: NaiveDate, at: &str, service: &str) -> Reservation {
        Reservation {
            date: on,
            time: at.into(),
            service_id: service.into(),
            status: "confirmed".into(),
        }
    }

    fn run(
        reservations: Vec<Reservation>,
        range: DateRange,
        filter: CategoryFilter,
    ) -> Vec<DayAvailability> {
        calculate_availability(
            &schedule(),
            CapacityModel::resolve(Some(10), Some(5)),
            &categories(),
            &BookingLedger::from_reservations(reservations),
            range,
            filter,
        )
    }

    #[test]
    fn test_natural_booking_reduces_combined_total() {
        let result = run(
            vec![booking(monday(), "09:00", "mani")],
            DateRange::single(monday()),
            CategoryFilter::All,
        );

        assert_eq!(result, vec![DayAvailability {
            date: monday(),
            slots: vec![
                SlotAvailability { time: time(9, 0), available: 14 },
                SlotAvailability { time: time(10, 0), available: 15 },
            ],
        }]);
    }

    #[test]
    fn test_natural_booking_leaves_artificial_pool_untouched() {
        let result = run(
            vec![booking(monday(), "09:00", "mani")],
            DateRange::single(monday()),
            CategoryFilter::Artificial,
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].slots, vec![
            SlotAvailability { time: time(9, 0), available: 5 },
            SlotAvailability { time: time(10, 0), available: 5 },
        ]);
    }

    #[test]
    fn test_unindexed_service_counts_as_natural() {
        let retired = || vec![booking(monday(), "10:00", "retired-service")];

        let result = run(retired(), DateRange::single(monday()), CategoryFilter::Natural);
        assert_eq!(result[0].slots[1], SlotAvailability { time: time(10, 0), available: 9 });

        let artificial = run(retired(), DateRange::single(monday()), CategoryFilter::Artificial);
        assert_eq!(artificial[0].slots[1].available, 5);
    }

    #[test]
    fn test_overbooked_slot_clamps_and_is_omitted() {
        let overbooked: Vec<_> = (0..12).map(|_| booking(monday(), "09:00", "mani")).collect();

        let natural = run(overbooked.clone(), DateRange::single(monday()), CategoryFilter::Natural);
        assert_eq!(natural[0].slots, vec![SlotAvailability { time: time(10, 0), available: 10 }]);

        let all = run(overbooked, DateRange::single(monday()), CategoryFilter::All);
        assert_eq!(all[0].slots[0], SlotAvailability { time: time(9, 0), available: 5 });
    }

    #[test]
    fn test_day_with_all_slots_exhausted_is_omitted() {
        let mut reservations = Vec::new();
        for at in ["09:00", "10:00"] {
            reservations.extend((0..5).map(|_| booking(monday(), at, "gel")));
        }
        let result = run(reservations, DateRange::single(monday()), CategoryFilter::Artificial);
        assert!(result.is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let result = run(vec![], DateRange::new(monday(), date(2030, 1, 1)), CategoryFilter::All);
        assert!(result.is_empty());
    }

    #[test]
    fn test_unscheduled_weekdays_are_skipped() {
        let january = DateRange::new(date(2030, 1, 1), date(2030, 1, 31));
        let result = run(vec![], january, CategoryFilter::All);
        let dates: Vec<_> = result.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![date(2030, 1, 7), date(2030, 1, 14), date(2030, 1, 21), date(2030, 1, 28)]
        );
    }

    #[test]
    fn test_bookings_outside_schedule_do_not_leak() {
        let result = run(
            vec![booking(monday(), "11:00", "mani"), booking(date(2030, 1, 14), "09:00", "mani")],
            DateRange::single(monday()),
            CategoryFilter::All,
        );
        assert_eq!(result[0].slots[0].available, 15);
        assert_eq!(result[0].slots[1].available, 15);
    }

    #[test]
    fn test_available_never_exceeds_filter_capacity() {
        let capacity = CapacityModel::resolve(Some(3), Some(2));
        let natural_cap = capacity.for_category(ServiceCategory::Natural);
        let artificial_cap = capacity.for_category(ServiceCategory::Artificial);

        for natural in 0..6 {
            for artificial in 0..6 {
                let usage = SlotUsage { natural, artificial };
                let avail = |filter| available_in_slot(capacity, usage, filter);
                assert!(avail(CategoryFilter::Natural) <= natural_cap);
                assert!(avail(CategoryFilter::Artificial) <= artificial_cap);
                assert!(avail(CategoryFilter::All) <= natural_cap + artificial_cap);
            }
        }
    }

    #[test]
    fn test_identical_inputs_give_identical_output() {
        let reservations = vec![
            booking(monday(), "09:00", "gel"),
            booking(monday(), "09:00", "mani"),
            booking(date(2030, 1, 14), "10:00", "gel"),
        ];
        let range = DateRange::new(date(2030, 1, 1), date(2030, 2, 1));
        assert_eq!(
            run(reservations.clone(), range, CategoryFilter::All),
            run(reservations, range, CategoryFilter::All),
        );
    }
}
