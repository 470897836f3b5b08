use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::models::availability::{CategoryFilter, DateRange, DayAvailability};
use crate::domain::ports::{ReservationRepository, ServiceRepository, StudioRepository};
use crate::domain::services::availability::calculate_availability;
use crate::domain::services::capacity::CapacityModel;
use crate::domain::services::category::CategoryIndex;
use crate::domain::services::ledger::BookingLedger;
use crate::domain::services::schedule::WeeklySchedule;
use crate::error::{AvailabilityError, DataSource};

/// Fetches the three inputs of a calculation concurrently and runs the
/// calculator over that snapshot.
pub struct AvailabilityService {
    studio_repo: Arc<dyn StudioRepository>,
    service_repo: Arc<dyn ServiceRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,
}

impl AvailabilityService {
    pub fn new(
        studio_repo: Arc<dyn StudioRepository>,
        service_repo: Arc<dyn ServiceRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self { studio_repo, service_repo, reservation_repo }
    }

    /// `Ok(vec![])` means nothing is available (or the range is inverted);
    /// `Err` means no result could be computed at all.
    pub async fn get_availability(
        &self,
        studio_id: &str,
        range: DateRange,
        filter: CategoryFilter,
    ) -> Result<Vec<DayAvailability>, AvailabilityError> {
        if range.is_empty() {
            debug!("Empty range {} .. {} for studio {}", range.start, range.end, studio_id);
            return Ok(Vec::new());
        }

        let (config, services, reservations) = tokio::join!(
            self.studio_repo.find_config(studio_id),
            self.service_repo.list_active(studio_id),
            self.reservation_repo.list_by_range(studio_id, range.start, range.end),
        );

        let config = config
            .map_err(|error| AvailabilityError::SourceFetch { source_kind: DataSource::StudioConfiguration, error })?
            .ok_or_else(|| AvailabilityError::ConfigurationNotFound { studio_id: studio_id.to_string() })?;
        let services = services
            .map_err(|error| AvailabilityError::SourceFetch { source_kind: DataSource::Services, error })?;
        let reservations = reservations
            .map_err(|error| AvailabilityError::SourceFetch { source_kind: DataSource::Reservations, error })?;

        let schedule = config
            .weekly_schedule
            .as_deref()
            .and_then(|raw| match WeeklySchedule::from_json(raw) {
                Ok(schedule) => Some(schedule),
                Err(e) => {
                    warn!("Studio {} has an undecodable weekly schedule: {}", studio_id, e);
                    None
                }
            })
            .ok_or_else(|| AvailabilityError::ConfigurationNotFound { studio_id: studio_id.to_string() })?;

        let capacity = CapacityModel::resolve(config.capacity_natural, config.capacity_artificial);
        let categories = CategoryIndex::from_services(&services);
        let ledger = BookingLedger::from_reservations(reservations);

        debug!(
            studio_id,
            capacity_natural = capacity.natural,
            capacity_artificial = capacity.artificial,
            services = categories.len(),
            reservations = ledger.len(),
            "Computing availability"
        );

        Ok(calculate_availability(&schedule, capacity, &categories, &ledger, range, filter))
    }
}
