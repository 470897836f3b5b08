use std::sync::Arc;
use crate::domain::ports::{ReservationRepository, ServiceRepository, StudioRepository};
use crate::domain::services::availability_service::AvailabilityService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub availability_service: Arc<AvailabilityService>,
}

impl AppState {
    pub fn new(
        config: Config,
        studio_repo: Arc<dyn StudioRepository>,
        service_repo: Arc<dyn ServiceRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
    ) -> Self {
        let availability_service = Arc::new(AvailabilityService::new(
            studio_repo,
            service_repo,
            reservation_repo,
        ));

        Self {
            config,
            availability_service,
        }
    }
}
