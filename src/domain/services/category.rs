use crate::domain::models::service::{ServiceCategory, StudioService};
use std::collections::HashMap;
use tracing::warn;

/// Category charged for a service that is not in the index, e.g. one that
/// was deactivated after being booked.
pub const UNINDEXED_SERVICE_CATEGORY: ServiceCategory = ServiceCategory::Natural;

/// Lookup from active service id to the resource pool it consumes.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    by_service: HashMap<String, ServiceCategory>,
}

impl CategoryIndex {
    /// Inactive services are left out of the index entirely.
    pub fn from_services(services: &[StudioService]) -> Self {
        let by_service = services
            .iter()
            .filter(|s| s.active)
            .map(|s| {
                let category = ServiceCategory::parse(&s.category).unwrap_or_else(|| {
                    warn!(
                        "Service {} has unknown category '{}', treating as {}",
                        s.id, s.category, UNINDEXED_SERVICE_CATEGORY
                    );
                    UNINDEXED_SERVICE_CATEGORY
                });
                (s.id.clone(), category)
            })
            .collect();

        Self { by_service }
    }

    pub fn lookup(&self, service_id: &str) -> Option<ServiceCategory> {
        self.by_service.get(service_id).copied()
    }

    /// Category used for occupancy accounting; never fails.
    pub fn category_of(&self, service_id: &str) -> ServiceCategory {
        self.lookup(service_id).unwrap_or(UNINDEXED_SERVICE_CATEGORY)
    }

    pub fn len(&self) -> usize {
        self.by_service.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_service.is_empty()
    }
}
