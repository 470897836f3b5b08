use crate::domain::models::service::ServiceCategory;

pub const DEFAULT_CAPACITY_NATURAL: u32 = 10;
pub const DEFAULT_CAPACITY_ARTIFICIAL: u32 = 5;

/// Per-slot capacity of each resource category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityModel {
    pub natural: u32,
    pub artificial: u32,
}

impl Default for CapacityModel {
    fn default() -> Self {
        Self {
            natural: DEFAULT_CAPACITY_NATURAL,
            artificial: DEFAULT_CAPACITY_ARTIFICIAL,
        }
    }
}

impl CapacityModel {
    /// Unset, zero, negative or out-of-range values fall back to the defaults.
    pub fn resolve(natural: Option<i64>, artificial: Option<i64>) -> Self {
        Self {
            natural: positive_or(natural, DEFAULT_CAPACITY_NATURAL),
            artificial: positive_or(artificial, DEFAULT_CAPACITY_ARTIFICIAL),
        }
    }

    pub fn for_category(&self, category: ServiceCategory) -> u32 {
        match category {
            ServiceCategory::Natural => self.natural,
            ServiceCategory::Artificial => self.artificial,
        }
    }
}

fn positive_or(value: Option<i64>, default: u32) -> u32 {
    value
        .filter(|v| *v > 0)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_use_defaults() {
        assert_eq!(CapacityModel::resolve(None, None), CapacityModel { natural: 10, artificial: 5 });
    }

    #[test]
    fn test_unusable_values_use_defaults() {
        assert_eq!(CapacityModel::resolve(Some(0), Some(-3)), CapacityModel::default());
        assert_eq!(CapacityModel::resolve(Some(i64::MAX), None).natural, DEFAULT_CAPACITY_NATURAL);
    }

    #[test]
    fn test_configured_values_are_kept() {
        let capacity = CapacityModel::resolve(Some(4), Some(2));
        assert_eq!(capacity.for_category(ServiceCategory::Natural), 4);
        assert_eq!(capacity.for_category(ServiceCategory::Artificial), 2);
    }
}
