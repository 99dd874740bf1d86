use std::sync::Arc;

use crate::model::{Recommendation, ReferenceData};

/// Seed, fertilizer and equipment suggestions for a crop grown in a location.
#[derive(Debug, Clone)]
pub struct RecommendationResolver {
    data: Arc<ReferenceData>,
}

impl RecommendationResolver {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }

    /// Resolve the recommendation for `(crop, location)`, or the generic
    /// default. `farm_size` (acres) does not change the result.
    pub fn resolve(&self, crop: &str, location: &str, _farm_size: f64) -> Recommendation {
        let table = &self.data.recommendations;
        if !table.contains(crop, location) {
            log::debug!(
                "no recommendation for crop '{}' at '{}', using default",
                crop,
                location
            );
        }
        table.get(crop, location).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::embedded_reference_data;

    fn resolver() -> RecommendationResolver {
        RecommendationResolver::new(Arc::new(embedded_reference_data().unwrap()))
    }

    #[test]
    fn test_corn_andhra() {
        let recommendation = resolver().resolve("corn", "andhra", 5.0);
        assert!(recommendation.seeds[0].name.starts_with("NAH-1137"));
        assert_eq!(recommendation.fertilizers[0].name, "NPK 12-32-16 (Starter)");
        assert_eq!(recommendation.fertilizers[0].price, 1300);
        assert_eq!(recommendation.equipment[0].availability, "Subsidy Available");
    }

    #[test]
    fn test_golden_first_seeds() {
        let resolver = resolver();
        let expected = [
            ("wheat", "punjab", "HD-291 (High Yield Variety)"),
            ("wheat", "andhra", "HD-2967 (Heat Resistant)"),
            ("corn", "punjab", "PMH-1 (High Yield Hybrid)"),
            ("corn", "andhra", "NAH-1137 (Heat Tolerant)"),
            ("coconut", "punjab", "West Coast Tall (Adaptable)"),
            ("coconut", "andhra", "East Coast Tall (Regional)"),
        ];
        for (crop, location, seed) in expected {
            let recommendation = resolver.resolve(crop, location, 1.0);
            assert_eq!(recommendation.seeds[0].name, seed);
            assert_eq!(recommendation.seeds.len(), 2);
            assert_eq!(recommendation.fertilizers.len(), 2);
            assert_eq!(recommendation.equipment.len(), 2);
        }
    }

    #[test]
    fn test_unknown_pair_uses_default() {
        let recommendation = resolver().resolve("soy", "gujarat", 10.0);
        assert_eq!(recommendation.seeds.len(), 1);
        assert_eq!(recommendation.seeds[0].name, "Generic Seed Variety");
        assert_eq!(recommendation.seeds[0].stars(), 3);
        assert_eq!(recommendation.fertilizers[0].name, "Standard NPK Mix");
        assert_eq!(recommendation.fertilizers[0].price, 1000);
        assert_eq!(recommendation.equipment[0].name, "Standard Tractor");
        assert_eq!(recommendation.equipment[0].availability, "Rental Available");
    }

    #[test]
    fn test_known_crop_unknown_location_uses_default() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve("coconut", "kerala", 3.0),
            resolver.resolve("soy", "gujarat", 3.0)
        );
    }

    #[test]
    fn test_farm_size_does_not_change_result() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve("wheat", "punjab", 1.0),
            resolver.resolve("wheat", "punjab", 250.5)
        );
    }
}
