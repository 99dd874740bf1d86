use std::sync::Arc;

use crate::model::{MarketInsight, ReferenceData};

/// Price, demand and buyer data for a crop sold from a location.
#[derive(Debug, Clone)]
pub struct MarketInsightResolver {
    data: Arc<ReferenceData>,
}

impl MarketInsightResolver {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }

    /// Resolve the insight for `(crop, location)`, or the generic default when
    /// the pair is not in the table. `quantity` (quintals) is validated upstream
    /// and does not change the result.
    pub fn resolve(&self, crop: &str, location: &str, _quantity: f64) -> MarketInsight {
        let table = &self.data.insights;
        if !table.contains(crop, location) {
            log::debug!(
                "no market insight for crop '{}' at '{}', using default",
                crop,
                location
            );
        }
        table.get(crop, location).clone()
    }
}
