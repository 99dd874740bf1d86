use itertools::Itertools;
use std::sync::Arc;

use crate::model::{Crop, CropOffer, ReferenceData, Region};

/// Read-only view over the crop, region and offer reference tables.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    data: Arc<ReferenceData>,
}

impl CatalogStore {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }

    pub fn crop(&self, id: &str) -> Option<&Crop> {
        self.data.crops.get(id)
    }

    /// All crops ordered by id.
    pub fn crops(&self) -> Vec<&Crop> {
        self.data
            .crops
            .values()
            .sorted_by(|a, b| a.id.cmp(&b.id))
            .collect()
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.data.regions.get(id)
    }

    /// All regions ordered by id.
    pub fn regions(&self) -> Vec<&Region> {
        self.data
            .regions
            .values()
            .sorted_by(|a, b| a.id.cmp(&b.id))
            .collect()
    }

    /// All company offers ordered by crop id.
    pub fn offers(&self) -> Vec<&CropOffer> {
        self.data
            .offers
            .values()
            .sorted_by(|a, b| a.crop.cmp(&b.crop))
            .collect()
    }
}
