use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::{
    is_slug, Crop, CropOffer, LookupTable, MarketInsight, Recommendation, Region, Slug,
};

/// Months of price history every market insight carries.
pub const PRICE_HISTORY_MONTHS: usize = 6;

/// Everything the service answers from. Loaded once at startup and shared
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub crops: HashMap<Slug, Crop>,
    #[serde(default)]
    pub regions: HashMap<Slug, Region>,
    #[serde(default)]
    pub offers: HashMap<Slug, CropOffer>,
    pub insights: LookupTable<MarketInsight>,
    pub recommendations: LookupTable<Recommendation>,
}

impl ReferenceData {
    /// Check the invariants the resolvers rely on: slug keys, ids matching
    /// their keys, and fully populated records (defaults included).
    pub fn validate(&self) -> Result<()> {
        for (key, crop) in &self.crops {
            check_key("crop", key, &crop.id)?;
        }
        for (key, region) in &self.regions {
            check_key("region", key, &region.id)?;
        }
        for (key, offer) in &self.offers {
            check_key("offer", key, &offer.crop)?;
        }

        check_insight("default", &self.insights.default)?;
        for (crop, location, insight) in self.insights.entries() {
            check_pair(crop, location)?;
            check_insight(&format!("{}/{}", crop, location), insight)?;
        }

        check_recommendation("default", &self.recommendations.default)?;
        for (crop, location, recommendation) in self.recommendations.entries() {
            check_pair(crop, location)?;
            check_recommendation(&format!("{}/{}", crop, location), recommendation)?;
        }

        Ok(())
    }
}

fn check_key(kind: &str, key: &str, id: &str) -> Result<()> {
    if !is_slug(key) {
        bail!("{} key '{}' is not a lowercase slug", kind, key);
    }
    if key != id {
        bail!("{} key '{}' does not match its id '{}'", kind, key, id);
    }
    Ok(())
}

fn check_pair(crop: &str, location: &str) -> Result<()> {
    if !is_slug(crop) || !is_slug(location) {
        bail!(
            "lookup key '{}/{}' must be two lowercase slugs",
            crop,
            location
        );
    }
    Ok(())
}

fn check_insight(label: &str, insight: &MarketInsight) -> Result<()> {
    if insight.price_history.len() != PRICE_HISTORY_MONTHS {
        bail!(
            "market insight {} has {} months of price history, expected {}",
            label,
            insight.price_history.len(),
            PRICE_HISTORY_MONTHS
        );
    }
    if insight.alternatives.is_empty() {
        bail!("market insight {} has no alternatives", label);
    }
    if insight.potential_buyers.is_empty() {
        bail!("market insight {} has no potential buyers", label);
    }
    Ok(())
}

fn check_recommendation(label: &str, recommendation: &Recommendation) -> Result<()> {
    if recommendation.seeds.is_empty() {
        bail!("recommendation {} has no seeds", label);
    }
    if recommendation.fertilizers.is_empty() {
        bail!("recommendation {} has no fertilizers", label);
    }
    if recommendation.equipment.is_empty() {
        bail!("recommendation {} has no equipment", label);
    }
    Ok(())
}
