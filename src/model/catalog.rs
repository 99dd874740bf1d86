use serde::{Deserialize, Serialize};

use crate::model::Slug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: Slug,
    pub name: String,
    pub description: String,
    pub growing_regions: Vec<Slug>,
    pub growing_season: GrowingSeason,
    pub ideal_conditions: IdealConditions,
}

/// Start and end month labels, or "Year-round".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowingSeason {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealConditions {
    pub soil_type: String,
    pub temperature: String,
    pub rainfall: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: Slug,
    pub name: String,
    pub top_crops: Vec<Slug>,
    pub climate: String,
}

/// Crop stock offered to companies, priced per quintal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropOffer {
    pub crop: Slug,
    pub name: String,
    pub average_price: u32,
    pub available_stock: u32,
    pub description: String,
    pub delivery_estimate: String,
    pub regions: Vec<String>,
}
