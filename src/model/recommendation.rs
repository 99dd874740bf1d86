use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub seeds: Vec<SeedItem>,
    pub fertilizers: Vec<FertilizerItem>,
    pub equipment: Vec<EquipmentItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    /// Five-star string such as "★★★★☆"
    pub rating: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerItem {
    pub name: String,
    pub price: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub name: String,
    /// e.g. "Rental Available", "Subsidy Available"
    pub availability: String,
    pub description: String,
}

impl SeedItem {
    /// Number of filled stars in the rating string.
    pub fn stars(&self) -> usize {
        self.rating.chars().filter(|c| *c == '★').count()
    }
}
