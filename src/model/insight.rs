use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsight {
    pub current_price: u32,
    pub demand: DemandInfo,
    pub price_history: Vec<PricePoint>,
    pub alternatives: Vec<AlternativeOption>,
    pub potential_buyers: Vec<PotentialBuyer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandStatus {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandInfo {
    pub status: DemandStatus,
    pub description: String,
}

/// One month of the price chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub month: String,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeOption {
    pub name: String,
    /// Percent
    pub value_increase: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialBuyer {
    pub name: String,
    /// Kilometres from the seller
    pub distance: u32,
    pub price_per_quintal: u32,
    pub tag: String,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insight_uses_camel_case_fields() {
        let insight = MarketInsight {
            current_price: 2000,
            demand: DemandInfo {
                status: DemandStatus::Medium,
                description: "Standard market conditions".to_string(),
            },
            price_history: vec![PricePoint {
                month: "Dec".to_string(),
                price: 2000,
            }],
            alternatives: vec![AlternativeOption {
                name: "Basic Processing".to_string(),
                value_increase: 10,
                description: "Simple processing to increase value".to_string(),
            }],
            potential_buyers: vec![PotentialBuyer {
                name: "Local Market".to_string(),
                distance: 20,
                price_per_quintal: 2000,
                tag: "General Buyer".to_string(),
                note: "Standard market rates".to_string(),
            }],
        };

        let value = serde_json::to_value(&insight).unwrap();
        assert_eq!(value["currentPrice"], json!(2000));
        assert_eq!(value["demand"]["status"], json!("Medium"));
        assert_eq!(value["priceHistory"][0], json!({"month": "Dec", "price": 2000}));
        assert_eq!(value["alternatives"][0]["valueIncrease"], json!(10));
        assert_eq!(value["potentialBuyers"][0]["pricePerQuintal"], json!(2000));
    }

    #[test]
    fn test_unknown_demand_status_is_rejected() {
        let parsed = serde_json::from_value::<DemandInfo>(json!({
            "status": "Extreme",
            "description": "n/a"
        }));
        assert!(parsed.is_err());
    }
}
