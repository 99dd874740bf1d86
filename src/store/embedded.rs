use anyhow::{Context, Result};

use crate::model::ReferenceData;
use crate::store::traits::ReferenceSource;

const REFERENCE_JSON: &str = include_str!("../../data/reference.json");

/// Parse the tables compiled into the binary.
pub fn embedded_reference_data() -> Result<ReferenceData> {
    serde_json::from_str(REFERENCE_JSON).context("failed to parse embedded reference data")
}

/// The built-in crop, region, market and recommendation tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedSource;

#[async_trait::async_trait]
impl ReferenceSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded tables".to_string()
    }

    async fn load(&self) -> Result<ReferenceData> {
        embedded_reference_data()
    }
}
