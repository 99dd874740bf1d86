use crate::model::ReferenceData;
use anyhow::Result;

/// Where the lookup tables come from. Implementations are read once at
/// startup; the result is validated before any resolver sees it.
#[async_trait::async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Short human readable origin, used in startup logs.
    fn describe(&self) -> String;

    async fn load(&self) -> Result<ReferenceData>;
}

/// Load from `source` and check the table invariants.
pub async fn load_validated(source: &dyn ReferenceSource) -> Result<ReferenceData> {
    let data = source.load().await?;
    data.validate()
        .map_err(|e| e.context(format!("invalid reference data from {}", source.describe())))?;
    Ok(data)
}
