#![recursion_limit = "256"]

pub mod api;
pub mod client;
pub mod config;
pub mod logic;
pub mod model;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;
pub use api::{AppContext, AppState};

// Export resolution types
pub use logic::{
    BuyQuery, BuyQueryParams, FieldErrors, MarketInsightResolver, RecommendationResolver,
    SellQuery, SellQueryParams,
};

// Export all model types
pub use model::*;

// Export store types
pub use store::{CatalogStore, EmbeddedSource, JsonFileSource, ReferenceSource};

use crate::config::AppConfig;

/// Load the reference data named by `config` and assemble the router.
pub async fn create_app(config: &AppConfig) -> anyhow::Result<axum::Router> {
    let source = store::source_from_config(&config.data);
    log::info!("Loading reference data from {}", source.describe());
    let data = store::load_validated(source.as_ref()).await?;
    log::info!(
        "Reference data ready: {} crops, {} regions, {} market insights, {} recommendations",
        data.crops.len(),
        data.regions.len(),
        data.insights.len(),
        data.recommendations.len()
    );

    let state = AppContext::new(data).into_state();
    Ok(routes::build_app(state, config.server.static_dir.as_deref()))
}
