use std::sync::Arc;

use crate::logic::{MarketInsightResolver, RecommendationResolver};
use crate::model::ReferenceData;
use crate::store::CatalogStore;

/// Services shared by every handler. All of them read the same immutable
/// reference data.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub catalog: CatalogStore,
    pub insights: MarketInsightResolver,
    pub recommendations: RecommendationResolver,
}

pub type AppState = Arc<AppContext>;

impl AppContext {
    pub fn new(data: ReferenceData) -> Self {
        let data = Arc::new(data);
        Self {
            catalog: CatalogStore::new(data.clone()),
            insights: MarketInsightResolver::new(data.clone()),
            recommendations: RecommendationResolver::new(data),
        }
    }

    pub fn into_state(self) -> AppState {
        Arc::new(self)
    }
}
