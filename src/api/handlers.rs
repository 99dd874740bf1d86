use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{Html, Json},
};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::logic::{BuyQueryParams, FieldErrors, SellQueryParams};
use crate::model::{Crop, CropOffer, MarketInsight, Recommendation, Region};

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// A query string that cannot be decoded into pairs at all is reported like
// any other invalid parameter.
fn malformed_query(rejection: QueryRejection) -> ApiError {
    let mut errors = FieldErrors::new();
    errors.add("query", rejection.body_text());
    ApiError::Validation(errors)
}

/// `GET /api/farmer/buy`: seed, fertilizer and equipment recommendations.
pub async fn farmer_buy(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Recommendation>, ApiError> {
    let Query(pairs) = query.map_err(malformed_query)?;
    let query = BuyQueryParams::from_pairs(&pairs)?;

    Ok(Json(state.recommendations.resolve(
        &query.crop,
        &query.location,
        query.farm_size,
    )))
}

/// `GET /api/farmer/sell`: price, demand and buyer insight.
pub async fn farmer_sell(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MarketInsight>, ApiError> {
    let Query(pairs) = query.map_err(malformed_query)?;
    let query = SellQueryParams::from_pairs(&pairs)?;

    Ok(Json(state.insights.resolve(
        &query.crop,
        &query.location,
        query.quantity,
    )))
}

pub async fn list_crops(State(state): State<AppState>) -> Json<Vec<Crop>> {
    Json(state.catalog.crops().into_iter().cloned().collect())
}

pub async fn get_crop(
    State(state): State<AppState>,
    Path(crop_id): Path<String>,
) -> Result<Json<Crop>, ApiError> {
    state
        .catalog
        .crop(&crop_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Crop '{}' not found", crop_id)))
}

pub async fn list_regions(State(state): State<AppState>) -> Json<Vec<Region>> {
    Json(state.catalog.regions().into_iter().cloned().collect())
}

pub async fn get_region(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
) -> Result<Json<Region>, ApiError> {
    state
        .catalog
        .region(&region_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Region '{}' not found", region_id)))
}

pub async fn list_offers(State(state): State<AppState>) -> Json<Vec<CropOffer>> {
    Json(state.catalog.offers().into_iter().cloned().collect())
}

// API Documentation handlers
pub async fn get_api_docs() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>AgroLynk API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({ url: '/docs/openapi.json', dom_id: '#swagger-ui' });
        };
    </script>
</body>
</html>
"#,
    )
}

pub async fn get_openapi_spec() -> Json<serde_json::Value> {
    let error_responses = serde_json::json!({
        "400": {
            "description": "Invalid query parameters",
            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorResponse"}}}
        },
        "500": {
            "description": "Internal server error",
            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorResponse"}}}
        }
    });

    let spec = serde_json::json!({
        "openapi": "3.0.3",
        "info": {
            "title": "AgroLynk API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Crop recommendations and market insights for farmers, with fallback to generic defaults for unlisted crop and location pairs."
        },
        "paths": {
            "/api/farmer/buy": {
                "get": {
                    "tags": ["Farmer"],
                    "summary": "Seed, fertilizer and equipment recommendations",
                    "parameters": [
                        {"name": "crop", "in": "query", "required": true, "schema": {"type": "string", "minLength": 1}},
                        {"name": "location", "in": "query", "required": true, "schema": {"type": "string", "minLength": 1}},
                        {"name": "farmSize", "in": "query", "required": true, "schema": {"type": "number", "minimum": 1}}
                    ],
                    "responses": {
                        "200": {"description": "Recommendation"},
                        "400": error_responses["400"],
                        "500": error_responses["500"]
                    }
                }
            },
            "/api/farmer/sell": {
                "get": {
                    "tags": ["Farmer"],
                    "summary": "Price, demand and buyer insight",
                    "parameters": [
                        {"name": "crop", "in": "query", "required": true, "schema": {"type": "string", "minLength": 1}},
                        {"name": "location", "in": "query", "required": true, "schema": {"type": "string", "minLength": 1}},
                        {"name": "quantity", "in": "query", "required": true, "schema": {"type": "number", "minimum": 1}}
                    ],
                    "responses": {
                        "200": {"description": "Market insight"},
                        "400": error_responses["400"],
                        "500": error_responses["500"]
                    }
                }
            },
            "/api/crops": {"get": {"tags": ["Catalog"], "summary": "List crops", "responses": {"200": {"description": "Crops ordered by id"}}}},
            "/api/crops/{id}": {"get": {"tags": ["Catalog"], "summary": "Get a crop", "responses": {"200": {"description": "Crop"}, "404": {"description": "Unknown crop"}}}},
            "/api/regions": {"get": {"tags": ["Catalog"], "summary": "List regions", "responses": {"200": {"description": "Regions ordered by id"}}}},
            "/api/regions/{id}": {"get": {"tags": ["Catalog"], "summary": "Get a region", "responses": {"200": {"description": "Region"}, "404": {"description": "Unknown region"}}}},
            "/api/company/offers": {"get": {"tags": ["Company"], "summary": "Crop stock offered to companies", "responses": {"200": {"description": "Offers ordered by crop"}}}},
            "/health": {"get": {"tags": ["Health"], "summary": "Liveness probe", "responses": {"200": {"description": "Healthy"}}}}
        },
        "components": {
            "schemas": {
                "ErrorResponse": {
                    "type": "object",
                    "required": ["error"],
                    "properties": {
                        "error": {"type": "string"},
                        "details": {
                            "type": "object",
                            "description": "Messages for each invalid field",
                            "additionalProperties": {"type": "array", "items": {"type": "string"}}
                        }
                    }
                }
            }
        }
    });

    Json(spec)
}
