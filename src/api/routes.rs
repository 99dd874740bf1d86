use axum::{routing::get, Router};
use std::path::Path;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::error::handle_panic;
use crate::api::handlers;
use crate::api::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // API Documentation
        .route("/docs", get(handlers::get_api_docs))
        .route("/docs/openapi.json", get(handlers::get_openapi_spec))
        // Farmer lookups
        .route("/api/farmer/buy", get(handlers::farmer_buy))
        .route("/api/farmer/sell", get(handlers::farmer_sell))
        // Reference catalog
        .route("/api/crops", get(handlers::list_crops))
        .route("/api/crops/:crop_id", get(handlers::get_crop))
        .route("/api/regions", get(handlers::list_regions))
        .route("/api/regions/:region_id", get(handlers::get_region))
        .route("/api/company/offers", get(handlers::list_offers))
}

/// The complete application: routes bound to `state`, the browser client
/// served from `static_dir` when given, and panics mapped to opaque 500s.
pub fn build_app(state: AppState, static_dir: Option<&str>) -> Router {
    serve_routes(create_router(), state, static_dir)
}

fn serve_routes(routes: Router<AppState>, state: AppState, static_dir: Option<&str>) -> Router {
    let router = routes.with_state(state);

    let router = match static_dir {
        Some(dir) => {
            // Unknown paths get the client's index so client-side routing works
            let index = Path::new(dir).join("index.html");
            router.fallback_service(ServeDir::new(dir).not_found_service(ServeFile::new(index)))
        }
        None => router,
    };

    router.layer(CatchPanicLayer::custom(handle_panic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AppContext;
    use crate::store::embedded_reference_data;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppContext::new(embedded_reference_data().unwrap()).into_state();
        build_app(state, None)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn detail_fields(body: &Value) -> Vec<String> {
        body["details"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    #[tokio::test]
    async fn test_sell_wheat_punjab() {
        let (status, body) =
            get_json(app(), "/api/farmer/sell?crop=wheat&location=punjab&quantity=50").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currentPrice"], 2450);
        assert_eq!(body["demand"]["status"], "High");
        let history = body["priceHistory"].as_array().unwrap();
        assert_eq!(history.len(), 6);
        assert_eq!(history[5], serde_json::json!({"month": "Dec", "price": 2450}));
    }

    #[tokio::test]
    async fn test_buy_corn_andhra() {
        let (status, body) =
            get_json(app(), "/api/farmer/buy?crop=corn&location=andhra&farmSize=5").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["seeds"][0]["name"]
            .as_str()
            .unwrap()
            .starts_with("NAH-1137"));
    }

    #[tokio::test]
    async fn test_buy_unknown_pair_returns_default() {
        let (status, body) =
            get_json(app(), "/api/farmer/buy?crop=soy&location=gujarat&farmSize=10").await;
        assert_eq!(status, StatusCode::OK);
        let expected = serde_json::to_value(
            embedded_reference_data().unwrap().recommendations.default,
        )
        .unwrap();
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn test_buy_rejects_each_invalid_field() {
        let cases = [
            ("/api/farmer/buy?crop=&location=punjab&farmSize=5", "crop"),
            ("/api/farmer/buy?crop=wheat&location=&farmSize=5", "location"),
            ("/api/farmer/buy?crop=wheat&location=punjab&farmSize=0", "farmSize"),
            ("/api/farmer/buy?crop=wheat&location=punjab", "farmSize"),
        ];
        for (uri, field) in cases {
            let (status, body) = get_json(app(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["error"], "Invalid query parameters");
            assert_eq!(detail_fields(&body), vec![field.to_string()], "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_sell_rejects_zero_quantity() {
        let (status, body) =
            get_json(app(), "/api/farmer/sell?crop=wheat&location=punjab&quantity=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail_fields(&body), vec!["quantity".to_string()]);
    }

    #[tokio::test]
    async fn test_sell_reports_all_invalid_fields() {
        let (status, body) = get_json(app(), "/api/farmer/sell").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            detail_fields(&body),
            vec!["crop".to_string(), "location".to_string(), "quantity".to_string()]
        );
    }

    #[tokio::test]
    async fn test_repeated_parameter_is_a_validation_error() {
        let (status, body) = get_json(
            app(),
            "/api/farmer/sell?crop=wheat&crop=corn&location=punjab&quantity=5",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail_fields(&body), vec!["crop".to_string()]);
        assert_eq!(body["details"]["crop"][0], "Expected a single value, received 2");
    }

    #[tokio::test]
    async fn test_repeated_parameter_reported_with_other_invalid_fields() {
        let (status, body) = get_json(
            app(),
            "/api/farmer/sell?crop=wheat&crop=corn&location=&quantity=0",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            detail_fields(&body),
            vec!["crop".to_string(), "location".to_string(), "quantity".to_string()]
        );
        assert!(!body.to_string().contains("deserialize"));
    }

    #[tokio::test]
    async fn test_catalog_routes() {
        let (status, body) = get_json(app(), "/api/crops").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["id"], "coconut");

        let (status, body) = get_json(app(), "/api/crops/wheat").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["growingSeason"]["start"], "November");

        let (status, body) = get_json(app(), "/api/crops/soy").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Crop 'soy' not found");

        let (status, body) = get_json(app(), "/api/regions/punjab").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["topCrops"][0], "wheat");

        let (status, _) = get_json(app(), "/api/regions/gujarat").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = get_json(app(), "/api/company/offers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[2]["averagePrice"], 2200);
    }

    #[tokio::test]
    async fn test_health_and_docs() {
        let (status, body) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = get_json(app(), "/docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/farmer/buy"].is_object());
    }

    async fn panicking_handler() -> &'static str {
        panic!("secret internals")
    }

    #[tokio::test]
    async fn test_panicking_handler_becomes_opaque_500() {
        let state = AppContext::new(embedded_reference_data().unwrap()).into_state();
        let routes = create_router().route("/boom", get(panicking_handler));
        let app = serve_routes(routes, state, None);

        let (status, body) = get_json(app, "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Internal server error"}));
    }
}
