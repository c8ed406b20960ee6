//! Application router configuration.

use axum::{Router, middleware, routing::get};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::{
    AppState,
    api::{get_monthly_statistics, get_transactions},
    dashboard::get_dashboard_page,
    endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// The JSON API allows requests from any origin so that a separately hosted
/// frontend can use it.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(endpoints::TRANSACTIONS_API, get(get_transactions))
        .route(
            endpoints::MONTHLY_STATISTICS_API,
            get(get_monthly_statistics),
        )
        .layer(CorsLayer::permissive());

    Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{
        AppState,
        endpoints,
        pagination::PaginationConfig,
        transaction::{Transaction, test_utils::transaction},
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let transactions: Arc<[Transaction]> = vec![
            transaction(1, 50.0, true, "2024-03-05T00:00:00"),
            transaction(2, 150.0, false, "2024-03-20T00:00:00"),
        ]
        .into();
        let state = AppState::new(transactions, PaginationConfig::default());

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn serves_dashboard() {
        let server = get_test_server();

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Transaction Dashboard"));
    }

    #[tokio::test]
    async fn serves_monthly_statistics() {
        let server = get_test_server();

        server
            .get("/transaction/march")
            .await
            .assert_json(&serde_json::json!({
                "totalSaleAmount": 200.0,
                "totalSoldItems": 1,
                "totalUnsoldItems": 1,
            }));
    }

    #[tokio::test]
    async fn api_allows_cross_origin_requests() {
        let server = get_test_server();

        let response = server
            .get(endpoints::TRANSACTIONS_API)
            .add_header("Origin", "http://localhost:3000")
            .await;

        response.assert_status_ok();
        assert!(
            response
                .headers()
                .contains_key("access-control-allow-origin"),
            "missing CORS header in {:?}",
            response.headers()
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/does/not/exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
