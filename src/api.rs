//! JSON endpoints for searching transactions and getting monthly statistics.

use axum::{
    Json,
    extract::{FromRef, Path, Query, State},
};
use serde::Deserialize;

use crate::{
    AppState,
    query::{QueryService, TransactionQueries},
    statistics::MonthlyStatistics,
    transaction::Transaction,
};

/// The state needed by the transaction API.
#[derive(Debug, Clone)]
pub struct TransactionApiState {
    /// The queries over the transaction dataset.
    pub queries: QueryService,
}

impl FromRef<AppState> for TransactionApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            queries: state.queries.clone(),
        }
    }
}

/// The query string for listing transactions.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Only list transactions matching this term.
    #[serde(default)]
    pub search: Option<String>,
}

/// List the transactions matching the `search` query parameter, or all of
/// them if it is missing or empty.
pub async fn get_transactions(
    State(state): State<TransactionApiState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Transaction>> {
    let term = query.search.unwrap_or_default();

    Json(state.queries.search(&term))
}

/// Get the sales totals for the month named in the path, e.g.
/// `/transaction/march`.
///
/// Unknown month names give zero totals rather than an error.
pub async fn get_monthly_statistics(
    State(state): State<TransactionApiState>,
    Path(month): Path<String>,
) -> Json<MonthlyStatistics> {
    Json(state.queries.monthly_statistics(&month))
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        endpoints,
        query::QueryService,
        statistics::MonthlyStatistics,
        transaction::{Transaction, test_utils::transaction},
    };

    use super::{TransactionApiState, get_monthly_statistics, get_transactions};

    fn get_test_server() -> TestServer {
        let mut backpack = transaction(3, 999.0, true, "2024-07-01T00:00:00");
        backpack.title = "Fjallraven Foldsack No. 1 Backpack".to_owned();

        let transactions: Vec<Transaction> = vec![
            transaction(1, 50.0, true, "2024-03-05T00:00:00"),
            transaction(2, 150.0, false, "2024-03-20T00:00:00"),
            backpack,
        ];
        let state = TransactionApiState {
            queries: QueryService::new(transactions.into()),
        };
        let app = Router::new()
            .route(endpoints::TRANSACTIONS_API, get(get_transactions))
            .route(endpoints::MONTHLY_STATISTICS_API, get(get_monthly_statistics))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn ids(transactions: &[Transaction]) -> Vec<i64> {
        transactions.iter().map(|transaction| transaction.id).collect()
    }

    #[tokio::test]
    async fn lists_all_transactions_without_search() {
        let server = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        assert_eq!(ids(&response.json::<Vec<Transaction>>()), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn empty_search_lists_all_transactions() {
        let server = get_test_server();

        let response = server
            .get(endpoints::TRANSACTIONS_API)
            .add_query_param("search", "")
            .await;

        assert_eq!(ids(&response.json::<Vec<Transaction>>()), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn search_filters_transactions() {
        let server = get_test_server();

        let response = server
            .get(endpoints::TRANSACTIONS_API)
            .add_query_param("search", "BACKPACK")
            .await;

        assert_eq!(ids(&response.json::<Vec<Transaction>>()), vec![3]);
    }

    #[tokio::test]
    async fn transactions_use_camel_case_fields() {
        let server = get_test_server();

        let response = server
            .get(endpoints::TRANSACTIONS_API)
            .add_query_param("search", "150")
            .await;

        let body: serde_json::Value = response.json();
        assert_eq!(body[0]["dateOfSale"], json!("2024-03-20T00:00:00"));
        assert_eq!(body[0]["sold"], json!(false));
    }

    #[tokio::test]
    async fn gets_monthly_statistics() {
        let server = get_test_server();

        let response = server.get("/transaction/March").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<MonthlyStatistics>(),
            MonthlyStatistics {
                total_sale_amount: 200.0,
                total_sold_items: 1,
                total_unsold_items: 1,
            }
        );
    }

    #[tokio::test]
    async fn unknown_month_gives_zero_statistics() {
        let server = get_test_server();

        let response = server.get("/transaction/smarch").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "totalSaleAmount": 0.0,
            "totalSoldItems": 0,
            "totalUnsoldItems": 0,
        }));
    }
}
