//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::{pagination::PaginationConfig, query::QueryService, transaction::Transaction};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The queries over the transaction dataset.
    pub queries: QueryService,

    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl AppState {
    /// Create a new [AppState] serving `transactions`.
    pub fn new(transactions: Arc<[Transaction]>, pagination_config: PaginationConfig) -> Self {
        Self {
            queries: QueryService::new(transactions),
            pagination_config,
        }
    }
}
