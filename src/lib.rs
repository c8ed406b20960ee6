//! A dashboard for a catalog of sale transactions.
//!
//! The transactions are loaded once from a JSON file and served read-only:
//! a JSON API searches them and totals the sales for a month, and an HTML
//! dashboard shows a searchable, paginated table, monthly statistics and a
//! histogram of prices.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod dashboard;
mod dataset;
mod endpoints;
mod histogram;
mod html;
mod logging;
mod not_found;
mod pagination;
mod query;
mod routing;
mod statistics;
mod transaction;

pub use app_state::AppState;
pub use dashboard::{DEFAULT_MONTH, DashboardQuery, DashboardViewModel};
pub use dataset::{load_transactions, parse_transactions};
pub use histogram::{PriceBucket, price_histogram};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::{PaginationConfig, last_page, next_page, previous_page, visible_rows};
pub use query::{QueryService, TransactionQueries};
pub use routing::build_router;
pub use statistics::{MONTHS, MonthlyStatistics, month_query_value, parse_month_name};
pub use transaction::{Transaction, TransactionId};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// Queries never fail; these errors only occur while loading the dataset at
/// startup.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The dataset file could not be read.
    ///
    /// Callers should pass in the file path and the original error as a string.
    #[error("could not read the dataset \"{0}\": {1}")]
    DatasetUnreadable(String, String),

    /// The dataset is not a JSON array of transactions.
    #[error("the dataset is not a valid list of transactions: {0}")]
    InvalidDataset(String),

    /// Two transactions in the dataset have the same ID.
    #[error("the transaction ID {0} appears more than once in the dataset")]
    DuplicateTransactionId(TransactionId),
}
