//! Read-only queries over the in-memory transaction dataset.

use std::sync::Arc;

use crate::{
    statistics::{MonthlyStatistics, parse_month_name},
    transaction::Transaction,
};

/// The queries a dashboard needs from a transaction source.
///
/// [QueryService] answers these in-process. Other implementations may fetch
/// the same data from a remote server.
pub trait TransactionQueries {
    /// Get the transactions matching `term`, or every transaction if `term` is
    /// empty.
    fn search(&self, term: &str) -> Vec<Transaction>;

    /// Get the sales totals for the month named `month_name`.
    fn monthly_statistics(&self, month_name: &str) -> MonthlyStatistics;
}

/// Answers queries against a static set of transactions.
///
/// Cloning is cheap, the dataset is shared.
#[derive(Debug, Clone)]
pub struct QueryService {
    transactions: Arc<[Transaction]>,
}

impl QueryService {
    /// Create a query service over `transactions`.
    pub fn new(transactions: Arc<[Transaction]>) -> Self {
        Self { transactions }
    }

    /// The full dataset in its original order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

impl TransactionQueries for QueryService {
    /// A transaction matches if `term` is a case-insensitive substring of its
    /// title or description, or if `term` is exactly the text of its price.
    ///
    /// Results keep the dataset order.
    fn search(&self, term: &str) -> Vec<Transaction> {
        if term.is_empty() {
            return self.transactions.to_vec();
        }

        let lowercase_term = term.to_lowercase();
        let matches: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|transaction| transaction.matches_search(&lowercase_term, term))
            .cloned()
            .collect();

        tracing::debug!(
            "Search for {term:?} matched {} of {} transactions",
            matches.len(),
            self.transactions.len()
        );

        matches
    }

    /// Unrecognized month names give all-zero statistics.
    fn monthly_statistics(&self, month_name: &str) -> MonthlyStatistics {
        match parse_month_name(month_name) {
            Some(month) => MonthlyStatistics::for_month(&self.transactions, month),
            None => {
                tracing::debug!("Unrecognized month {month_name:?}, returning empty statistics");
                MonthlyStatistics::default()
            }
        }
    }
}
