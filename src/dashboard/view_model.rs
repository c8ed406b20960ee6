//! UI state for the dashboard and the values derived from it.

use time::Month;

use crate::{
    histogram::{PriceBucket, price_histogram},
    pagination::{last_page, next_page, previous_page, visible_rows},
    query::TransactionQueries,
    statistics::{MonthlyStatistics, month_query_value},
    transaction::Transaction,
};

/// The month selected when the dashboard first loads.
pub const DEFAULT_MONTH: Month = Month::March;

/// The dashboard state: the search term, selected month and current page,
/// plus the data last fetched for them.
///
/// Changing the search term fetches a new transaction list and moves back to
/// page 1. Changing the month fetches new statistics. The two fetches are
/// independent: statistics always cover the whole dataset, not just the
/// search results.
pub struct DashboardViewModel<'a, Q> {
    queries: &'a Q,
    search_term: String,
    selected_month: Month,
    transactions: Vec<Transaction>,
    page_number: usize,
    page_size: usize,
    statistics: MonthlyStatistics,
}

impl<'a, Q: TransactionQueries> DashboardViewModel<'a, Q> {
    /// Create the dashboard in its initial state and fetch the full
    /// transaction list and the statistics for [DEFAULT_MONTH].
    pub fn new(queries: &'a Q, page_size: usize) -> Self {
        let mut view_model = Self {
            queries,
            search_term: String::new(),
            selected_month: DEFAULT_MONTH,
            transactions: Vec::new(),
            page_number: 1,
            page_size: page_size.max(1),
            statistics: MonthlyStatistics::default(),
        };

        view_model.fetch_transactions();
        view_model.fetch_statistics();
        view_model
    }

    /// The current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The month the statistics are for.
    pub fn selected_month(&self) -> Month {
        self.selected_month
    }

    /// The transactions matching the current search term.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The current 1-based page number.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// The number of rows on each page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The number of the last page of the current transactions.
    pub fn last_page(&self) -> usize {
        last_page(self.transactions.len(), self.page_size)
    }

    /// The statistics for the selected month.
    pub fn statistics(&self) -> MonthlyStatistics {
        self.statistics
    }

    /// Replace the search term, fetch the matching transactions and go back to
    /// the first page.
    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.search_term = search_term.into();
        self.fetch_transactions();
    }

    /// Select a month and fetch its statistics.
    pub fn set_selected_month(&mut self, month: Month) {
        self.selected_month = month;
        self.fetch_statistics();
    }

    /// Move to the next page, unless already on the last page.
    pub fn next_page(&mut self) {
        self.page_number = next_page(self.page_number, self.transactions.len(), self.page_size);
    }

    /// Move to the previous page, unless already on the first page.
    pub fn previous_page(&mut self) {
        self.page_number = previous_page(self.page_number);
    }

    /// Jump to `page_number`, clamped to the pages that exist.
    pub fn go_to_page(&mut self, page_number: usize) {
        self.page_number = page_number.clamp(1, self.last_page());
    }

    /// The transactions on the current page.
    pub fn visible_rows(&self) -> &[Transaction] {
        visible_rows(&self.transactions, self.page_number, self.page_size)
    }

    /// The price histogram of the current (search-filtered) transactions.
    pub fn price_histogram(&self) -> [PriceBucket; 10] {
        price_histogram(&self.transactions)
    }

    fn fetch_transactions(&mut self) {
        self.transactions = self.queries.search(&self.search_term);
        self.page_number = 1;
    }

    fn fetch_statistics(&mut self) {
        self.statistics = self
            .queries
            .monthly_statistics(&month_query_value(self.selected_month));
    }
}

impl<Q> Clone for DashboardViewModel<'_, Q> {
    fn clone(&self) -> Self {
        Self {
            queries: self.queries,
            search_term: self.search_term.clone(),
            selected_month: self.selected_month,
            transactions: self.transactions.clone(),
            page_number: self.page_number,
            page_size: self.page_size,
            statistics: self.statistics,
        }
    }
}
