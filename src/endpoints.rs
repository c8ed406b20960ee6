//! The API endpoints URIs.

/// The dashboard page with the transaction table, statistics and chart.
pub const DASHBOARD_VIEW: &str = "/";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to list and search transactions.
pub const TRANSACTIONS_API: &str = "/transaction";
/// The route to get the sales statistics for a month, e.g. `/transaction/march`.
pub const MONTHLY_STATISTICS_API: &str = "/transaction/{month}";
