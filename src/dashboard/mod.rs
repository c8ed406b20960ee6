//! Dashboard module
//!
//! Provides the page showing the searchable transaction table, the monthly
//! sales statistics and the price histogram.

mod charts;
mod handlers;
mod tables;
mod view_model;

pub use handlers::{DashboardQuery, get_dashboard_page};
pub use view_model::{DEFAULT_MONTH, DashboardViewModel};
