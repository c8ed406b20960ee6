//! Month-scoped sales statistics.

use serde::{Deserialize, Serialize};
use time::Month;

use crate::transaction::Transaction;

/// The twelve months in calendar order, indexed from January = 0.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Resolve a full English month name, ignoring case, e.g. "march" or "MARCH".
///
/// Returns `None` for anything else, including abbreviations such as "mar".
pub fn parse_month_name(name: &str) -> Option<Month> {
    MONTHS
        .into_iter()
        .find(|month| month.to_string().eq_ignore_ascii_case(name))
}

/// The lowercase name used for a month in URLs and API paths, e.g. "march".
pub fn month_query_value(month: Month) -> String {
    month.to_string().to_lowercase()
}

/// Sales totals for the transactions in one calendar month across all years.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatistics {
    /// The sum of the prices of the transactions in the month.
    pub total_sale_amount: f64,
    /// The number of transactions in the month that were sold.
    pub total_sold_items: usize,
    /// The number of transactions in the month that were not sold.
    pub total_unsold_items: usize,
}

impl MonthlyStatistics {
    /// Aggregate the transactions whose sale date falls in `month`, in any year.
    ///
    /// Transactions with a malformed sale date never match.
    pub fn for_month(transactions: &[Transaction], month: Month) -> Self {
        transactions
            .iter()
            .filter(|transaction| transaction.sale_month() == Some(month))
            .fold(Self::default(), |mut statistics, transaction| {
                statistics.total_sale_amount += transaction.price;

                if transaction.sold {
                    statistics.total_sold_items += 1;
                } else {
                    statistics.total_unsold_items += 1;
                }

                statistics
            })
    }
}
