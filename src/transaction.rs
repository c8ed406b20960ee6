//! The sale transaction record and the predicates used to query it.

use serde::{Deserialize, Serialize};
use time::{Date, Month, format_description::BorrowedFormatItem, macros::format_description};

/// The unique identifier of a transaction in the dataset.
pub type TransactionId = i64;

const SALE_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// A single sale record.
///
/// Transactions are loaded once at startup and are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The unique ID of the transaction.
    pub id: TransactionId,
    /// The name of the product that was sold.
    pub title: String,
    /// The price the product is listed at.
    pub price: f64,
    /// A text description of the product.
    pub description: String,
    /// The product category, e.g. "electronics".
    pub category: String,
    /// A URL to an image of the product.
    pub image: String,
    /// Whether the product has been sold.
    pub sold: bool,
    /// When the sale happened as an ISO 8601 date-time string, e.g.
    /// "2021-11-27T20:29:54+05:30".
    ///
    /// The string is kept as it appears in the dataset so that records with
    /// malformed dates can still be listed.
    pub date_of_sale: String,
}

impl Transaction {
    /// The calendar date of the sale, ignoring any time component.
    ///
    /// Returns `None` if the date portion of `date_of_sale` is not a valid
    /// `YYYY-MM-DD` date.
    pub fn sale_date(&self) -> Option<Date> {
        let date_part = self
            .date_of_sale
            .split_once('T')
            .map_or(self.date_of_sale.as_str(), |(date, _)| date);

        Date::parse(date_part, SALE_DATE_FORMAT).ok()
    }

    /// The month the sale happened in, regardless of year.
    pub fn sale_month(&self) -> Option<Month> {
        self.sale_date().map(|date| date.month())
    }

    /// Whether this transaction matches a search term.
    ///
    /// `lowercase_term` must already be lowercase. `raw_term` is the term as
    /// the user typed it and is compared against the price text verbatim, so
    /// "44.6" matches a price of 44.6 but "44.60" does not.
    pub(crate) fn matches_search(&self, lowercase_term: &str, raw_term: &str) -> bool {
        self.title.to_lowercase().contains(lowercase_term)
            || self.description.to_lowercase().contains(lowercase_term)
            || self.price.to_string() == raw_term
    }
}


#[cfg(test)]
mod tests {
    use time::{Month, macros::date};

    use super::{Transaction, test_utils::transaction};

    #[test]
    fn sale_date_ignores_time_and_offset() {
        let got = transaction(1, 10.0, true, "2021-11-27T20:29:54+05:30").sale_date();

        assert_eq!(got, Some(date!(2021 - 11 - 27)));
    }

    #[test]
    fn sale_date_accepts_plain_date() {
        let got = transaction(1, 10.0, true, "2022-03-05").sale_month();

        assert_eq!(got, Some(Month::March));
    }

    #[test]
    fn malformed_sale_date_has_no_month() {
        for date_of_sale in ["", "yesterday", "2022-13-01T00:00:00", "2022/03/05"] {
            let got = transaction(1, 10.0, true, date_of_sale).sale_month();

            assert_eq!(got, None, "want no month for {date_of_sale:?}");
        }
    }

    #[test]
    fn search_matches_title_and_description_case_insensitively() {
        let mut want = transaction(1, 10.0, true, "2022-03-05");
        want.title = "Mens Cotton Jacket".to_owned();
        want.description = "Great outerwear jackets for Spring".to_owned();

        assert!(want.matches_search("cotton", "COTTON"));
        assert!(want.matches_search("spring", "Spring"));
        assert!(!want.matches_search("laptop", "laptop"));
    }

    #[test]
    fn search_compares_price_text_verbatim() {
        let want = transaction(1, 44.6, true, "2022-03-05");

        assert!(want.matches_search("44.6", "44.6"));
        assert!(!want.matches_search("44.60", "44.60"));
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "id": 7,
            "title": "Solid Gold Petite Micropave",
            "price": 168,
            "description": "Satisfaction Guaranteed.",
            "category": "jewelery",
            "image": "https://fakestoreapi.com/img/61sbMiUnoGL._AC_UL640_QL65_ML3_.jpg",
            "sold": false,
            "dateOfSale": "2022-07-27T20:29:54+05:30"
        }"#;

        let got: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(got.id, 7);
        assert_eq!(got.price, 168.0);
        assert!(!got.sold);
        assert_eq!(got.sale_month(), Some(Month::July));
    }
}
