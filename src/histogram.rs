//! Counts transactions in fixed price ranges for the price histogram.

use serde::Serialize;

use crate::transaction::Transaction;

/// A price range of the histogram.
///
/// Ranges are listed by their inclusive upper bound. A price belongs to the
/// first range whose upper bound it does not exceed, so the ranges are
/// contiguous and cover every price, including fractional prices between the
/// whole-number labels such as 100.50.
struct PriceRange {
    label: &'static str,
    upper_bound: Option<f64>,
}

const PRICE_RANGES: [PriceRange; 10] = [
    PriceRange { label: "0-100", upper_bound: Some(100.0) },
    PriceRange { label: "101-200", upper_bound: Some(200.0) },
    PriceRange { label: "201-300", upper_bound: Some(300.0) },
    PriceRange { label: "301-400", upper_bound: Some(400.0) },
    PriceRange { label: "401-500", upper_bound: Some(500.0) },
    PriceRange { label: "501-600", upper_bound: Some(600.0) },
    PriceRange { label: "601-700", upper_bound: Some(700.0) },
    PriceRange { label: "701-800", upper_bound: Some(800.0) },
    PriceRange { label: "801-900", upper_bound: Some(900.0) },
    PriceRange { label: "901-above", upper_bound: None },
];

/// The number of transactions in one price range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBucket {
    /// The price range, e.g. "101-200".
    pub label: &'static str,
    /// How many transactions have a price in the range.
    pub count: usize,
}

/// Count `transactions` in each of the ten price ranges.
///
/// Every transaction is counted exactly once, so the counts always add up to
/// `transactions.len()`.
pub fn price_histogram(transactions: &[Transaction]) -> [PriceBucket; 10] {
    let mut counts = [0usize; 10];

    for transaction in transactions {
        counts[bucket_index(transaction.price)] += 1;
    }

    std::array::from_fn(|index| PriceBucket {
        label: PRICE_RANGES[index].label,
        count: counts[index],
    })
}

fn bucket_index(price: f64) -> usize {
    PRICE_RANGES
        .iter()
        .position(|range| range.upper_bound.is_none_or(|upper_bound| price <= upper_bound))
        // NaN compares false against every bound and falls into the last range
        .unwrap_or(PRICE_RANGES.len() - 1)
}

#[cfg(test)]
mod tests {
    use crate::transaction::test_utils::transaction;

    use super::{PriceBucket, bucket_index, price_histogram};

    #[test]
    fn counts_example_dataset() {
        let transactions = [
            transaction(1, 50.0, true, "2024-03-05T00:00:00"),
            transaction(2, 150.0, false, "2024-03-20T00:00:00"),
            transaction(3, 999.0, true, "2024-07-01T00:00:00"),
        ];

        let got = price_histogram(&transactions);

        let want = [
            ("0-100", 1),
            ("101-200", 1),
            ("201-300", 0),
            ("301-400", 0),
            ("401-500", 0),
            ("501-600", 0),
            ("601-700", 0),
            ("701-800", 0),
            ("801-900", 0),
            ("901-above", 1),
        ]
        .map(|(label, count)| PriceBucket { label, count });
        assert_eq!(got, want);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(bucket_index(0.0), 0);
        assert_eq!(bucket_index(100.0), 0);
        assert_eq!(bucket_index(101.0), 1);
        assert_eq!(bucket_index(900.0), 8);
        assert_eq!(bucket_index(901.0), 9);
    }

    #[test]
    fn fractional_prices_between_labels_fall_in_the_higher_range() {
        assert_eq!(bucket_index(100.5), 1);
        assert_eq!(bucket_index(900.01), 9);
    }

    #[test]
    fn counts_add_up_to_number_of_transactions() {
        let transactions: Vec<_> = (0..250)
            .map(|id| transaction(id, id as f64 * 4.37, id % 2 == 0, "2022-01-01"))
            .collect();

        let got = price_histogram(&transactions);

        assert_eq!(
            got.iter().map(|bucket| bucket.count).sum::<usize>(),
            transactions.len()
        );
    }

    #[test]
    fn empty_input_gives_zero_counts() {
        let got = price_histogram(&[]);

        assert!(got.iter().all(|bucket| bucket.count == 0));
        assert_eq!(got.len(), 10);
    }
}
