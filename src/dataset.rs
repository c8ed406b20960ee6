//! Loads the static transaction dataset from a JSON file.

use std::{collections::HashSet, fs, path::Path, sync::Arc};

use crate::{Error, transaction::Transaction};

/// Read the transactions from the JSON array at `path`.
///
/// The returned slice is shared read-only for the rest of the process.
/// Records with malformed sale dates are kept; they are excluded from monthly
/// statistics when queried.
///
/// # Errors
/// Returns an error if the file cannot be read, is not a JSON array of
/// transactions, or contains two transactions with the same ID.
pub fn load_transactions(path: &Path) -> Result<Arc<[Transaction]>, Error> {
    let text = fs::read_to_string(path).map_err(|error| {
        tracing::error!("could not read dataset {}: {error}", path.display());
        Error::DatasetUnreadable(path.display().to_string(), error.to_string())
    })?;

    let transactions = parse_transactions(&text)?;
    tracing::info!(
        "Loaded {} transactions from {}",
        transactions.len(),
        path.display()
    );

    Ok(transactions)
}

/// Parse a JSON array of transactions and check that the IDs are unique.
pub fn parse_transactions(json: &str) -> Result<Arc<[Transaction]>, Error> {
    let transactions: Vec<Transaction> =
        serde_json::from_str(json).map_err(|error| Error::InvalidDataset(error.to_string()))?;

    let mut seen_ids = HashSet::with_capacity(transactions.len());
    if let Some(duplicate) = transactions
        .iter()
        .find(|transaction| !seen_ids.insert(transaction.id))
    {
        return Err(Error::DuplicateTransactionId(duplicate.id));
    }

    let malformed_dates = transactions
        .iter()
        .filter(|transaction| transaction.sale_date().is_none())
        .count();
    if malformed_dates > 0 {
        tracing::warn!(
            "{malformed_dates} transactions have a malformed sale date and will not count towards monthly statistics"
        );
    }

    Ok(transactions.into())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::Error;

    use super::{load_transactions, parse_transactions};

    const TWO_TRANSACTIONS: &str = r#"[
        {
            "id": 1,
            "title": "Fjallraven Foldsack No. 1 Backpack",
            "price": 329.85,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "sold": false,
            "dateOfSale": "2021-11-27T20:29:54+05:30"
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 44.6,
            "description": "Slim-fitting style",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
            "sold": false,
            "dateOfSale": "2021-10-27T20:29:54+05:30"
        }
    ]"#;

    #[test]
    fn parses_transactions_in_order() {
        let got = parse_transactions(TWO_TRANSACTIONS).unwrap();

        let ids: Vec<_> = got.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = TWO_TRANSACTIONS.replace("\"id\": 2", "\"id\": 1");

        let got = parse_transactions(&json);

        assert_eq!(got.unwrap_err(), Error::DuplicateTransactionId(1));
    }

    #[test]
    fn rejects_invalid_json() {
        let got = parse_transactions("{\"id\": 1}");

        assert!(matches!(got, Err(Error::InvalidDataset(_))));
    }

    #[test]
    fn keeps_records_with_malformed_dates() {
        let json = TWO_TRANSACTIONS.replace("2021-10-27T20:29:54+05:30", "sometime");

        let got = parse_transactions(&json).unwrap();

        assert_eq!(got.len(), 2);
        assert_eq!(got[1].sale_date(), None);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_TRANSACTIONS.as_bytes()).unwrap();

        let got = load_transactions(file.path()).unwrap();

        assert_eq!(got.len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let got = load_transactions(&path);

        assert!(matches!(got, Err(Error::DatasetUnreadable(_, _))));
    }
}
