//! Final ordering of currency codes.

use tracing::info;

use crate::domain::{CurrencyCatalog, CurrencyRecords};
use crate::error::AppError;

/// G10 currencies, listed first and in this order.
///
/// See <https://en.wikipedia.org/wiki/G10_currencies>.
pub const PRIORITY_CURRENCIES: [&str; 10] = [
    "AUD", "CAD", "CHF", "EUR", "GBP", "JPY", "NOK", "NZD", "SEK", "USD",
];

/// Order `records` into a catalog led by [`PRIORITY_CURRENCIES`].
pub fn assemble_catalog(records: CurrencyRecords) -> Result<CurrencyCatalog, AppError> {
    assemble_with_priority(records, &PRIORITY_CURRENCIES)
}

/// Order `records` with `priority` first (in the given order) and everything
/// else after it in ascending byte order.
///
/// Every priority code must be present in `records`.
pub fn assemble_with_priority(records: CurrencyRecords, priority: &[&str]) -> Result<CurrencyCatalog, AppError> {
    let missing: Vec<&str> = priority
        .iter()
        .copied()
        .filter(|code| !records.contains_key(*code))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::data_integrity(format!(
            "Priority currencies missing from the reconciled registry: {}.",
            missing.join(", ")
        )));
    }

    let mut sorted: Vec<String> = records.keys().cloned().collect();
    sorted.sort_unstable();

    let (mut codes, others): (Vec<String>, Vec<String>) =
        sorted.into_iter().partition(|code| priority.contains(&code.as_str()));
    // `codes` now holds the priority group in sorted order; restore the fixed order.
    codes.sort_by_key(|code| priority.iter().position(|p| p == code));
    let priority_len = codes.len();
    codes.extend(others);

    info!(total = codes.len(), priority = priority_len, "catalog assembled");

    Ok(CurrencyCatalog {
        codes,
        priority_len,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurrencyRecord;
    use crate::error::ErrorKind;

    fn records(codes: &[&str]) -> CurrencyRecords {
        codes
            .iter()
            .map(|code| {
                (
                    code.to_string(),
                    CurrencyRecord {
                        code: code.to_string(),
                        numeric_code: "000".to_string(),
                        digits: 2,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn priority_group_comes_first_in_fixed_order() {
        let mut all = PRIORITY_CURRENCIES.to_vec();
        all.extend(["ZAR", "ALL", "BHD", "RSD"]);

        let catalog = assemble_catalog(records(&all)).unwrap();

        assert_eq!(catalog.priority_codes(), PRIORITY_CURRENCIES);
        assert_eq!(catalog.other_codes(), ["ALL", "BHD", "RSD", "ZAR"]);
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.records.len(), 14);
    }

    #[test]
    fn custom_priority_order_is_kept_not_sorted() {
        let catalog = assemble_with_priority(records(&["AAA", "USD", "JPY", "EUR"]), &["USD", "EUR", "JPY"]).unwrap();
        assert_eq!(catalog.codes, ["USD", "EUR", "JPY", "AAA"]);
        assert_eq!(catalog.priority_len, 3);
    }

    #[test]
    fn missing_priority_code_is_an_integrity_error() {
        let mut partial = PRIORITY_CURRENCIES.to_vec();
        partial.retain(|code| *code != "NZD");

        let err = assemble_catalog(records(&partial)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DataIntegrity);
        assert!(err.to_string().contains("NZD"));
    }
}
