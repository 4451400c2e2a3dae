//! JSON rendering of the reconciled tables.
//!
//! Same content as the Rust module, for consumers in other languages. Map keys
//! are emitted in ascending order because the underlying maps are ordered.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::AppError;
use crate::io::Artifact;

#[derive(Debug, Serialize)]
struct JsonArtifact<'a> {
    cldr_version: &'a str,
    iso_published: Option<NaiveDate>,
    currency_codes: &'a [String],
    currencies: BTreeMap<&'a str, JsonCurrency<'a>>,
    parent_locales: &'a BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct JsonCurrency<'a> {
    numeric_code: &'a str,
    digits: u8,
}

/// Render the artifact as pretty-printed JSON with a trailing newline.
pub fn render_json(artifact: &Artifact<'_>) -> Result<String, AppError> {
    let doc = JsonArtifact {
        cldr_version: artifact.cldr_version,
        iso_published: artifact.iso_published,
        currency_codes: &artifact.catalog.codes,
        currencies: artifact
            .catalog
            .records
            .values()
            .map(|r| {
                (
                    r.code.as_str(),
                    JsonCurrency {
                        numeric_code: &r.numeric_code,
                        digits: r.digits,
                    },
                )
            })
            .collect(),
        parent_locales: artifact.parent_locales,
    };

    let mut out =
        serde_json::to_string_pretty(&doc).map_err(|e| AppError::output(format!("Failed to render JSON: {e}")))?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurrencyCatalog, CurrencyRecord, LocaleParentMap};

    #[test]
    fn json_keeps_catalog_order_and_sorted_maps() {
        let records = [("EUR", "978", 2u8), ("BHD", "048", 3)]
            .into_iter()
            .map(|(code, numeric, digits)| {
                (
                    code.to_string(),
                    CurrencyRecord {
                        code: code.to_string(),
                        numeric_code: numeric.to_string(),
                        digits,
                    },
                )
            })
            .collect();
        let catalog = CurrencyCatalog {
            codes: vec!["EUR".into(), "BHD".into()],
            priority_len: 1,
            records,
        };
        let parents: LocaleParentMap = [("es-MX".to_string(), "es-419".to_string())].into_iter().collect();
        let artifact = Artifact {
            catalog: &catalog,
            parent_locales: &parents,
            cldr_version: "45.0.0",
            iso_published: None,
        };

        let json = render_json(&artifact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["cldr_version"], "45.0.0");
        assert!(value["iso_published"].is_null());
        assert_eq!(value["currency_codes"], serde_json::json!(["EUR", "BHD"]));
        assert_eq!(value["currencies"]["BHD"]["digits"], 3);
        assert_eq!(value["currencies"]["EUR"]["numeric_code"], "978");
        assert_eq!(value["parent_locales"]["es-MX"], "es-419");
        assert!(json.find("\"BHD\": {").unwrap() < json.find("\"EUR\": {").unwrap());
        assert!(json.ends_with("}\n"));
    }
}
