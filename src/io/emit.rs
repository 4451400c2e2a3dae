//! Rust source rendering of the reconciled tables.
//!
//! The output is a self-contained module with sorted static slices, so the
//! consuming library can binary-search `CURRENCIES` and `PARENT_LOCALES`.
//! Rendering never reorders anything: it walks the catalog and the maps in the
//! order they were assembled.

use std::fmt::Write as _;

use crate::domain::{CurrencyRecord, LocaleParentMap};
use crate::io::Artifact;

const INDENT: &str = "    ";
/// Items per line in `CURRENCY_CODES`.
const CODES_PER_LINE: usize = 10;
/// Items per line in the pair tables.
const PAIRS_PER_LINE: usize = 3;

/// Render the artifact as a generated Rust module.
pub fn render_rust(artifact: &Artifact<'_>) -> String {
    let catalog = artifact.catalog;
    let mut out = String::new();

    out.push_str("// Code generated by currency-data; DO NOT EDIT.\n\n");

    out.push_str("/// CLDR version from which the data is derived.\n");
    let _ = writeln!(out, "pub const CLDR_VERSION: &str = {:?};", artifact.cldr_version);
    out.push('\n');

    out.push_str("/// Publication date of the ISO 4217 list the data is derived from.\n");
    match artifact.iso_published {
        Some(date) => {
            let _ = writeln!(out, "pub const ISO_PUBLISHED: Option<&str> = Some({:?});", date.to_string());
        }
        None => out.push_str("pub const ISO_PUBLISHED: Option<&str> = None;\n"),
    }
    out.push('\n');

    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq)]\n");
    out.push_str("pub struct CurrencyInfo {\n");
    let _ = writeln!(out, "{INDENT}pub numeric_code: &'static str,");
    let _ = writeln!(out, "{INDENT}pub digits: u8,");
    out.push_str("}\n\n");

    out.push_str("/// G10 currencies first, then all other currencies in code order.\n");
    out.push_str("pub static CURRENCY_CODES: &[&str] = &[\n");
    let _ = writeln!(out, "{INDENT}// G10 currencies.");
    push_wrapped(&mut out, catalog.priority_codes().iter().map(|c| format!("{c:?}")), CODES_PER_LINE);
    if !catalog.other_codes().is_empty() {
        out.push('\n');
        let _ = writeln!(out, "{INDENT}// Other currencies.");
        push_wrapped(&mut out, catalog.other_codes().iter().map(|c| format!("{c:?}")), CODES_PER_LINE);
    }
    out.push_str("];\n\n");

    out.push_str("/// Sorted by currency code.\n");
    out.push_str("pub static CURRENCIES: &[(&str, CurrencyInfo)] = &[\n");
    push_wrapped(&mut out, catalog.records.values().map(currency_item), PAIRS_PER_LINE);
    out.push_str("];\n\n");

    out.push_str("/// Sorted by child locale.\n");
    out.push_str("pub static PARENT_LOCALES: &[(&str, &str)] = &[\n");
    push_wrapped(&mut out, parent_items(artifact.parent_locales), PAIRS_PER_LINE);
    out.push_str("];\n");

    out
}

fn currency_item(record: &CurrencyRecord) -> String {
    format!(
        "({:?}, CurrencyInfo {{ numeric_code: {:?}, digits: {} }})",
        record.code, record.numeric_code, record.digits
    )
}

fn parent_items(parents: &LocaleParentMap) -> impl Iterator<Item = String> + '_ {
    parents.iter().map(|(child, parent)| format!("({child:?}, {parent:?})"))
}

/// Append `items` as indented lines of `per_line` entries, each followed by a comma.
fn push_wrapped(out: &mut String, items: impl Iterator<Item = String>, per_line: usize) {
    let mut on_line = 0usize;
    for item in items {
        if on_line == 0 {
            out.push_str(INDENT);
        } else {
            out.push(' ');
        }
        out.push_str(&item);
        out.push(',');
        on_line += 1;
        if on_line == per_line {
            out.push('\n');
            on_line = 0;
        }
    }
    if on_line != 0 {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurrencyCatalog, CurrencyRecords};
    use chrono::NaiveDate;

    fn record(code: &str, numeric: &str, digits: u8) -> (String, CurrencyRecord) {
        (
            code.to_string(),
            CurrencyRecord {
                code: code.to_string(),
                numeric_code: numeric.to_string(),
                digits,
            },
        )
    }

    #[test]
    fn wraps_at_line_width() {
        let mut out = String::new();
        push_wrapped(&mut out, (1..=7).map(|n| n.to_string()), 3);
        assert_eq!(out, "    1, 2, 3,\n    4, 5, 6,\n    7,\n");

        let mut exact = String::new();
        push_wrapped(&mut exact, (1..=2).map(|n| n.to_string()), 2);
        assert_eq!(exact, "    1, 2,\n");

        let mut empty = String::new();
        push_wrapped(&mut empty, std::iter::empty(), 2);
        assert_eq!(empty, "");
    }

    #[test]
    fn renders_tables_in_given_order() {
        let records: CurrencyRecords = [record("USD", "840", 2), record("JPY", "392", 0), record("ALL", "008", 0)]
            .into_iter()
            .collect();
        let catalog = CurrencyCatalog {
            codes: vec!["JPY".into(), "USD".into(), "ALL".into()],
            priority_len: 2,
            records,
        };
        let parents: LocaleParentMap = [("de-AT".to_string(), "de".to_string()), ("az-Arab".to_string(), "en".to_string())]
            .into_iter()
            .collect();
        let artifact = Artifact {
            catalog: &catalog,
            parent_locales: &parents,
            cldr_version: "45.0.0",
            iso_published: NaiveDate::from_ymd_opt(2024, 6, 25),
        };

        let src = render_rust(&artifact);

        assert!(src.starts_with("// Code generated by currency-data; DO NOT EDIT.\n"));
        assert!(src.contains("pub const CLDR_VERSION: &str = \"45.0.0\";\n"));
        assert!(src.contains("pub const ISO_PUBLISHED: Option<&str> = Some(\"2024-06-25\");\n"));
        assert!(src.contains(
            "    // G10 currencies.\n    \"JPY\", \"USD\",\n\n    // Other currencies.\n    \"ALL\",\n];"
        ));
        assert!(src.contains(
            "    (\"ALL\", CurrencyInfo { numeric_code: \"008\", digits: 0 }), \
             (\"JPY\", CurrencyInfo { numeric_code: \"392\", digits: 0 }), \
             (\"USD\", CurrencyInfo { numeric_code: \"840\", digits: 2 }),\n"
        ));
        assert!(src.contains("    (\"az-Arab\", \"en\"), (\"de-AT\", \"de\"),\n];\n"));
    }
}
