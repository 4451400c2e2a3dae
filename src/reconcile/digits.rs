//! Minor-unit digit parsing and the CLDR digit override merge.
//!
//! ISO publishes the nominal number of minor-unit digits. CLDR reflects real
//! life usage more closely (e.g. 0 digits instead of 2 for ALL and RSD), so its
//! `_digits` value wins for every currency it knows about. CLDR never decides
//! *which* currencies exist: codes it has that ISO lacks are ignored.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::domain::CurrencyRecords;

/// Digit count used when a digits field is absent or unparseable.
pub const DEFAULT_DIGITS: u8 = 2;

/// Outcome of reading a digits field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinorUnits {
    Parsed(u8),
    /// Empty, whitespace-only, or missing altogether.
    Absent,
    /// Present but not a small non-negative integer (e.g. `N.A.`, `-1`, `300`).
    Malformed(String),
}

impl MinorUnits {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return MinorUnits::Absent;
        }
        match trimmed.parse::<u8>() {
            Ok(n) => MinorUnits::Parsed(n),
            Err(_) => MinorUnits::Malformed(trimmed.to_string()),
        }
    }

    pub fn parse_opt(raw: Option<&str>) -> Self {
        raw.map_or(MinorUnits::Absent, MinorUnits::parse)
    }

    pub fn digits(&self) -> u8 {
        match self {
            MinorUnits::Parsed(n) => *n,
            MinorUnits::Absent | MinorUnits::Malformed(_) => DEFAULT_DIGITS,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        !matches!(self, MinorUnits::Parsed(_))
    }

    /// Log a defaulted value for `code` read from `source`.
    pub(crate) fn trace_default(&self, code: &str, source: &str) {
        match self {
            MinorUnits::Parsed(_) => {}
            MinorUnits::Absent => {
                debug!(code, source, "digits absent, using default {DEFAULT_DIGITS}");
            }
            MinorUnits::Malformed(raw) => {
                warn!(code, source, raw = %raw, "digits malformed, using default {DEFAULT_DIGITS}");
            }
        }
    }
}

/// CLDR `_digits` values keyed by currency code.
///
/// `None` means the fractions entry exists but carries no `_digits` field.
pub type DigitOverrides = BTreeMap<String, Option<String>>;

/// Counters for one override merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Records whose code had an override entry.
    pub applied: usize,
    /// Applied overrides that actually changed the digit count.
    pub changed: usize,
    /// Applied overrides that fell back to the default.
    pub defaulted: usize,
    /// Override entries for codes the registry does not have.
    pub ignored: usize,
}

/// Overwrite `digits` of every record that has an override entry.
///
/// No records are added or removed.
pub fn apply_digit_overrides(
    mut records: CurrencyRecords,
    overrides: &DigitOverrides,
) -> (CurrencyRecords, MergeStats) {
    let mut stats = MergeStats::default();

    for (code, record) in records.iter_mut() {
        let Some(raw) = overrides.get(code) else {
            continue;
        };
        let units = MinorUnits::parse_opt(raw.as_deref());
        units.trace_default(code, "cldr");
        if units.is_defaulted() {
            stats.defaulted += 1;
        }

        let digits = units.digits();
        if digits != record.digits {
            debug!(code = %code, from = record.digits, to = digits, "digits overridden");
            stats.changed += 1;
        }
        record.digits = digits;
        stats.applied += 1;
    }

    stats.ignored = overrides
        .keys()
        .filter(|code| !records.contains_key(code.as_str()))
        .count();

    (records, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurrencyRecord;

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
    fn parse_distinguishes_absent_from_malformed() {
        assert_eq!(MinorUnits::parse("0"), MinorUnits::Parsed(0));
        assert_eq!(MinorUnits::parse(" 3 "), MinorUnits::Parsed(3));
        assert_eq!(MinorUnits::parse(""), MinorUnits::Absent);
        assert_eq!(MinorUnits::parse("  "), MinorUnits::Absent);
        assert_eq!(MinorUnits::parse_opt(None), MinorUnits::Absent);
        assert_eq!(MinorUnits::parse("N.A."), MinorUnits::Malformed("N.A.".to_string()));
        assert_eq!(MinorUnits::parse("-1"), MinorUnits::Malformed("-1".to_string()));
        assert_eq!(MinorUnits::parse("300"), MinorUnits::Malformed("300".to_string()));
    }

    #[test]
    fn unparsed_values_default_to_two() {
        assert_eq!(MinorUnits::Absent.digits(), 2);
        assert_eq!(MinorUnits::parse("N.A.").digits(), 2);
        assert_eq!(MinorUnits::parse("4").digits(), 4);
    }

    #[test]
    fn overrides_replace_digits_for_known_codes_only() {
        let records: CurrencyRecords = [record("ALL", "008", 2), record("USD", "840", 2), record("JPY", "392", 0)]
            .into_iter()
            .collect();
        let overrides: DigitOverrides = [
            ("ALL".to_string(), Some("0".to_string())),
            ("JPY".to_string(), Some("0".to_string())),
            ("ADP".to_string(), Some("0".to_string())),
            ("DEFAULT".to_string(), Some("2".to_string())),
        ]
        .into_iter()
        .collect();

        let (merged, stats) = apply_digit_overrides(records, &overrides);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["ALL"].digits, 0);
        assert_eq!(merged["JPY"].digits, 0);
        assert_eq!(merged["USD"].digits, 2);
        assert!(!merged.contains_key("ADP"));
        assert_eq!(
            stats,
            MergeStats {
                applied: 2,
                changed: 1,
                defaulted: 0,
                ignored: 2,
            }
        );
    }

    #[test]
    fn missing_or_bad_override_falls_back_to_default() {
        let records: CurrencyRecords = [record("BHD", "048", 3), record("XYZ", "999", 0)].into_iter().collect();
        let overrides: DigitOverrides = [
            ("BHD".to_string(), None),
            ("XYZ".to_string(), Some("two".to_string())),
        ]
        .into_iter()
        .collect();

        let (merged, stats) = apply_digit_overrides(records, &overrides);

        assert_eq!(merged["BHD"].digits, 2);
        assert_eq!(merged["XYZ"].digits, 2);
        assert_eq!(stats.defaulted, 2);
        assert_eq!(stats.changed, 2);
    }
}
