//! Extraction of active currencies from the ISO 4217 registry.
//!
//! ISO rather than CLDR decides which currencies exist: CLDR lists inactive
//! currencies too and can't be trusted for numeric codes.

use tracing::{debug, info};

use crate::domain::{CurrencyRecord, CurrencyRecords, RawRegistryEntry};
use crate::reconcile::digits::MinorUnits;

/// Supranational units that are not used for end-user formatting.
pub const SUPRANATIONAL_CODES: [&str; 3] = ["XDR", "XSU", "XUA"];

/// `CtryNm` prefix ISO uses for non-country entries (gold, platinum, testing codes).
pub const SPECIAL_COUNTRY_PREFIX: &str = "ZZ";

/// Why a registry entry was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Territories without a currency of their own (e.g. Antarctica).
    EmptyCode,
    Fund,
    Supranational,
    Special,
}

/// Counters for one extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub entries_read: usize,
    pub dropped_empty_code: usize,
    pub dropped_fund: usize,
    pub dropped_supranational: usize,
    pub dropped_special: usize,
    /// Kept entries whose digits field was not a valid count.
    pub digits_defaulted: usize,
}

impl ExtractStats {
    fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::EmptyCode => self.dropped_empty_code += 1,
            DropReason::Fund => self.dropped_fund += 1,
            DropReason::Supranational => self.dropped_supranational += 1,
            DropReason::Special => self.dropped_special += 1,
        }
    }

    pub fn dropped(&self) -> usize {
        self.dropped_empty_code + self.dropped_fund + self.dropped_supranational + self.dropped_special
    }
}

/// Decide whether an entry is excluded, checking the rules in a fixed order.
pub fn drop_reason(entry: &RawRegistryEntry) -> Option<DropReason> {
    if entry.code.is_empty() {
        Some(DropReason::EmptyCode)
    } else if entry.is_fund {
        Some(DropReason::Fund)
    } else if SUPRANATIONAL_CODES.contains(&entry.code.as_str()) {
        Some(DropReason::Supranational)
    } else if entry.country.starts_with(SPECIAL_COUNTRY_PREFIX) {
        Some(DropReason::Special)
    } else {
        None
    }
}

/// Build one record per qualifying registry entry.
///
/// The registry lists a currency once per country using it, so repeated codes
/// simply overwrite each other.
pub fn extract_records(entries: &[RawRegistryEntry]) -> (CurrencyRecords, ExtractStats) {
    let mut records = CurrencyRecords::new();
    let mut stats = ExtractStats {
        entries_read: entries.len(),
        ..ExtractStats::default()
    };

    for entry in entries {
        if let Some(reason) = drop_reason(entry) {
            debug!(code = %entry.code, country = %entry.country, ?reason, "registry entry dropped");
            stats.record_drop(reason);
            continue;
        }

        let units = MinorUnits::parse(&entry.minor_units);
        units.trace_default(&entry.code, "iso");
        if units.is_defaulted() {
            stats.digits_defaulted += 1;
        }

        records.insert(
            entry.code.clone(),
            CurrencyRecord {
                code: entry.code.clone(),
                numeric_code: entry.number.clone(),
                digits: units.digits(),
            },
        );
    }

    info!(
        read = stats.entries_read,
        kept = records.len(),
        dropped = stats.dropped(),
        "registry extracted"
    );

    (records, stats)
}
