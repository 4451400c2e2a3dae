//! Terminal summary of a pipeline run.

use crate::app::pipeline::PipelineOutput;

/// Format the run summary (sources, per-stage counters, catalog shape).
pub fn format_summary(output: &PipelineOutput) -> String {
    let stats = &output.stats;
    let catalog = &output.catalog;
    let mut out = String::new();

    out.push_str("=== currency-data ===\n");
    out.push_str(&format!("CLDR version: {}\n", output.cldr_version));
    out.push_str(&format!(
        "ISO published: {}\n",
        output
            .iso_published
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    ));

    out.push_str("\nRegistry:\n");
    out.push_str(&format!(
        "  entries={} | kept={} | dropped={} (empty={}, fund={}, supranational={}, special={})\n",
        stats.extract.entries_read,
        catalog.len(),
        stats.extract.dropped(),
        stats.extract.dropped_empty_code,
        stats.extract.dropped_fund,
        stats.extract.dropped_supranational,
        stats.extract.dropped_special,
    ));
    out.push_str(&format!(
        "  digit overrides: applied={} | changed={} | defaulted={} | ignored={}\n",
        stats.merge.applied, stats.merge.changed, stats.merge.defaulted, stats.merge.ignored,
    ));

    out.push_str("\nCatalog:\n");
    out.push_str(&format!("  G10: {}\n", catalog.priority_codes().join(" ")));
    out.push_str(&format!("  other currencies: {}\n", catalog.other_codes().len()));
    let non_default: Vec<String> = catalog
        .codes
        .iter()
        .filter_map(|code| catalog.records.get(code))
        .filter(|r| r.digits != 2)
        .map(|r| format!("{}={}", r.code, r.digits))
        .collect();
    if !non_default.is_empty() {
        out.push_str(&format!("  non-2 digits: {}\n", non_default.join(" ")));
    }

    out.push_str("\nParent locales:\n");
    out.push_str(&format!(
        "  pairs={} | kept={} | root->en={} | excluded={} | invented scripts={}\n",
        stats.parents.pairs_read,
        output.parent_locales.len(),
        stats.parents.root_rewritten,
        stats.parents.excluded,
        stats.parents.invented_scripts_removed,
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::PipelineStats;
    use crate::domain::{CurrencyCatalog, CurrencyRecord, CurrencyRecords, LocaleParentMap};

    #[test]
    fn summary_lists_priority_group_and_odd_digits() {
        let records: CurrencyRecords = [("USD", 2u8), ("JPY", 0), ("BHD", 3)]
            .into_iter()
            .map(|(code, digits)| {
                (
                    code.to_string(),
                    CurrencyRecord {
                        code: code.to_string(),
                        numeric_code: "000".to_string(),
                        digits,
                    },
                )
            })
            .collect();
        let output = PipelineOutput {
            catalog: CurrencyCatalog {
                codes: vec!["JPY".into(), "USD".into(), "BHD".into()],
                priority_len: 2,
                records,
            },
            parent_locales: LocaleParentMap::new(),
            cldr_version: "45.0.0".to_string(),
            iso_published: None,
            stats: PipelineStats::default(),
        };

        let text = format_summary(&output);

        assert!(text.contains("CLDR version: 45.0.0\n"));
        assert!(text.contains("ISO published: unknown\n"));
        assert!(text.contains("  G10: JPY USD\n"));
        assert!(text.contains("  other currencies: 1\n"));
        assert!(text.contains("  non-2 digits: JPY=0 BHD=3\n"));
    }
}
