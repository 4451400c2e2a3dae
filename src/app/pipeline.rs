//! Shared pipeline logic used by every CLI command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! CLDR fetch -> ISO fetch -> extract -> digit overrides -> parent locales -> catalog
//!
//! Stages run strictly one after another; each consumes the previous stage's
//! finished output. The first error aborts the run.

use chrono::NaiveDate;
use tracing::info;

use crate::data::{CldrData, HttpFetcher, load_cldr, load_registry};
use crate::domain::{CurrencyCatalog, GenConfig, LocaleParentMap, RawRegistry};
use crate::error::AppError;
use crate::io::Artifact;
use crate::reconcile::{
    ExclusionSet, ExtractStats, MergeStats, ParentStats, apply_digit_overrides, assemble_catalog, extract_records,
    resolve_parent_locales,
};

/// Raw inputs, fully retrieved and parsed.
#[derive(Debug, Clone)]
pub struct RawSources {
    pub registry: RawRegistry,
    pub cldr: CldrData,
}

/// Per-stage counters for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub extract: ExtractStats,
    pub merge: MergeStats,
    pub parents: ParentStats,
}

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub catalog: CurrencyCatalog,
    pub parent_locales: LocaleParentMap,
    pub cldr_version: String,
    pub iso_published: Option<NaiveDate>,
    pub stats: PipelineStats,
}

impl PipelineOutput {
    pub fn artifact(&self) -> Artifact<'_> {
        Artifact {
            catalog: &self.catalog,
            parent_locales: &self.parent_locales,
            cldr_version: &self.cldr_version,
            iso_published: self.iso_published,
        }
    }
}

/// Retrieve both sources and run the full pipeline.
pub fn run_pipeline(config: &GenConfig) -> Result<PipelineOutput, AppError> {
    let sources = load_sources(config)?;
    run_with_sources(sources)
}

/// Retrieve and parse both sources.
pub fn load_sources(config: &GenConfig) -> Result<RawSources, AppError> {
    let fetcher = HttpFetcher::new()?;

    info!("fetching CLDR data");
    let cldr = load_cldr(&config.cldr, &fetcher, config.staging_root.as_deref(), config.keep_staging)?;

    info!("fetching ISO data");
    let registry = load_registry(&config.iso, &fetcher)?;

    Ok(RawSources { registry, cldr })
}

/// Run the reconciliation stages over already-loaded sources.
pub fn run_with_sources(sources: RawSources) -> Result<PipelineOutput, AppError> {
    let RawSources { registry, cldr } = sources;

    // 1) Active currencies from ISO.
    let (records, extract) = extract_records(&registry.entries);

    // 2) CLDR digit counts take precedence.
    let (records, merge) = apply_digit_overrides(records, &cldr.digit_overrides);
    info!(
        applied = merge.applied,
        changed = merge.changed,
        ignored = merge.ignored,
        "digit overrides merged"
    );

    // 3) Parent locales.
    let (parent_locales, parents) = resolve_parent_locales(cldr.parent_pairs, &ExclusionSet::curated());

    // 4) Final ordering.
    let catalog = assemble_catalog(records)?;

    Ok(PipelineOutput {
        catalog,
        parent_locales,
        cldr_version: cldr.version,
        iso_published: registry.published,
        stats: PipelineStats {
            extract,
            merge,
            parents,
        },
    })
}
