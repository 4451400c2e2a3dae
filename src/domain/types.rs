//! Shared domain types.
//!
//! These types are built once per run, never mutated after the stage that
//! produces them, and handed to the emitters in their final order.
//!
//! - raw source rows (`RawRegistryEntry`)
//! - reconciled records (`CurrencyRecord`, `CurrencyCatalog`, `LocaleParentMap`)
//! - run configuration (`GenConfig`, `IsoSource`, `CldrSource`, `OutputFormat`)

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;

/// One `CcyNtry` row of the ISO 4217 registry, exactly as published.
///
/// Every field is kept as text; interpretation happens during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRegistryEntry {
    pub code: String,
    pub number: String,
    pub minor_units: String,
    pub country: String,
    pub is_fund: bool,
}

/// The parsed ISO 4217 registry document.
#[derive(Debug, Clone, Default)]
pub struct RawRegistry {
    /// Value of the `Pblshd` attribute, when it is a valid `YYYY-MM-DD` date.
    pub published: Option<NaiveDate>,
    pub entries: Vec<RawRegistryEntry>,
}

/// An active currency after reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRecord {
    pub code: String,
    pub numeric_code: String,
    /// Number of minor-unit digits.
    pub digits: u8,
}

/// Currency records keyed by alphabetic code.
///
/// A `BTreeMap` so that every traversal is in ascending code order.
pub type CurrencyRecords = BTreeMap<String, CurrencyRecord>;

/// Child locale -> parent locale, keyed in ascending child order.
pub type LocaleParentMap = BTreeMap<String, String>;

/// The final, ordered currency list plus its lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyCatalog {
    /// Priority codes in their fixed order, followed by all other codes sorted.
    pub codes: Vec<String>,
    /// How many leading entries of `codes` form the priority group.
    pub priority_len: usize,
    pub records: CurrencyRecords,
}

impl CurrencyCatalog {
    pub fn priority_codes(&self) -> &[String] {
        &self.codes[..self.priority_len]
    }

    pub fn other_codes(&self) -> &[String] {
        &self.codes[self.priority_len..]
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Output artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A generated Rust module with static lookup tables.
    Rust,
    /// A pretty-printed JSON document.
    Json,
}

impl OutputFormat {
    pub fn default_path(self) -> PathBuf {
        match self {
            OutputFormat::Rust => PathBuf::from("data.rs"),
            OutputFormat::Json => PathBuf::from("data.json"),
        }
    }
}

/// Where the ISO 4217 registry comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsoSource {
    Url(String),
    File(PathBuf),
}

/// Where the CLDR JSON documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CldrSource {
    /// `{base_url}/{git_ref}/cldr-json/cldr-core/...` on a raw-file host.
    Remote { base_url: String, git_ref: String },
    /// A local checkout laid out as `cldr-core/package.json`, `cldr-core/supplemental/*.json`.
    Dir(PathBuf),
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags, then environment, then defaults.
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub iso: IsoSource,
    pub cldr: CldrSource,
    pub format: OutputFormat,
    pub output: PathBuf,
    pub to_stdout: bool,
    /// Parent of the run's staging directory; the system temp dir when `None`.
    pub staging_root: Option<PathBuf>,
    pub keep_staging: bool,
}
