//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw registry rows as parsed from the ISO document (`RawRegistryEntry`)
//! - reconciled outputs (`CurrencyRecord`, `CurrencyCatalog`, `LocaleParentMap`)
//! - run configuration (`GenConfig`)

pub mod types;

pub use types::*;
