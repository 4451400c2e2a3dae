//! `currency-data` library crate.
//!
//! Builds the currency and parent-locale tables consumed by a currency
//! formatting library, by reconciling the ISO 4217 registry with CLDR.
//!
//! The binary (`currency-data`) is a thin wrapper around this library so that:
//!
//! - the reconciliation stages are testable without network access
//! - the emitters can be driven from other tools (e.g. a build script)

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod reconcile;
pub mod report;
