//! Reconciliation of the ISO registry with CLDR data.
//!
//! Stages, in pipeline order:
//!
//! - extract active currencies from the ISO registry (`registry`)
//! - overwrite digit counts with CLDR fractions (`digits`)
//! - resolve the CLDR parent-locale table (`locales`)
//! - order the currency codes into the final catalog (`catalog`)

pub mod catalog;
pub mod digits;
pub mod locales;
pub mod registry;

pub use catalog::*;
pub use digits::*;
pub use locales::*;
pub use registry::*;
