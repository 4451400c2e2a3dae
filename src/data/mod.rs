//! Source retrieval: the ISO 4217 registry and the CLDR JSON corpus.

pub mod cldr;
pub mod http;
pub mod iso;
pub mod staging;

pub use cldr::{CldrData, load_cldr};
pub use http::HttpFetcher;
pub use iso::load_registry;
pub use staging::Staging;
