//! CLDR JSON data: version label, currency fractions, parent locales.
//!
//! The JSON flavour of CLDR is used because it is more convenient to parse.
//! See <https://github.com/unicode-org/cldr-json> for details.
//!
//! Remote documents are downloaded into a [`Staging`] directory and read back
//! from there, so a remote run and a run against a local checkout go through
//! the same reader.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::data::http::HttpFetcher;
use crate::data::staging::Staging;
use crate::domain::CldrSource;
use crate::error::AppError;
use crate::reconcile::DigitOverrides;

pub const DEFAULT_CLDR_BASE_URL: &str = "https://raw.githubusercontent.com/unicode-org/cldr-json";
pub const DEFAULT_CLDR_REF: &str = "main";

pub const PACKAGE_JSON: &str = "cldr-core/package.json";
pub const CURRENCY_DATA_JSON: &str = "cldr-core/supplemental/currencyData.json";
pub const PARENT_LOCALES_JSON: &str = "cldr-core/supplemental/parentLocales.json";

const CLDR_FILES: [&str; 3] = [PACKAGE_JSON, CURRENCY_DATA_JSON, PARENT_LOCALES_JSON];

/// Fraction field holding the digit count.
const DIGITS_FIELD: &str = "_digits";

/// Everything the pipeline needs from CLDR.
#[derive(Debug, Clone, Default)]
pub struct CldrData {
    pub version: String,
    pub digit_overrides: DigitOverrides,
    /// Raw `(child, parent)` pairs as published.
    pub parent_pairs: Vec<(String, String)>,
}

#[derive(Debug, Deserialize)]
struct PackageJson {
    version: String,
}

#[derive(Debug, Deserialize)]
struct CurrencyDataJson {
    supplemental: CurrencySupplemental,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencySupplemental {
    currency_data: CurrencyData,
}

#[derive(Debug, Deserialize)]
struct CurrencyData {
    fractions: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct ParentLocalesJson {
    supplemental: ParentSupplemental,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParentSupplemental {
    parent_locales: ParentLocales,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParentLocales {
    parent_locale: BTreeMap<String, String>,
}

/// Load CLDR data from its configured source.
///
/// For a remote source the staging directory is dropped, and so removed, before
/// this returns, on success and on error alike.
pub fn load_cldr(
    source: &CldrSource,
    fetcher: &HttpFetcher,
    staging_root: Option<&Path>,
    keep_staging: bool,
) -> Result<CldrData, AppError> {
    let data = match source {
        CldrSource::Dir(dir) => read_cldr_dir(dir)?,
        CldrSource::Remote { base_url, git_ref } => {
            let staging = Staging::new(staging_root, keep_staging)?;
            for file in CLDR_FILES {
                let url = cldr_url(base_url, git_ref, file);
                let bytes = fetcher.fetch(&url)?;
                staging.write(file, &bytes)?;
            }
            read_cldr_dir(staging.path())?
        }
    };
    info!(
        version = %data.version,
        fractions = data.digit_overrides.len(),
        parent_pairs = data.parent_pairs.len(),
        "CLDR data loaded"
    );
    Ok(data)
}

pub fn cldr_url(base_url: &str, git_ref: &str, file: &str) -> String {
    format!("{}/{git_ref}/cldr-json/{file}", base_url.trim_end_matches('/'))
}

/// Read the three CLDR documents from a `cldr-json`-shaped directory.
pub fn read_cldr_dir(dir: &Path) -> Result<CldrData, AppError> {
    let read = |file: &str| {
        let path = dir.join(file);
        fs::read(&path).map_err(|e| AppError::source_unavailable(format!("Failed to read '{}': {e}", path.display())))
    };

    Ok(CldrData {
        version: parse_version(&read(PACKAGE_JSON)?)?,
        digit_overrides: parse_digit_overrides(&read(CURRENCY_DATA_JSON)?)?,
        parent_pairs: parse_parent_pairs(&read(PARENT_LOCALES_JSON)?)?,
    })
}

fn parse_json<T: DeserializeOwned>(bytes: &[u8], what: &str) -> Result<T, AppError> {
    serde_json::from_slice(bytes).map_err(|e| AppError::source_unavailable(format!("Invalid CLDR {what}: {e}")))
}

pub fn parse_version(bytes: &[u8]) -> Result<String, AppError> {
    let package: PackageJson = parse_json(bytes, PACKAGE_JSON)?;
    Ok(package.version)
}

/// Extract `_digits` per currency from `currencyData.json`.
///
/// Entries without `_digits` map to `None`. CLDR's `DEFAULT` pseudo-code is kept;
/// the registry has no such currency, so the merge ignores it.
pub fn parse_digit_overrides(bytes: &[u8]) -> Result<DigitOverrides, AppError> {
    let doc: CurrencyDataJson = parse_json(bytes, CURRENCY_DATA_JSON)?;
    Ok(doc
        .supplemental
        .currency_data
        .fractions
        .into_iter()
        .map(|(code, mut fields)| (code, fields.remove(DIGITS_FIELD)))
        .collect())
}

pub fn parse_parent_pairs(bytes: &[u8]) -> Result<Vec<(String, String)>, AppError> {
    let doc: ParentLocalesJson = parse_json(bytes, PARENT_LOCALES_JSON)?;
    Ok(doc.supplemental.parent_locales.parent_locale.into_iter().collect())
}
