//! Output rendering and writing.
//!
//! - Rust module rendering (`emit`)
//! - JSON rendering (`export`)

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{CurrencyCatalog, LocaleParentMap, OutputFormat};
use crate::error::AppError;

pub mod emit;
pub mod export;

pub use emit::render_rust;
pub use export::render_json;

/// Everything an emitter needs, already final and ordered.
#[derive(Debug, Clone, Copy)]
pub struct Artifact<'a> {
    pub catalog: &'a CurrencyCatalog,
    pub parent_locales: &'a LocaleParentMap,
    pub cldr_version: &'a str,
    pub iso_published: Option<NaiveDate>,
}

pub fn render(artifact: &Artifact<'_>, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Rust => Ok(render_rust(artifact)),
        OutputFormat::Json => render_json(artifact),
    }
}

/// Replace `path` with `contents`.
pub fn write_file(path: &Path, contents: &str) -> Result<(), AppError> {
    fs::write(path, contents)
        .map_err(|e| AppError::output(format!("Failed to write '{}': {e}", path.display())))
}

pub fn write_stdout(contents: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(contents.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| AppError::output(format!("Failed to write to stdout: {e}")))
}
