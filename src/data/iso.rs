//! ISO 4217 "list one" registry: retrieval and XML parsing.
//!
//! ISO data is needed because CLDR can't be used as a reliable source of
//! numeric codes (e.g. BYR had no numeric code as of CLDR v36). Furthermore,
//! CLDR includes both active and inactive currencies, while ISO includes only
//! active ones.
//!
//! Document shape:
//!
//! ```text
//! <ISO_4217 Pblshd="2024-06-25">
//!   <CcyTbl>
//!     <CcyNtry>
//!       <CtryNm>AFGHANISTAN</CtryNm>
//!       <CcyNm IsFund="true">Afghani</CcyNm>
//!       <Ccy>AFN</Ccy>
//!       <CcyNbr>971</CcyNbr>
//!       <CcyMnrUnts>2</CcyMnrUnts>
//!     </CcyNtry>
//!     ...
//! ```

use std::fs;

use chrono::NaiveDate;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, info};

use crate::data::http::HttpFetcher;
use crate::domain::{IsoSource, RawRegistry, RawRegistryEntry};
use crate::error::AppError;

pub const DEFAULT_ISO_URL: &str =
    "https://www.six-group.com/dam/download/financial-information/data-center/iso-currrency/lists/list-one.xml";

/// Read the registry from its configured source and parse it.
pub fn load_registry(source: &IsoSource, fetcher: &HttpFetcher) -> Result<RawRegistry, AppError> {
    let bytes = match source {
        IsoSource::Url(url) => fetcher.fetch(url)?,
        IsoSource::File(path) => fs::read(path).map_err(|e| {
            AppError::source_unavailable(format!("Failed to read ISO registry '{}': {e}", path.display()))
        })?,
    };
    let registry = parse_registry(&bytes)?;
    info!(
        entries = registry.entries.len(),
        published = ?registry.published,
        "ISO registry loaded"
    );
    Ok(registry)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Country,
    Name,
    Code,
    Number,
    MinorUnits,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"CtryNm" => Some(Field::Country),
            b"CcyNm" => Some(Field::Name),
            b"Ccy" => Some(Field::Code),
            b"CcyNbr" => Some(Field::Number),
            b"CcyMnrUnts" => Some(Field::MinorUnits),
            _ => None,
        }
    }

    fn slot(self, entry: &mut RawRegistryEntry) -> Option<&mut String> {
        match self {
            Field::Country => Some(&mut entry.country),
            Field::Code => Some(&mut entry.code),
            Field::Number => Some(&mut entry.number),
            Field::MinorUnits => Some(&mut entry.minor_units),
            Field::Name => None,
        }
    }
}

/// Parse the registry XML.
///
/// Only the first `CcyTbl` is read. Missing child elements leave the matching
/// field empty.
pub fn parse_registry(xml: &[u8]) -> Result<RawRegistry, AppError> {
    let text = std::str::from_utf8(xml)
        .map_err(|e| AppError::source_unavailable(format!("ISO registry is not UTF-8: {e}")))?;
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut registry = RawRegistry::default();
    let mut tables_seen = 0usize;
    let mut in_table = false;
    let mut current: Option<RawRegistryEntry> = None;
    let mut field: Option<Field> = None;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| AppError::source_unavailable(format!("Invalid ISO registry XML: {e}")))?;
        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"ISO_4217" => registry.published = published_date(&e)?,
                b"CcyTbl" => {
                    tables_seen += 1;
                    in_table = tables_seen == 1;
                }
                b"CcyNtry" if in_table => current = Some(RawRegistryEntry::default()),
                tag => {
                    field = Field::from_tag(tag);
                    if field == Some(Field::Name)
                        && let Some(entry) = current.as_mut()
                    {
                        entry.is_fund = fund_flag(&e)?;
                    }
                }
            },
            Event::Empty(e) if e.name().as_ref() == b"CcyNm" => {
                if let Some(entry) = current.as_mut() {
                    entry.is_fund = fund_flag(&e)?;
                }
            }
            Event::Text(t) => {
                if let (Some(entry), Some(f)) = (current.as_mut(), field)
                    && let Some(slot) = f.slot(entry)
                {
                    let value = t
                        .unescape()
                        .map_err(|e| AppError::source_unavailable(format!("Invalid ISO registry text: {e}")))?;
                    slot.push_str(&value);
                }
            }
            Event::CData(t) => {
                if let (Some(entry), Some(f)) = (current.as_mut(), field)
                    && let Some(slot) = f.slot(entry)
                {
                    slot.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"CcyNtry" => {
                    if let Some(entry) = current.take() {
                        registry.entries.push(entry);
                    }
                }
                b"CcyTbl" => in_table = false,
                _ => field = None,
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if tables_seen == 0 {
        return Err(AppError::source_unavailable("ISO registry has no CcyTbl element."));
    }
    debug!(entries = registry.entries.len(), "ISO registry parsed");

    Ok(registry)
}

fn attribute(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, AppError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| AppError::source_unavailable(format!("Invalid ISO registry attribute: {e}")))?;
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|e| AppError::source_unavailable(format!("Invalid ISO registry attribute value: {e}")))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// `IsFund` is a boolean attribute; any other value is a broken registry, not "no".
fn fund_flag(e: &BytesStart<'_>) -> Result<bool, AppError> {
    let Some(value) = attribute(e, b"IsFund")? else {
        return Ok(false);
    };
    match value.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        other => Err(AppError::source_unavailable(format!(
            "Invalid IsFund value {other:?} in ISO registry."
        ))),
    }
}

fn published_date(e: &BytesStart<'_>) -> Result<Option<NaiveDate>, AppError> {
    Ok(attribute(e, b"Pblshd")?.and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok()))
}
