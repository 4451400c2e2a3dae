//! Blocking HTTP retrieval shared by the ISO and CLDR sources.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::AppError;

const TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("currency-data/", env!("CARGO_PKG_VERSION"));

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::source_unavailable(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// GET `url` and return the full body; anything but a 2xx response is an error.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        debug!(url, "fetching");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::source_unavailable(format!("Get {url:?} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::source_unavailable(format!(
                "Get {url:?} failed with status {}.",
                resp.status()
            )));
        }

        let body = resp
            .bytes()
            .map_err(|e| AppError::source_unavailable(format!("Get {url:?}: failed to read body: {e}")))?;
        debug!(url, bytes = body.len(), "fetched");

        Ok(body.to_vec())
    }
}
