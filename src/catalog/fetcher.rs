//! Catalog Fetcher Module
//!
//! Loads the skip list in a background thread so the UI never blocks on the network.
//! The worker owns a current-thread tokio runtime for the reqwest call and hands the
//! result back over a channel that the UI loop polls.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use reqwest::Client;

use super::skip::Skip;
use crate::config::ApiConfig;
use crate::error::SkipError;

const SKIPS_BY_LOCATION_PATH: &str = "/api/skips/by-location";

/// Where the skip list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchSource {
    Endpoint(ApiConfig),
    File(PathBuf),
}

impl FetchSource {
    /// Full request URL for endpoint sources, the file path otherwise
    pub fn describe(&self) -> String {
        match self {
            FetchSource::Endpoint(api) => format!(
                "{}?postcode={}&area={}",
                endpoint_url(api),
                api.postcode,
                api.area
            ),
            FetchSource::File(path) => path.display().to_string(),
        }
    }
}

/// Represents the current state of a fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    InFlight,
    Settled,
}

/// Runs one fetch in a background thread
pub struct SkipFetcher {
    pub state: FetchState,
    pub rx: Option<Receiver<Result<Vec<Skip>, SkipError>>>,
}

impl SkipFetcher {
    /// Spawn a background thread that loads the skip list from `source`
    pub fn spawn(source: FetchSource) -> Self {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let result = fetch_blocking(&source);
            let _ = tx.send(result);
        });

        Self {
            state: FetchState::InFlight,
            rx: Some(rx),
        }
    }

    /// Poll for fetch completion (non-blocking)
    ///
    /// Returns None while the request is in flight, or Some with the result once.
    pub fn poll(&mut self) -> Option<Result<Vec<Skip>, SkipError>> {
        let rx = self.rx.as_ref()?;

        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                self.state = FetchState::Settled;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                self.state = FetchState::Settled;
                Some(Err(SkipError::Io(
                    "Catalog fetch thread disconnected".to_string(),
                )))
            }
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, FetchState::InFlight)
    }
}

/// Load the skip list synchronously (runs in the background thread, or directly for `--list`)
pub fn fetch_blocking(source: &FetchSource) -> Result<Vec<Skip>, SkipError> {
    #[cfg(debug_assertions)]
    log::debug!("Fetching skips from {}", source.describe());

    let result = match source {
        FetchSource::Endpoint(api) => fetch_endpoint(api),
        FetchSource::File(path) => load_file(path),
    };

    #[cfg(debug_assertions)]
    match &result {
        Ok(skips) => log::debug!("Fetched {} skips", skips.len()),
        Err(e) => log::error!("Skip fetch failed: {}", e),
    }

    result
}

fn endpoint_url(api: &ApiConfig) -> String {
    format!(
        "{}{}",
        api.base_url.trim_end_matches('/'),
        SKIPS_BY_LOCATION_PATH
    )
}

fn fetch_endpoint(api: &ApiConfig) -> Result<Vec<Skip>, SkipError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SkipError::Runtime(e.to_string()))?;

    rt.block_on(fetch_endpoint_async(api))
}

async fn fetch_endpoint_async(api: &ApiConfig) -> Result<Vec<Skip>, SkipError> {
    let url = endpoint_url(api);
    let http_error = |e: reqwest::Error| SkipError::Http {
        url: url.clone(),
        message: e.to_string(),
    };

    let response = Client::new()
        .get(&url)
        .query(&[("postcode", api.postcode.as_str()), ("area", api.area.as_str())])
        .send()
        .await
        .map_err(http_error)?
        .error_for_status()
        .map_err(http_error)?;

    let body = response.text().await.map_err(http_error)?;
    parse_skips(&body)
}

fn load_file(path: &Path) -> Result<Vec<Skip>, SkipError> {
    let contents = std::fs::read_to_string(path)?;
    parse_skips(&contents)
}

/// Parse the endpoint payload: a JSON array of skip records
pub fn parse_skips(payload: &str) -> Result<Vec<Skip>, SkipError> {
    Ok(serde_json::from_str::<Vec<Skip>>(payload)?)
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod fetcher_tests;
