//! Weather Data System backend client

use std::sync::OnceLock;

use reqwest::StatusCode;

use crate::state::WeatherRecord;

/// Default address of the local backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Fixed message for a 404 from the backend.
pub const NOT_FOUND_ERROR: &str = "Weather data not found. Please check the ID and try again.";

/// Fallback when a transport failure carries no message of its own.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch weather data";

/// Lookup error type
#[derive(Debug)]
pub enum FetchError {
    /// Backend returned 404 for the id
    NotFound,
    /// Backend returned some other non-2xx status
    Server(u16),
    /// Network failure or response-body parse failure
    Transport(String),
}

impl FetchError {
    fn transport(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NotFound => f.write_str(NOT_FOUND_ERROR),
            FetchError::Server(status) => write!(f, "Server error: {}", status),
            FetchError::Transport(msg) if msg.is_empty() => f.write_str(GENERIC_FETCH_ERROR),
            FetchError::Transport(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for FetchError {}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// Fetch a stored weather record by id.
///
/// `id` must already be trimmed; it is embedded in the path verbatim, so
/// callers should encode identifiers containing path-unsafe characters.
pub async fn fetch_record(base_url: &str, id: &str) -> Result<WeatherRecord, FetchError> {
    let url = format!("{}/weather/{}", base_url.trim_end_matches('/'), id);

    let response = http_client()
        .get(&url)
        .send()
        .await
        .map_err(FetchError::transport)?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound);
    }
    if !status.is_success() {
        return Err(FetchError::Server(status.as_u16()));
    }

    response.json().await.map_err(FetchError::transport)
}
