//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

/// User-supplied request info stored alongside the weather snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct UserData {
    pub date: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

/// Resolved location block inside the weather snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportLocation {
    pub name: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

/// Current conditions relayed verbatim from the upstream provider.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub humidity: Option<f64>,
    pub visibility: Option<f64>,
    pub weather_descriptions: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WeatherReport {
    pub location: Option<ReportLocation>,
    pub current: Option<CurrentConditions>,
}

/// A stored weather request fetched by id from the backend.
///
/// Every nested field is optional: the body is parsed with no schema
/// validation and rendering degrades row-by-row when fields are absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WeatherRecord {
    pub id: String,
    pub user_data: Option<UserData>,
    pub weather_data: Option<WeatherReport>,
}

/// Spinner timing for the submit row while a lookup is in flight.
pub const SPINNER_TICK_MS: u64 = 120;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Raw contents of the Weather ID input (trimmed only at submit time)
    #[debug(section = "Lookup", label = "ID")]
    pub lookup_id: String,

    /// Record lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Lookup", label = "Record", debug_fmt)]
    pub record: DataResource<WeatherRecord>,

    /// Spinner frame counter, advances only while Loading
    #[debug(skip)]
    pub tick_count: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            lookup_id: String::new(),
            record: DataResource::Empty,
            tick_count: 0,
        }
    }
}

impl AppState {
    /// The identifier as it would be submitted.
    pub fn trimmed_id(&self) -> &str {
        self.lookup_id.trim()
    }

    /// Submit is gated while a request is in flight or the trimmed id is empty.
    pub fn can_submit(&self) -> bool {
        !self.record.is_loading() && !self.trimmed_id().is_empty()
    }
}
