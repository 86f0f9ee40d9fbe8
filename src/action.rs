//! Actions - user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherRecord;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Lookup category =====
    /// Weather ID input text changed
    LookupIdChange(String),

    /// Submit the lookup (Enter in the input carries the current value)
    LookupSubmit(String),

    /// Result: record fetched successfully
    LookupDidLoad(WeatherRecord),

    /// Result: lookup failed with a user-visible message
    LookupDidError(String),

    // ===== UI category =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the submit-row spinner
    Tick,

    /// Exit the application
    Quit,
}
