//! Render snapshot tests using RenderHarness
//!
//! Render the lookup card into a test buffer and assert on the plain-text
//! output: present fields appear, absent fields leave no placeholder.

use tui_dispatch::{testing::*, DataResource};
use weather_lookup::{
    components::{Component, LookupDisplay, LookupDisplayProps},
    state::{AppState, CurrentConditions, ReportLocation, UserData, WeatherRecord, WeatherReport},
};

fn render_state(state: &AppState) -> String {
    let mut render = RenderHarness::new(60, 30);
    let mut component = LookupDisplay::new();
    render.render_to_string_plain(|frame| {
        let props = LookupDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn full_record() -> WeatherRecord {
    WeatherRecord {
        id: "sample-weather-123".into(),
        user_data: Some(UserData {
            date: Some("2024-03-05".into()),
            location: Some("Kyiv".into()),
            notes: Some("Trip planning".into()),
            created_at: Some("2024-03-05T14:30:00".into()),
        }),
        weather_data: Some(WeatherReport {
            location: Some(ReportLocation {
                name: Some("Kyiv".into()),
                region: Some("Kyiv City".into()),
                country: Some("Ukraine".into()),
            }),
            current: Some(CurrentConditions {
                temperature: Some(7.5),
                wind_speed: Some(14.0),
                humidity: Some(62.0),
                visibility: Some(10.0),
                weather_descriptions: Some(vec!["Overcast".into(), "Light rain".into()]),
            }),
        }),
    }
}

fn loaded(record: WeatherRecord) -> AppState {
    AppState {
        lookup_id: record.id.clone(),
        record: DataResource::Loaded(record),
        ..Default::default()
    }
}

#[test]
fn test_render_full_record() {
    let output = render_state(&loaded(full_record()));

    assert!(output.contains("Weather Data Found!"));
    assert!(output.contains("ID: sample-weather-123"));
    assert!(output.contains("March 5, 2024"), "short date:\n{}", output);
    assert!(
        output.contains("Mar 5, 2024, 02:30 PM"),
        "created-at timestamp:\n{}",
        output
    );
    assert!(output.contains("Kyiv, Kyiv City, Ukraine"));
    assert!(output.contains("Temp: 7.5°C"));
    assert!(output.contains("Gusts: 14 km/h"));
    assert!(output.contains("Prec: 62%"));
    assert!(output.contains("Visibility: 10 km"));
    assert!(output.contains("Overcast, Light rain"));
    assert!(output.contains("Trip planning"));
}

#[test]
fn test_render_sparse_record_omits_absent_rows() {
    let record = WeatherRecord {
        id: "sparse-1".into(),
        user_data: Some(UserData {
            date: Some("2024-03-05".into()),
            location: Some("Kyiv".into()),
            notes: None,
            created_at: None,
        }),
        weather_data: None,
    };
    let output = render_state(&loaded(record));

    assert!(output.contains("ID: sparse-1"));
    assert!(!output.contains("Notes:"), "absent notes leave no row");
    assert!(!output.contains("Current Weather"));
    assert!(!output.contains("Temp:"));
    assert!(!output.contains("Conditions:"));
}

#[test]
fn test_render_zero_valued_fields_are_omitted() {
    // Falsy-omission boundary: 0 hides wind/humidity/visibility but
    // temperature still renders
    let record = WeatherRecord {
        id: "zero-1".into(),
        user_data: None,
        weather_data: Some(WeatherReport {
            location: None,
            current: Some(CurrentConditions {
                temperature: Some(0.0),
                wind_speed: Some(0.0),
                humidity: Some(0.0),
                visibility: Some(0.0),
                weather_descriptions: None,
            }),
        }),
    };
    let output = render_state(&loaded(record));

    assert!(output.contains("Temp: 0°C"));
    assert!(!output.contains("Gusts:"));
    assert!(!output.contains("Prec:"));
    assert!(!output.contains("Visibility:"));
}

#[test]
fn test_render_location_suffixes_only_when_present() {
    let record = WeatherRecord {
        id: "loc-1".into(),
        user_data: None,
        weather_data: Some(WeatherReport {
            location: Some(ReportLocation {
                name: Some("Kyiv".into()),
                region: None,
                country: Some("Ukraine".into()),
            }),
            current: None,
        }),
    };
    let output = render_state(&loaded(record));

    assert!(output.contains("Kyiv, Ukraine"));
    assert!(!output.contains("Kyiv, , Ukraine"));
}

#[test]
fn test_render_unparseable_dates_fall_back_to_raw() {
    let record = WeatherRecord {
        id: "raw-1".into(),
        user_data: Some(UserData {
            date: Some("sometime in spring".into()),
            location: None,
            notes: None,
            created_at: Some("never".into()),
        }),
        weather_data: None,
    };
    let output = render_state(&loaded(record));

    assert!(output.contains("sometime in spring"));
    assert!(output.contains("Created: never"));
}

#[test]
fn test_render_error_state() {
    let state = AppState {
        lookup_id: "missing".into(),
        record: DataResource::Failed(
            "Weather data not found. Please check the ID and try again.".into(),
        ),
        ..Default::default()
    };
    let output = render_state(&state);

    assert!(output.contains("Weather data not found. Please check the ID"));
    assert!(
        !output.contains("Weather Data Found!"),
        "no result region alongside an error"
    );
}

#[test]
fn test_render_validation_error() {
    let state = AppState {
        record: DataResource::Failed("Please enter a weather ID".into()),
        ..Default::default()
    };
    let output = render_state(&state);

    assert!(output.contains("Please enter a weather ID"));
}

#[test]
fn test_render_loading_state() {
    let state = AppState {
        lookup_id: "abc".into(),
        record: DataResource::Loading,
        ..Default::default()
    };
    let output = render_state(&state);

    assert!(output.contains("Searching..."));
    assert!(!output.contains("Weather Data Found!"));
}

#[test]
fn test_render_title_and_hints() {
    let output = render_state(&AppState::default());

    assert!(output.contains("Weather Data Lookup"));
    assert!(output.contains("Look up weather data using your request ID"));
    assert!(output.contains("Weather ID"));
    assert!(output.contains("look up"), "status bar hint");
    assert!(output.contains("quit"), "status bar hint");
}

#[test]
fn test_render_empty_descriptions_list() {
    // Present-but-empty list still renders the row (with an empty value);
    // only an absent list omits it
    let record = WeatherRecord {
        id: "empty-desc".into(),
        user_data: None,
        weather_data: Some(WeatherReport {
            location: None,
            current: Some(CurrentConditions {
                temperature: Some(1.0),
                wind_speed: None,
                humidity: None,
                visibility: None,
                weather_descriptions: Some(vec![]),
            }),
        }),
    };
    let output = render_state(&loaded(record));

    assert!(output.contains("Conditions:"));
}
