use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::format;
use crate::state::{CurrentConditions, ReportLocation, WeatherRecord};

/// Card with the fetched record: request details plus current weather.
#[derive(Default)]
pub struct RecordCard;

pub struct RecordCardProps<'a> {
    pub record: &'a WeatherRecord,
}

fn header(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::White).bold(),
    ))
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label} "), Style::default().fg(Color::Gray).bold()),
        Span::raw(value),
    ])
}

fn dim_row(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

/// "name, region, country" with each suffix appended only when non-empty.
fn location_text(location: &ReportLocation) -> String {
    let mut text = location.name.clone().unwrap_or_default();
    for part in [&location.region, &location.country] {
        if let Some(part) = part.as_deref().filter(|p| !p.is_empty()) {
            text.push_str(", ");
            text.push_str(part);
        }
    }
    text
}

/// Absent and zero both hide the row (matches the original UI's truthiness
/// checks; zero-omission is pinned by tests as intended behavior).
fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

fn number(value: f64) -> String {
    format!("{}", value)
}

fn current_lines(current: &CurrentConditions, lines: &mut Vec<Line<'static>>) {
    // Temperature is the one unconditional reading
    let temp = current.temperature.map(number).unwrap_or_default();
    lines.push(row("Temp:", format!("{temp}°C")));

    if let Some(wind) = truthy(current.wind_speed) {
        lines.push(row("Gusts:", format!("{} km/h", number(wind))));
    }
    if let Some(humidity) = truthy(current.humidity) {
        lines.push(row("Prec:", format!("{}%", number(humidity))));
    }
    if let Some(visibility) = truthy(current.visibility) {
        lines.push(row("Visibility:", format!("{} km", number(visibility))));
    }
    if let Some(descriptions) = &current.weather_descriptions {
        lines.push(row("Conditions:", descriptions.join(", ")));
    }
}

pub fn card_lines(record: &WeatherRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        header("Weather Data Found!"),
        dim_row(format!("ID: {}", record.id)),
        Line::default(),
        header("Request Details"),
    ];

    let user = record.user_data.clone().unwrap_or_default();
    lines.push(row(
        "Date:",
        format::display_value(format::format_date(user.date.as_deref())),
    ));
    lines.push(row("Location:", user.location.unwrap_or_default()));
    if let Some(notes) = user.notes.filter(|n| !n.is_empty()) {
        lines.push(row("Notes:", notes));
    }
    lines.push(dim_row(format!(
        "  Created: {}",
        format::display_value(format::format_date_time(user.created_at.as_deref())),
    )));

    if let Some(report) = &record.weather_data {
        lines.push(Line::default());
        lines.push(header("Current Weather"));
        if let Some(location) = &report.location {
            lines.push(row("Location:", location_text(location)));
        }
        if let Some(current) = &report.current {
            current_lines(current, &mut lines);
        }
    }

    lines
}

impl Component<Action> for RecordCard {
    type Props<'a> = RecordCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.height == 0 {
            return;
        }
        frame.render_widget(
            Paragraph::new(card_lines(props.record)).wrap(Wrap { trim: false }),
            area,
        );
    }
}
