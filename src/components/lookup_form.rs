use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const IDLE_LABEL: &str = "Look Up Weather Data";
pub const LOADING_LABEL: &str = "Searching...";

const SEARCH_ICON: &str = "\u{1f50d}";
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The Weather ID input plus the submit row.
pub struct LookupForm {
    input: TextInput,
}

pub struct LookupFormProps<'a> {
    pub value: &'a str,
    pub loading: bool,
    pub can_submit: bool,
    pub tick_count: u32,
    pub is_focused: bool,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl Default for LookupForm {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl LookupForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn submit_row(props: &LookupFormProps<'_>) -> Line<'static> {
        let (icon, label) = if props.loading {
            let frame = SPINNER_FRAMES[props.tick_count as usize % SPINNER_FRAMES.len()];
            (frame, LOADING_LABEL)
        } else {
            (SEARCH_ICON, IDLE_LABEL)
        };

        let style = if props.can_submit {
            Style::default().fg(Color::Cyan).bold()
        } else {
            // Disabled: loading, or nothing to submit yet
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };

        Line::from(vec![
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(label, style),
        ])
    }
}

impl Component<Action> for LookupForm {
    type Props<'a> = LookupFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.loading {
            // The whole form is disabled while a request is in flight
            return Vec::new();
        }

        let input_props = TextInputProps {
            value: props.value,
            placeholder: "Enter weather ID (e.g., sample-weather-123)",
            is_focused: true,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::xy(1, 0),
                    bg: Some(Color::Rgb(50, 50, 60)),
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };

        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Label
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Submit row
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Weather ID",
                Style::default().fg(Color::Gray),
            ))),
            chunks[0],
        );

        let input_props = TextInputProps {
            value: props.value,
            placeholder: "Enter weather ID (e.g., sample-weather-123)",
            is_focused: props.is_focused && !props.loading,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::xy(1, 0),
                    bg: Some(Color::Rgb(50, 50, 60)),
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[1], input_props);

        frame.render_widget(Paragraph::new(Self::submit_row(&props)), chunks[3]);
    }
}
