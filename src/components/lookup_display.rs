use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::{DataResource, EventKind};
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, ErrorBanner, ErrorBannerProps, LookupForm, LookupFormProps, RecordCard,
    RecordCardProps,
};
use crate::action::Action;
use crate::state::AppState;

/// Card width cap; the card centers itself in wider terminals.
const CARD_WIDTH: u16 = 52;

/// Props for LookupDisplay - read-only view of state
pub struct LookupDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main lookup component: form, error banner, and result card.
pub struct LookupDisplay {
    form: LookupForm,
    banner: ErrorBanner,
    card: RecordCard,
}

impl Default for LookupDisplay {
    fn default() -> Self {
        Self {
            form: LookupForm::new(),
            banner: ErrorBanner,
            card: RecordCard,
        }
    }
}

impl LookupDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn form_props<'a>(state: &'a AppState, is_focused: bool) -> LookupFormProps<'a> {
        LookupFormProps {
            value: &state.lookup_id,
            loading: state.record.is_loading(),
            can_submit: state.can_submit(),
            tick_count: state.tick_count,
            is_focused,
            on_change: Action::LookupIdChange,
            on_submit: Action::LookupSubmit,
        }
    }
}

impl Component<Action> for LookupDisplay {
    type Props<'a> = LookupDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        // Esc quits even while a request is in flight
        if let EventKind::Key(key) = event {
            if key.code == KeyCode::Esc {
                return vec![Action::Quit];
            }
        }

        self.form
            .handle_event(event, Self::form_props(props.state, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Card
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let [card_area] = Layout::horizontal([Constraint::Max(CARD_WIDTH)])
            .flex(Flex::Center)
            .areas(chunks[0]);

        let rows = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Form (label + input + spacer + submit)
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Error banner or result card
        ])
        .split(card_area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Weather Data Lookup",
                Style::default().fg(Color::White).bold(),
            ))),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Look up weather data using your request ID",
                Style::default().fg(Color::DarkGray),
            ))),
            rows[1],
        );

        self.form
            .render(frame, rows[3], Self::form_props(props.state, props.is_focused));

        match &props.state.record {
            DataResource::Failed(message) => {
                self.banner
                    .render(frame, rows[5], ErrorBannerProps { message });
            }
            DataResource::Loaded(record) => {
                self.card.render(frame, rows[5], RecordCardProps { record });
            }
            DataResource::Loading | DataResource::Empty => {}
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "look up"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use tui_dispatch::testing::*;

    fn esc() -> EventKind {
        EventKind::Key(KeyEvent::from(KeyCode::Esc))
    }

    #[test]
    fn test_esc_quits() {
        let mut component = LookupDisplay::new();
        let state = AppState::default();
        let props = LookupDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component.handle_event(&esc(), props).into_iter().collect();
        actions.assert_count(1);
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn test_esc_quits_while_loading() {
        let mut component = LookupDisplay::new();
        let state = AppState {
            record: DataResource::Loading,
            ..Default::default()
        };
        let props = LookupDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component.handle_event(&esc(), props).into_iter().collect();
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn test_unfocused_ignores_events() {
        let mut component = LookupDisplay::new();
        let state = AppState::default();
        let props = LookupDisplayProps {
            state: &state,
            is_focused: false,
        };

        let actions: Vec<_> = component.handle_event(&esc(), props).into_iter().collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_empty_state() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = LookupDisplay::new();
        let state = AppState::default();

        let output = render.render_to_string_plain(|frame| {
            let props = LookupDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Weather Data Lookup"));
        assert!(output.contains("Look Up Weather Data"));
    }
}
