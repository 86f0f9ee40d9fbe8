use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Banner shown below the form whenever a lookup has failed.
#[derive(Default)]
pub struct ErrorBanner;

pub struct ErrorBannerProps<'a> {
    pub message: &'a str,
}

impl Component<Action> for ErrorBanner {
    type Props<'a> = ErrorBannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.height == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::raw(ERROR_ICON),
            Span::raw(" "),
            Span::styled(
                props.message.to_string(),
                Style::default().fg(Color::Rgb(220, 90, 90)).bold(),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(line).wrap(ratatui::widgets::Wrap { trim: true }),
            area,
        );
    }
}
