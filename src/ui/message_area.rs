//! Message area rendering for displaying messages.

use crate::app::{App, MessageLevel};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the message area at the bottom of the screen.
///
/// Shows the current message colored by level, or nothing.
pub fn render_message_area(f: &mut Frame, area: Rect, app: &App, colors: &ThemeColors) {
    let content = match app.message() {
        Some(message) => {
            let color = match message.level {
                MessageLevel::Error => colors.error,
                MessageLevel::Warning => colors.warning,
                MessageLevel::Info => colors.info,
            };
            Line::from(vec![Span::styled(
                message.text.as_str(),
                Style::default().fg(color),
            )])
        }
        None => Line::from(""),
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
