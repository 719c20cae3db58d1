//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - Current mode (NORMAL, PROMPT)
//! - Filename (or "[No Name]" when reading stdin)
//! - The location indicator, while it is visible
//! - Cursor position (line and column)
//!
//! Example status line: `NORMAL | book.txt                 kloc 12.4  Ln 40, Col 7`

use crate::app::App;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line for `app` into `area`.
pub fn render_status_line(f: &mut Frame, area: Rect, app: &App, colors: &ThemeColors) {
    let default_style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);
    let location_style = Style::default()
        .fg(colors.status_item)
        .bg(colors.status_line_bg);

    let workspace = app.workspace();
    let filename = match (workspace.editor(), workspace.filename()) {
        (None, _) => "[No Document]",
        (Some(_), Some(name)) => name,
        (Some(_), None) => "[No Name]",
    };
    let left = format!("{} | {}", app.mode(), filename);

    let location = app
        .status_item()
        .filter(|item| item.is_visible())
        .map(|item| format!("{}  ", item.text()))
        .unwrap_or_default();

    let position = app
        .cursor_position()
        .map(|(line, column)| format!("Ln {}, Col {}", line, column))
        .unwrap_or_default();

    // Calculate padding to position right-aligned text
    let total_width = area.width as usize;
    let used = left.chars().count() + location.chars().count() + position.chars().count();
    let padding = if used + 1 < total_width {
        total_width - used
    } else {
        1
    };

    let mut spans = vec![
        Span::styled(left, default_style),
        Span::styled(" ".repeat(padding), default_style),
    ];
    if !location.is_empty() {
        spans.push(Span::styled(location, location_style));
    }
    spans.push(Span::styled(position, default_style));

    let status = Paragraph::new(Line::from(spans)).style(default_style);
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::document::buffer::TextBuffer;
    use crate::editor::view::BufferEditor;
    use crate::theme;
    use crate::workspace::Workspace;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_text(app: &App) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = theme::get_builtin_theme("default-dark").unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                render_status_line(f, area, app, &theme.colors);
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_status_line_without_document() {
        let app = App::new(Workspace::new(Config::default()));
        let text = render_to_text(&app);

        assert!(text.contains("[No Document]"), "got: {}", text);
        assert!(!text.contains("kloc"), "indicator should be hidden: {}", text);
    }

    #[test]
    fn test_status_line_shows_location_and_position() {
        let mut app = App::new(Workspace::new(Config::default()));
        let editor = BufferEditor::new(TextBuffer::new("a".repeat(600)));
        app.open_document(editor, Some("book.txt".to_string()));

        let text = render_to_text(&app);
        assert!(text.contains("NORMAL | book.txt"), "got: {}", text);
        assert!(text.contains("kloc 0.0"), "got: {}", text);
        assert!(text.contains("Ln 1, Col 1"), "got: {}", text);
    }
}
