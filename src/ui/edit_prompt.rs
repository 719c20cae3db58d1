use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders an input prompt: the label followed by the buffer, with a block
/// cursor on the character at `cursor_pos` (counted in characters).
pub fn render_edit_prompt(
    f: &mut Frame,
    area: Rect,
    label: &str,
    buffer: &str,
    cursor_pos: usize,
    colors: &ThemeColors,
) {
    let chars: Vec<char> = buffer.chars().collect();
    let cursor_pos = cursor_pos.min(chars.len());

    // Split buffer into: text before cursor, char at cursor, text after cursor
    let before: String = chars.iter().take(cursor_pos).collect();
    let after: String = chars.iter().skip(cursor_pos + 1).collect();
    let char_at_cursor = chars.get(cursor_pos).copied().unwrap_or(' ');

    let label_style = Style::default().fg(colors.info).bg(colors.background);
    let text_style = Style::default()
        .fg(colors.foreground)
        .bg(colors.background)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(format!("{} ", label), label_style),
        Span::styled(before, text_style),
        // inverted cell as a block cursor
        Span::styled(
            char_at_cursor.to_string(),
            Style::default()
                .fg(colors.background)
                .bg(colors.cursor)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if !after.is_empty() {
        spans.push(Span::styled(after, text_style));
    }

    let prompt = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.background));
    f.render_widget(prompt, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_prompt_shows_label_and_buffer() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = get_builtin_theme("default-dark").unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                render_edit_prompt(f, area, "Location:", "42", 2, &theme.colors);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.starts_with("Location: 42"), "got: {}", text);
    }
}
