//! Text view rendering.
//!
//! Draws the visible lines of the active editor with:
//! - an optional line number gutter
//! - the primary cursor as an inverted cell, other cursors and selected text
//!   with the secondary cursor background
//! - the location preview highlight as an underlined, reversed cell
//!
//! Lines are not wrapped. When the primary cursor sits past the right edge,
//! every line is shifted left by the same amount so the cursor stays visible.

use crate::editor::view::BufferEditor;
use crate::host::{Position, Range, Selection, TextDocument, TextEditor};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders `editor` into `area`, or a placeholder when no document is open.
pub fn render_text_view(
    f: &mut Frame,
    area: Rect,
    editor: Option<&BufferEditor>,
    colors: &ThemeColors,
    show_line_numbers: bool,
) {
    let base_style = Style::default().fg(colors.foreground).bg(colors.background);

    let Some(editor) = editor else {
        let placeholder = Paragraph::new(Line::from("No document open"))
            .alignment(Alignment::Center)
            .style(base_style);
        f.render_widget(placeholder, area);
        return;
    };

    let document = editor.document();
    let line_count = document.line_count();
    let gutter_width = if show_line_numbers {
        line_count.to_string().len() + 1
    } else {
        0
    };

    let selections = editor.selections();
    let primary = editor.selection().active;
    let text_width = (area.width as usize).saturating_sub(gutter_width).max(1);
    let h_offset = (primary.character + 1).saturating_sub(text_width);

    let first = editor.scroll_offset();
    let last = (first + area.height as usize).min(line_count);

    let lines: Vec<Line> = (first..last)
        .map(|index| {
            let mut spans = Vec::new();
            if show_line_numbers {
                spans.push(Span::styled(
                    format!("{:>width$} ", index + 1, width = gutter_width - 1),
                    Style::default().fg(colors.line_number).bg(colors.background),
                ));
            }

            let content = document.line(index).unwrap_or("");
            let len = content.chars().count();
            let chars = content
                .chars()
                .chain(std::iter::once(' '))
                .enumerate()
                .skip(h_offset)
                .take(text_width);

            for (column, c) in chars {
                let position = Position::new(index, column);
                // the trailing space only exists to show a cursor at line end
                if column == len && !is_caret(&selections, position) {
                    continue;
                }
                let style = cell_style(
                    position,
                    primary,
                    &selections,
                    editor.decorations(),
                    colors,
                    base_style,
                );
                spans.push(Span::styled(c.to_string(), style));
            }
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).style(base_style), area);
}

fn is_caret(selections: &[Selection], position: Position) -> bool {
    selections.iter().any(|s| s.active == position)
}

fn cell_style(
    position: Position,
    primary: Position,
    selections: &[Selection],
    decorations: &[Range],
    colors: &ThemeColors,
    base: Style,
) -> Style {
    let mut style = base;

    if selections.iter().any(|s| s.range().contains(position)) {
        style = style.bg(colors.secondary_cursor);
    }
    if decorations.iter().any(|r| r.contains(position)) {
        style = style
            .fg(colors.location_highlight)
            .add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
    }

    if position == primary {
        style = style.fg(colors.background).bg(colors.cursor);
    } else if is_caret(selections, position) {
        style = style.bg(colors.secondary_cursor);
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::buffer::TextBuffer;
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(editor: Option<&BufferEditor>, show_line_numbers: bool) -> Vec<String> {
        let backend = TestBackend::new(30, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = get_builtin_theme("default-dark").unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                render_text_view(f, area, editor, &theme.colors, show_line_numbers);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..4u16)
            .map(|y| {
                (0..30u16)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_renders_placeholder_without_document() {
        let rows = render(None, true);
        assert!(rows[0].contains("No document"), "got: {:?}", rows);
    }

    #[test]
    fn test_renders_lines_with_gutter() {
        let editor = BufferEditor::new(TextBuffer::new("alpha\nbeta"));
        let rows = render(Some(&editor), true);
        assert!(rows[0].starts_with("1 alpha"), "got: {:?}", rows);
        assert!(rows[1].starts_with("2 beta"), "got: {:?}", rows);
    }

    #[test]
    fn test_shifts_long_lines_to_keep_cursor_visible() {
        let mut editor = BufferEditor::new(TextBuffer::new(format!("{}END", "x".repeat(60))));
        editor.move_line_end();
        let rows = render(Some(&editor), false);
        assert!(rows[0].contains("END"), "got: {:?}", rows);
    }
}
