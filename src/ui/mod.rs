pub mod edit_prompt;
pub mod message_area;
pub mod status_line;
pub mod text_view;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::app::App;
use crate::editor::mode::EditorMode;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// The UI is composed of three areas:
/// - Text view (top): the visible lines of the open document
/// - Status line (middle): mode, filename, location indicator and position
/// - Message area (bottom): messages, or the jump prompt while it is open
pub struct UI {
    theme: Theme,
    show_line_numbers: bool,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    ///
    /// # Example
    ///
    /// ```
    /// use kindleloc::ui::UI;
    /// use kindleloc::theme::get_builtin_theme;
    ///
    /// let theme = get_builtin_theme("default-dark").unwrap();
    /// let ui = UI::new(theme, true);
    /// assert_eq!(ui.theme_name(), "default-dark");
    /// ```
    pub fn new(theme: Theme, show_line_numbers: bool) -> Self {
        Self {
            theme,
            show_line_numbers,
        }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Renders the UI to the terminal.
    ///
    /// The editor's viewport height is updated from the layout before the
    /// text view is drawn, so reveal requests use the real screen size.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(&self, terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Text view
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message area
                ])
                .split(f.area());

            app.set_viewport_height(chunks[0].height as usize);

            text_view::render_text_view(
                f,
                chunks[0],
                app.workspace().editor(),
                &self.theme.colors,
                self.show_line_numbers,
            );

            status_line::render_status_line(f, chunks[1], app, &self.theme.colors);

            match (app.mode(), app.prompt()) {
                (EditorMode::Prompt, Some(prompt)) => edit_prompt::render_edit_prompt(
                    f,
                    chunks[2],
                    prompt.label(),
                    prompt.buffer(),
                    prompt.cursor(),
                    &self.theme.colors,
                ),
                _ => message_area::render_message_area(f, chunks[2], app, &self.theme.colors),
            }
        })?;

        Ok(())
    }
}
