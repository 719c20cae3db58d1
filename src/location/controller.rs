//! Wires the translator and jump sessions into a host.
//!
//! The controller owns the status item and the current [`SessionState`]. It
//! never holds on to an editor: every entry point takes the [`Host`] and asks
//! it for the active editor again.

use super::error::LocationError;
use super::session::{JumpSession, SessionState};
use super::translator::PositionTranslator;
use crate::host::{
    Host, HostEvent, StatusAlignment, StatusIndicator, Subscription, TextDocument, TextEditor,
};

/// Command id of the jump-to-location command.
pub const JUMP_COMMAND: &str = "kindle-loc.kloc";

/// Configuration key for the status label.
pub const POSITION_NAME_KEY: &str = "kindle-loc.positionName";

/// Status label used when the configuration does not set one.
pub const DEFAULT_POSITION_NAME: &str = "kloc";

const STATUS_TOOLTIP: &str = "Go to location";
const STATUS_PRIORITY: i32 = 100;

/// What the host should ask the user when the jump command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Label shown next to the input
    pub prompt: String,
    /// Initial input contents
    pub value: String,
}

/// Keeps the location indicator current and drives jump sessions.
pub struct LocationController<S: StatusIndicator> {
    status_item: S,
    subscriptions: Vec<Subscription>,
    state: SessionState,
}

impl<S: StatusIndicator> LocationController<S> {
    /// Registers the status item, the jump command and the event
    /// subscriptions with `host`, then renders the indicator once.
    pub fn activate<H: Host<Status = S>>(host: &mut H) -> Self {
        let mut status_item = host.create_status_item(StatusAlignment::Right, STATUS_PRIORITY);
        status_item.set_command(JUMP_COMMAND);
        status_item.set_tooltip(STATUS_TOOLTIP);

        let subscriptions = vec![
            host.register_command(JUMP_COMMAND),
            host.subscribe(HostEvent::SelectionChanged),
            host.subscribe(HostEvent::ActiveEditorChanged),
        ];

        let mut controller = Self {
            status_item,
            subscriptions,
            state: SessionState::Idle,
        };
        controller.update_location(host);
        tracing::info!(command = JUMP_COMMAND, "location controller active");
        controller
    }

    pub fn status_item(&self) -> &S {
        &self.status_item
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_previewing(&self) -> bool {
        self.state.is_previewing()
    }

    /// Handles a host notification. Both kinds refresh the indicator.
    pub fn handle_event<H: Host<Status = S>>(&mut self, host: &mut H, event: HostEvent) {
        tracing::trace!(?event, "host event");
        self.update_location(host);
    }

    /// Recomputes the indicator text for the active editor, or hides the
    /// indicator when there is none.
    pub fn update_location<H: Host<Status = S>>(&mut self, host: &mut H) {
        let label = host
            .config_value(POSITION_NAME_KEY)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_POSITION_NAME.to_string());

        let Some(editor) = host.active_editor() else {
            self.status_item.hide();
            return;
        };

        let document = editor.document();
        let offset = document.offset_at(editor.selection().active);
        let units = PositionTranslator::new(document).location_units_at(offset);

        self.status_item.set_text(&format!("{} {:.1}", label, units));
        self.status_item.show();
    }

    /// Runs the jump command: opens a session and describes the prompt to
    /// show. Returns `None` when there is no active editor.
    ///
    /// A session that is still previewing is aborted first.
    pub fn go_to_location<H: Host<Status = S>>(&mut self, host: &mut H) -> Option<PromptRequest> {
        if self.state.is_previewing() {
            tracing::debug!("jump command while previewing, aborting previous session");
            self.finish(host, None);
        }

        let editor = host.active_editor()?;
        let session = JumpSession::begin(&*editor);

        let translator = PositionTranslator::new(editor.document());
        let current = translator.location_units_at(session.original_offset());
        let request = PromptRequest {
            prompt: format!(
                "Type a location number from 1 to {:.1}.",
                translator.max_location_units()
            ),
            value: format!("{}", current.floor() as u64),
        };

        tracing::debug!(
            original_offset = session.original_offset(),
            selections = session.working_selections().len() - 1,
            "jump session started"
        );
        self.state = SessionState::Previewing(session);
        Some(request)
    }

    /// Applies the location typed so far as a preview.
    ///
    /// Invalid and out-of-range input leave the editor untouched. Returns
    /// the previewed offset on success.
    pub fn preview<H: Host<Status = S>>(
        &mut self,
        host: &mut H,
        input: &str,
    ) -> Result<usize, LocationError> {
        let SessionState::Previewing(session) = &mut self.state else {
            return Err(LocationError::NoSession);
        };
        let Some(editor) = host.active_editor() else {
            return Err(LocationError::NoActiveEditor);
        };

        match session.preview(editor, input) {
            Ok(offset) => {
                tracing::debug!(input, offset, "preview");
                Ok(offset)
            }
            Err(err) => {
                match err {
                    LocationError::NoConvergence { .. } => tracing::warn!(%err, "preview failed"),
                    _ => tracing::debug!(%err, "preview rejected"),
                }
                Err(err)
            }
        }
    }

    /// Ends the session: commits when the prompt produced a value, aborts
    /// when it was dismissed. No-op while idle.
    pub fn finish<H: Host<Status = S>>(&mut self, host: &mut H, value: Option<&str>) {
        let Some(session) = self.state.take() else {
            return;
        };

        match host.active_editor() {
            Some(editor) => match value {
                Some(_) => {
                    let selection = session.commit(editor);
                    tracing::debug!(?selection, "jump committed");
                }
                None => {
                    session.abort(editor);
                    tracing::debug!("jump aborted");
                }
            },
            None => tracing::warn!("editor closed during jump session, dropping it"),
        }

        self.update_location(host);
    }

    /// Aborts any live session and releases everything registered in
    /// [`LocationController::activate`].
    pub fn dispose<H: Host<Status = S>>(mut self, host: &mut H) {
        self.finish(host, None);
        for subscription in self.subscriptions.drain(..) {
            host.unsubscribe(subscription);
        }
        self.status_item.dispose();
        tracing::info!("location controller disposed");
    }
}
