//! Location numbering for open documents.
//!
//! A "location" is an e-reader style position counter: the document is cut
//! into fixed-size chunks of UTF-8 bytes and the cursor's location is the
//! number of chunks before it. This module converts between locations and
//! document offsets and runs the interactive jump workflow.
//!
//! # Modules
//!
//! - `translator`: offset <-> location conversion and offset search
//! - `session`: the preview/commit/abort state machine
//! - `controller`: status indicator updates and the jump command
//! - `error`: reasons a location request is refused

pub mod controller;
pub mod error;
pub mod session;
pub mod translator;

pub use controller::{LocationController, PromptRequest, JUMP_COMMAND};
pub use error::LocationError;
pub use session::{JumpSession, SessionState};
pub use translator::{PositionTranslator, BYTES_PER_LOCATION, TOLERANCE};
