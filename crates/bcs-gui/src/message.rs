//! Message types for the Elm-style architecture.
//!
//! Everything that can happen flows through [`Message`]. Catalogue search
//! interactions are not duplicated here: they are `bcs-core` session events,
//! wrapped verbatim so the widget layer stays a thin shell around the state
//! machine.

use bcs_core::SessionEvent;
use bcs_model::DatasetSummary;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// A named event for the catalogue session state machine, raised by the
    /// widgets or by completed background work.
    Session(SessionEvent),

    /// The catalogue directory (selector options) finished loading.
    /// The error variant carries a user-facing message.
    DirectoryLoaded(Result<Vec<DatasetSummary>, String>),

    /// Retry loading the catalogue directory after a failure.
    ReloadDirectory,
}

impl Message {
    /// Convenience constructor for wrapped session events.
    pub fn session(event: SessionEvent) -> Self {
        Self::Session(event)
    }
}
