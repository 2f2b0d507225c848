//! Selection/search synchronization core for Biobank Catalogue Studio.
//!
//! This crate is the application's state machine, kept deliberately free of
//! any widget toolkit. The widget layer raises [`SessionEvent`]s into
//! [`CatalogueSession::handle`]; the session mutates its state synchronously
//! and returns [`SessionCommand`]s describing the asynchronous work the host
//! must run (dataset resolution, searches, suggestion fetches). Completions
//! come back as events carrying the [`RequestToken`] they were issued under.
//!
//! # Ordering
//!
//! Each logical operation (selection resolution, count, matrix refresh,
//! suggestion fetch) owns a [`TokenSeries`]. A completion whose token is no
//! longer current for its series is discarded on arrival: no state mutation,
//! no error. This is what prevents a slow response for an earlier selection
//! from overwriting a newer selection's results.

mod render;
mod session;
mod token;

pub use render::{
    DESCRIPTION_PREVIEW_LIMIT, DescriptionCell, MatrixRow, TRUNCATION_MARKER, render_row,
};
pub use session::{
    ActiveCatalogue, CatalogueSession, FetchFailure, SUGGEST_MAX_ITEMS, SUGGEST_MIN_LENGTH,
    SessionCommand, SessionEvent, SuggestPhase,
};
pub use token::{RequestToken, TokenSeries};
