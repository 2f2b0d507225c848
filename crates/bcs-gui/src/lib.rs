//! Biobank Catalogue Studio - GUI Library
//!
//! Desktop application for browsing biobank catalogues: pick a dataset,
//! see how many data items it exposes, and search them incrementally.
//!
//! Built with Iced 0.14.0 using the Elm architecture. All search/selection
//! synchronization lives in `bcs-core`; this crate only wraps core events
//! into Iced messages, runs the core's commands as background tasks, and
//! renders the resulting state.

pub mod app;
pub mod component;
pub mod message;
pub mod service;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;
