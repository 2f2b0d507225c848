//! Application state.
//!
//! The catalogue session (selection, counters, filter, suggestions, rows)
//! lives in `bcs-core` and is mutated exclusively through its event handler.
//! This module only adds the state the shell itself owns: the selector's
//! catalogue directory and the loaded settings.

use std::fmt;

use bcs_core::CatalogueSession;
use bcs_model::DatasetSummary;

use crate::settings::ServerSettings;

/// Top-level application state.
pub struct AppState {
    /// The catalogue search session (the core state machine).
    pub session: CatalogueSession,
    /// Options for the catalogue selector.
    pub directory: DirectoryState,
    /// Server connection settings (loaded once at startup).
    pub settings: ServerSettings,
}

impl AppState {
    /// Create the initial state with loaded settings.
    pub fn new(settings: ServerSettings) -> Self {
        Self {
            session: CatalogueSession::new(),
            directory: DirectoryState::Loading,
            settings,
        }
    }
}

/// Loading state of the catalogue directory shown in the selector.
#[derive(Debug, Clone)]
pub enum DirectoryState {
    /// Directory fetch in flight.
    Loading,
    /// Selector options available.
    Ready(Vec<CatalogueChoice>),
    /// Directory fetch failed; carries a user-facing message.
    Failed(String),
}

impl DirectoryState {
    /// Selector options, empty while loading or failed.
    pub fn choices(&self) -> &[CatalogueChoice] {
        match self {
            Self::Ready(choices) => choices,
            Self::Loading | Self::Failed(_) => &[],
        }
    }
}

/// One selectable catalogue in the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueChoice {
    pub id: String,
    pub name: String,
}

impl CatalogueChoice {
    /// Build the selector options from a dataset listing, skipping entries
    /// whose href carries no usable id.
    pub fn from_listing(datasets: &[DatasetSummary]) -> Vec<Self> {
        datasets
            .iter()
            .filter_map(|dataset| {
                Some(Self {
                    id: dataset.id()?.to_string(),
                    name: dataset.name.clone(),
                })
            })
            .collect()
    }
}

impl fmt::Display for CatalogueChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
