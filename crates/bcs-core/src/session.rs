//! The catalogue session: selection, matrix refresh, and suggestion
//! controllers over one shared state.
//!
//! # Events and commands
//!
//! The widget layer raises [`SessionEvent`]s; [`CatalogueSession::handle`]
//! reduces them synchronously and returns the [`SessionCommand`]s the host
//! must execute asynchronously. Completion events carry back the token their
//! command was issued under.
//!
//! # Suggestion state machine
//!
//! | State    | Event                           | Next     | Effect                       |
//! |----------|---------------------------------|----------|------------------------------|
//! | Idle     | input, length >= 3              | Fetching | fetch suggestions (cap 20)   |
//! | Fetching | input, length >= 3              | Fetching | supersede, fetch again       |
//! | any      | input, length 1..3              | Idle     | clear suggestions            |
//! | any      | input cleared to empty          | Idle     | clear, unfiltered refresh    |
//! | any      | Enter / search button           | Idle     | clear, refresh with text     |
//! | Fetching | current-token response          | Idle     | show (or silently drop) list |
//! | Fetching | stale-token response            | (same)   | discarded                    |
//!
//! Suggestion fetch failures are silent: suggestions are an enhancement, not
//! a requirement for searching.

use thiserror::Error;
use tracing::{debug, info, warn};

use bcs_model::{Dataset, SearchRequest, SearchResponse, SortRule, Suggestion};

use crate::render::{MatrixRow, render_row};
use crate::token::{RequestToken, TokenSeries};

/// Minimum free-text length before suggestions are fetched.
pub const SUGGEST_MIN_LENGTH: usize = 3;

/// Maximum number of suggestions requested per fetch.
pub const SUGGEST_MAX_ITEMS: usize = 20;

// =============================================================================
// EVENTS & COMMANDS
// =============================================================================

/// Named events raised into the session by the widget layer and by completed
/// background work.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The catalogue selector changed. `None` means "nothing selected".
    CatalogueSelected(Option<String>),
    /// Dataset metadata resolution finished.
    CatalogueResolved {
        token: RequestToken,
        result: Result<Dataset, FetchFailure>,
    },
    /// The count-style search for a freshly selected catalogue finished.
    CountCompleted {
        token: RequestToken,
        result: Result<SearchResponse, FetchFailure>,
    },
    /// A matrix refresh finished.
    MatrixCompleted {
        token: RequestToken,
        result: Result<SearchResponse, FetchFailure>,
    },
    /// A suggestion fetch finished.
    SuggestionsCompleted {
        token: RequestToken,
        result: Result<Vec<Suggestion>, FetchFailure>,
    },
    /// A keystroke changed the free-text input.
    SearchInputChanged(String),
    /// Enter was pressed in the free-text input.
    SearchSubmitted,
    /// The explicit search control was activated.
    SearchButtonPressed,
    /// A suggestion was picked from the typeahead list.
    SuggestionPicked(String),
    /// The inline error was dismissed.
    ErrorDismissed,
}

/// Asynchronous work the host must run on behalf of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Resolve dataset metadata (with the protocol reference expanded).
    ResolveCatalogue {
        token: RequestToken,
        dataset_id: String,
    },
    /// Run the count-style query for a freshly selected catalogue.
    RunCount {
        token: RequestToken,
        request: SearchRequest,
    },
    /// Run a search and replace the matrix contents with its items.
    RefreshMatrix {
        token: RequestToken,
        request: SearchRequest,
    },
    /// Fetch typeahead suggestions scoped to the current dataset.
    FetchSuggestions {
        token: RequestToken,
        dataset_id: String,
        text: String,
        max_items: usize,
    },
}

/// Why a background fetch failed, as far as the session cares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The resource no longer exists.
    #[error("resource not found")]
    NotFound,
    /// The service could not be reached or answered with an error.
    #[error("{0}")]
    Unavailable(String),
}

// =============================================================================
// SESSION STATE
// =============================================================================

/// The successfully resolved catalogue currently in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveCatalogue {
    pub dataset_id: String,
    pub name: String,
    /// Search scope: the id of the protocol rooting the item hierarchy.
    pub protocol_id: String,
}

/// Suggestion controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestPhase {
    #[default]
    Idle,
    Fetching,
}

#[derive(Debug, Default)]
struct SessionTokens {
    resolve: TokenSeries,
    count: TokenSeries,
    matrix: TokenSeries,
    suggest: TokenSeries,
}

impl SessionTokens {
    /// Logically cancel every outstanding operation.
    fn supersede_all(&mut self) {
        self.resolve.supersede();
        self.count.supersede();
        self.matrix.supersede();
        self.suggest.supersede();
    }
}

/// Root state of the catalogue search page.
///
/// Created once at startup and mutated exclusively through
/// [`CatalogueSession::handle`]; views only read.
#[derive(Debug, Default)]
pub struct CatalogueSession {
    /// Last successfully resolved catalogue; `None` is "nothing selected".
    active: Option<ActiveCatalogue>,
    /// Dataset id currently being resolved, if any.
    pending: Option<String>,
    /// Inline error for the affected display region.
    error: Option<String>,
    /// Total observable features reported by the count query.
    total_items: Option<u64>,
    /// Current free-text filter, exactly as typed.
    filter: String,
    suggestions: Vec<Suggestion>,
    suggest_phase: SuggestPhase,
    rows: Vec<MatrixRow>,
    /// Optional backend sort, passed through on matrix refreshes.
    sort: Option<SortRule>,
    tokens: SessionTokens,
}

impl CatalogueSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a pass-through sort rule for matrix refreshes. Default: none,
    /// leaving result order entirely backend-defined.
    #[must_use]
    pub fn with_sort_rule(mut self, sort: SortRule) -> Self {
        self.sort = Some(sort);
        self
    }

    // -------------------------------------------------------------------------
    // Read accessors for the view layer
    // -------------------------------------------------------------------------

    /// The resolved catalogue currently in effect.
    pub fn active(&self) -> Option<&ActiveCatalogue> {
        self.active.as_ref()
    }

    /// The dataset id the selector should show as selected.
    pub fn selected_dataset_id(&self) -> Option<&str> {
        self.pending
            .as_deref()
            .or(self.active.as_ref().map(|c| c.dataset_id.as_str()))
    }

    /// Whether a selection is waiting on metadata resolution.
    pub fn is_resolving(&self) -> bool {
        self.pending.is_some()
    }

    /// Total observable features in the selected catalogue, once counted.
    pub fn total_items(&self) -> Option<u64> {
        self.total_items
    }

    /// Current free-text filter.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn suggest_phase(&self) -> SuggestPhase {
        self.suggest_phase
    }

    /// Rendered matrix rows, in backend order.
    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    /// Inline error to display, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // -------------------------------------------------------------------------
    // Event handling
    // -------------------------------------------------------------------------

    /// Reduce one event, returning the commands the host must execute.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<SessionCommand> {
        match event {
            SessionEvent::CatalogueSelected(selection) => self.on_selected(selection),
            SessionEvent::CatalogueResolved { token, result } => self.on_resolved(token, result),
            SessionEvent::CountCompleted { token, result } => self.on_counted(token, result),
            SessionEvent::MatrixCompleted { token, result } => self.on_matrix(token, result),
            SessionEvent::SuggestionsCompleted { token, result } => {
                self.on_suggestions(token, result)
            }
            SessionEvent::SearchInputChanged(text) => self.on_input(text),
            SessionEvent::SearchSubmitted | SessionEvent::SearchButtonPressed => self.on_submit(),
            SessionEvent::SuggestionPicked(name) => self.on_suggestion_picked(name),
            SessionEvent::ErrorDismissed => {
                self.error = None;
                Vec::new()
            }
        }
    }

    fn on_selected(&mut self, selection: Option<String>) -> Vec<SessionCommand> {
        // Either way, responses still in flight for the previous selection
        // must never reach the screen.
        self.tokens.supersede_all();
        self.suggest_phase = SuggestPhase::Idle;
        self.error = None;

        match selection {
            None => {
                info!("catalogue selection cleared");
                self.reset_to_nothing_selected();
                Vec::new()
            }
            Some(dataset_id) => {
                info!(%dataset_id, "catalogue selected, resolving metadata");
                self.pending = Some(dataset_id.clone());
                let token = self.tokens.resolve.issue();
                vec![SessionCommand::ResolveCatalogue { token, dataset_id }]
            }
        }
    }

    fn on_resolved(
        &mut self,
        token: RequestToken,
        result: Result<Dataset, FetchFailure>,
    ) -> Vec<SessionCommand> {
        if !self.tokens.resolve.is_current(token) {
            warn!("discarding stale catalogue resolution");
            return Vec::new();
        }
        let requested_id = self.pending.take();

        match result {
            Ok(dataset) => {
                let Some(protocol_id) = dataset.protocol_id().map(str::to_string) else {
                    warn!(name = %dataset.name, "dataset metadata carries no protocol reference");
                    self.error = Some(format!(
                        "Catalogue \"{}\" has no item hierarchy attached.",
                        dataset.name
                    ));
                    return Vec::new();
                };
                let dataset_id = dataset
                    .id()
                    .map(str::to_string)
                    .or(requested_id)
                    .unwrap_or_default();

                info!(%dataset_id, %protocol_id, name = %dataset.name, "catalogue resolved");
                self.active = Some(ActiveCatalogue {
                    dataset_id,
                    name: dataset.name,
                    protocol_id: protocol_id.clone(),
                });
                // Fresh catalogue, fresh page: stale filter text, suggestions,
                // and rows from the previous catalogue never carry over.
                self.total_items = None;
                self.filter.clear();
                self.suggestions.clear();
                self.rows.clear();

                let token = self.tokens.count.issue();
                let request = SearchRequest::count(&protocol_id);
                debug!(?token, "issuing count query");
                vec![SessionCommand::RunCount { token, request }]
            }
            Err(FetchFailure::NotFound) => {
                warn!("selected catalogue no longer resolvable");
                self.reset_to_nothing_selected();
                self.error = Some("The selected catalogue no longer exists.".to_string());
                Vec::new()
            }
            Err(FetchFailure::Unavailable(message)) => {
                // No partial update: name and counters keep whatever they
                // showed before this selection attempt.
                warn!(%message, "catalogue resolution failed");
                self.error = Some(message);
                Vec::new()
            }
        }
    }

    fn on_counted(
        &mut self,
        token: RequestToken,
        result: Result<SearchResponse, FetchFailure>,
    ) -> Vec<SessionCommand> {
        if !self.tokens.count.is_current(token) {
            warn!("discarding stale count response");
            return Vec::new();
        }

        match result {
            Ok(response) => {
                debug!(total = response.total_hit_count, "count query completed");
                self.total_items = Some(response.total_hit_count);
                self.error = None;
                // Reuse the count-style query to fill the matrix for the same
                // scope, so the table matches the counter by construction.
                self.issue_matrix_refresh().into_iter().collect()
            }
            Err(failure) => {
                warn!(%failure, "count query failed");
                self.error = Some(failure.to_string());
                Vec::new()
            }
        }
    }

    fn on_matrix(
        &mut self,
        token: RequestToken,
        result: Result<SearchResponse, FetchFailure>,
    ) -> Vec<SessionCommand> {
        if !self.tokens.matrix.is_current(token) {
            warn!("discarding stale matrix response");
            return Vec::new();
        }

        match result {
            Ok(response) => {
                debug!(items = response.items.len(), "matrix refresh completed");
                self.rows = response.items.iter().map(render_row).collect();
                self.error = None;
            }
            Err(failure) => {
                // Keep the last good rows on screen; only the banner changes.
                warn!(%failure, "matrix refresh failed");
                self.error = Some(failure.to_string());
            }
        }
        Vec::new()
    }

    fn on_suggestions(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Suggestion>, FetchFailure>,
    ) -> Vec<SessionCommand> {
        if !self.tokens.suggest.is_current(token) {
            debug!("discarding superseded suggestion response");
            return Vec::new();
        }
        self.suggest_phase = SuggestPhase::Idle;

        match result {
            Ok(suggestions) => {
                debug!(count = suggestions.len(), "suggestions received");
                self.suggestions = suggestions;
            }
            Err(failure) => {
                // Best-effort: failures silently yield no suggestions.
                debug!(%failure, "suggestion fetch failed");
                self.suggestions.clear();
            }
        }
        Vec::new()
    }

    fn on_input(&mut self, text: String) -> Vec<SessionCommand> {
        let Some(active) = self.active.clone() else {
            return Vec::new();
        };
        self.filter = text;

        if self.filter.is_empty() {
            // Deleting the filter reverts the table to the unfiltered
            // dataset-scope listing.
            self.clear_suggestions();
            return self.issue_matrix_refresh().into_iter().collect();
        }

        if self.filter.chars().count() < SUGGEST_MIN_LENGTH {
            self.clear_suggestions();
            return Vec::new();
        }

        // A new keystroke supersedes any in-flight fetch: only the latest
        // keystroke's response may update the list.
        self.suggest_phase = SuggestPhase::Fetching;
        let token = self.tokens.suggest.issue();
        debug!(?token, text = %self.filter, "fetching suggestions");
        vec![SessionCommand::FetchSuggestions {
            token,
            dataset_id: active.dataset_id,
            text: self.filter.clone(),
            max_items: SUGGEST_MAX_ITEMS,
        }]
    }

    fn on_submit(&mut self) -> Vec<SessionCommand> {
        if self.active.is_none() {
            return Vec::new();
        }
        // Explicit search short-circuits suggestion display.
        self.clear_suggestions();
        self.issue_matrix_refresh().into_iter().collect()
    }

    fn on_suggestion_picked(&mut self, name: String) -> Vec<SessionCommand> {
        if self.active.is_none() {
            return Vec::new();
        }
        self.filter = name;
        self.clear_suggestions();
        self.issue_matrix_refresh().into_iter().collect()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn reset_to_nothing_selected(&mut self) {
        self.active = None;
        self.pending = None;
        self.total_items = None;
        self.filter.clear();
        self.suggestions.clear();
        self.suggest_phase = SuggestPhase::Idle;
        self.rows.clear();
    }

    fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggest_phase = SuggestPhase::Idle;
        self.tokens.suggest.supersede();
    }

    /// Issue a matrix refresh for the current scope and filter.
    fn issue_matrix_refresh(&mut self) -> Option<SessionCommand> {
        let scope = self.active.as_ref()?;
        let mut request = if self.filter.is_empty() {
            SearchRequest::count(&scope.protocol_id)
        } else {
            SearchRequest::filtered(&scope.protocol_id, &self.filter)
        };
        if let Some(sort) = self.sort.clone() {
            request = request.with_sort(sort);
        }
        let token = self.tokens.matrix.issue();
        debug!(?token, filtered = !self.filter.is_empty(), "refreshing matrix");
        Some(SessionCommand::RefreshMatrix { token, request })
    }
}
