//! End-to-end tests for the catalogue session state machine.
//!
//! These drive the public API exactly the way the widget layer does: raise
//! an event, run the returned commands "in the background", then deliver the
//! completion events, in whatever order the scenario calls for.

use bcs_core::{
    CatalogueSession, FetchFailure, RequestToken, SUGGEST_MAX_ITEMS, SessionCommand, SessionEvent,
    SuggestPhase,
};
use bcs_model::{
    DataItem, Dataset, ResourceRef, SearchRequest, SearchResponse, SortOrder, SortRule, Suggestion,
};

fn dataset(id: &str, name: &str, protocol_id: &str) -> Dataset {
    Dataset {
        href: format!("/api/v1/dataset/{id}"),
        name: name.to_string(),
        protocol_used: ResourceRef::new(format!("/api/v1/protocol/{protocol_id}")),
    }
}

fn response(total: u64, names: &[&str]) -> SearchResponse {
    SearchResponse {
        total_hit_count: total,
        items: names
            .iter()
            .map(|name| DataItem {
                name: (*name).to_string(),
                description: format!("{name} description"),
            })
            .collect(),
    }
}

fn suggestions(names: &[&str]) -> Vec<Suggestion> {
    names
        .iter()
        .map(|name| Suggestion {
            name: (*name).to_string(),
        })
        .collect()
}

fn expect_resolve(commands: &[SessionCommand]) -> (RequestToken, String) {
    match commands {
        [SessionCommand::ResolveCatalogue { token, dataset_id }] => (*token, dataset_id.clone()),
        other => panic!("expected a single ResolveCatalogue command, got {other:?}"),
    }
}

fn expect_count(commands: &[SessionCommand]) -> (RequestToken, SearchRequest) {
    match commands {
        [SessionCommand::RunCount { token, request }] => (*token, request.clone()),
        other => panic!("expected a single RunCount command, got {other:?}"),
    }
}

fn expect_matrix(commands: &[SessionCommand]) -> (RequestToken, SearchRequest) {
    match commands {
        [SessionCommand::RefreshMatrix { token, request }] => (*token, request.clone()),
        other => panic!("expected a single RefreshMatrix command, got {other:?}"),
    }
}

fn expect_suggest(commands: &[SessionCommand]) -> (RequestToken, String, String, usize) {
    match commands {
        [SessionCommand::FetchSuggestions {
            token,
            dataset_id,
            text,
            max_items,
        }] => (*token, dataset_id.clone(), text.clone(), *max_items),
        other => panic!("expected a single FetchSuggestions command, got {other:?}"),
    }
}

/// Select a catalogue and play the happy path through to a populated matrix.
fn select_and_settle(session: &mut CatalogueSession, id: &str, name: &str, protocol_id: &str) {
    let commands = session.handle(SessionEvent::CatalogueSelected(Some(id.to_string())));
    let (token, _) = expect_resolve(&commands);
    let commands = session.handle(SessionEvent::CatalogueResolved {
        token,
        result: Ok(dataset(id, name, protocol_id)),
    });
    let (token, _) = expect_count(&commands);
    let commands = session.handle(SessionEvent::CountCompleted {
        token,
        result: Ok(response(42, &[])),
    });
    let (token, _) = expect_matrix(&commands);
    session.handle(SessionEvent::MatrixCompleted {
        token,
        result: Ok(response(42, &["Weight", "Height"])),
    });
}

// =============================================================================
// SELECTION
// =============================================================================

#[test]
fn selection_resolves_counts_and_fills_matrix() {
    let mut session = CatalogueSession::new();

    let commands = session.handle(SessionEvent::CatalogueSelected(Some("1".to_string())));
    let (token, dataset_id) = expect_resolve(&commands);
    assert_eq!(dataset_id, "1");
    assert!(session.is_resolving());

    let commands = session.handle(SessionEvent::CatalogueResolved {
        token,
        result: Ok(dataset("1", "Lifelines", "P1")),
    });
    let (token, request) = expect_count(&commands);
    assert_eq!(request, SearchRequest::count("P1"));
    assert_eq!(session.active().unwrap().name, "Lifelines");
    assert_eq!(session.active().unwrap().protocol_id, "P1");

    let commands = session.handle(SessionEvent::CountCompleted {
        token,
        result: Ok(response(42, &[])),
    });
    assert_eq!(session.total_items(), Some(42));
    let (token, request) = expect_matrix(&commands);
    // The count-style query is reused to fetch the documents.
    assert_eq!(request, SearchRequest::count("P1"));

    session.handle(SessionEvent::MatrixCompleted {
        token,
        result: Ok(response(42, &["Weight", "Height"])),
    });
    let rows = session.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Weight");
    assert_eq!(rows[1].name, "Height");
}

#[test]
fn empty_selection_resets_and_issues_nothing() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    let commands = session.handle(SessionEvent::CatalogueSelected(None));
    assert!(commands.is_empty());
    assert!(session.active().is_none());
    assert_eq!(session.total_items(), None);
    assert!(session.rows().is_empty());
    assert_eq!(session.filter(), "");
}

#[test]
fn late_response_for_superseded_selection_has_no_visible_effect() {
    let mut session = CatalogueSession::new();

    let commands = session.handle(SessionEvent::CatalogueSelected(Some("1".to_string())));
    let (first_token, _) = expect_resolve(&commands);

    // A second selection before the first resolves.
    let commands = session.handle(SessionEvent::CatalogueSelected(Some("2".to_string())));
    let (second_token, _) = expect_resolve(&commands);

    // The slow first response arrives afterwards: discarded.
    let commands = session.handle(SessionEvent::CatalogueResolved {
        token: first_token,
        result: Ok(dataset("1", "Lifelines", "P1")),
    });
    assert!(commands.is_empty());
    assert!(session.active().is_none());

    // Only the second selection's data is ever displayed.
    let commands = session.handle(SessionEvent::CatalogueResolved {
        token: second_token,
        result: Ok(dataset("2", "Prevend", "P2")),
    });
    expect_count(&commands);
    assert_eq!(session.active().unwrap().name, "Prevend");
}

#[test]
fn clearing_selection_cancels_pending_resolution() {
    let mut session = CatalogueSession::new();

    let commands = session.handle(SessionEvent::CatalogueSelected(Some("1".to_string())));
    let (token, _) = expect_resolve(&commands);

    session.handle(SessionEvent::CatalogueSelected(None));

    let commands = session.handle(SessionEvent::CatalogueResolved {
        token,
        result: Ok(dataset("1", "Lifelines", "P1")),
    });
    assert!(commands.is_empty());
    assert!(session.active().is_none());
    assert_eq!(session.total_items(), None);
}

#[test]
fn stale_matrix_response_never_overwrites_newer_selection() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    // Kick off a filtered refresh on the first catalogue...
    let commands = session.handle(SessionEvent::SearchInputChanged("weight".to_string()));
    expect_suggest(&commands);
    let commands = session.handle(SessionEvent::SearchSubmitted);
    let (slow_matrix_token, _) = expect_matrix(&commands);

    // ...then switch catalogues before it lands.
    select_and_settle(&mut session, "2", "Prevend", "P2");
    let rows_before: Vec<_> = session.rows().to_vec();

    let commands = session.handle(SessionEvent::MatrixCompleted {
        token: slow_matrix_token,
        result: Ok(response(1, &["Stale item"])),
    });
    assert!(commands.is_empty());
    assert_eq!(session.rows(), rows_before.as_slice());
}

#[test]
fn resolution_not_found_resets_to_nothing_selected() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    let commands = session.handle(SessionEvent::CatalogueSelected(Some("9".to_string())));
    let (token, _) = expect_resolve(&commands);
    let commands = session.handle(SessionEvent::CatalogueResolved {
        token,
        result: Err(FetchFailure::NotFound),
    });
    assert!(commands.is_empty());
    assert!(session.active().is_none());
    assert_eq!(session.total_items(), None);
    assert!(session.error().is_some());
}

#[test]
fn resolution_failure_leaves_prior_display_untouched() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    let commands = session.handle(SessionEvent::CatalogueSelected(Some("2".to_string())));
    let (token, _) = expect_resolve(&commands);
    let commands = session.handle(SessionEvent::CatalogueResolved {
        token,
        result: Err(FetchFailure::Unavailable("server unreachable".to_string())),
    });
    assert!(commands.is_empty());
    // No partial update: the previous catalogue is still what's shown.
    assert_eq!(session.active().unwrap().name, "Lifelines");
    assert_eq!(session.total_items(), Some(42));
    assert_eq!(session.error(), Some("server unreachable"));
}

// =============================================================================
// FREE-TEXT SEARCH & SUGGESTIONS
// =============================================================================

#[test]
fn input_below_minimum_length_fetches_nothing() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    let commands = session.handle(SessionEvent::SearchInputChanged("we".to_string()));
    assert!(commands.is_empty());
    assert!(session.suggestions().is_empty());
    assert_eq!(session.suggest_phase(), SuggestPhase::Idle);
}

#[test]
fn input_at_minimum_length_fetches_capped_suggestions() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    let commands = session.handle(SessionEvent::SearchInputChanged("wei".to_string()));
    let (token, dataset_id, text, max_items) = expect_suggest(&commands);
    assert_eq!(dataset_id, "1");
    assert_eq!(text, "wei");
    assert_eq!(max_items, SUGGEST_MAX_ITEMS);
    assert_eq!(session.suggest_phase(), SuggestPhase::Fetching);

    session.handle(SessionEvent::SuggestionsCompleted {
        token,
        result: Ok(suggestions(&["Weight", "Weight gain"])),
    });
    assert_eq!(session.suggestions().len(), 2);
    assert_eq!(session.suggest_phase(), SuggestPhase::Idle);
}

#[test]
fn newer_keystroke_supersedes_inflight_suggestion_fetch() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    let commands = session.handle(SessionEvent::SearchInputChanged("wei".to_string()));
    let (first_token, _, _, _) = expect_suggest(&commands);
    let commands = session.handle(SessionEvent::SearchInputChanged("weig".to_string()));
    let (second_token, _, text, _) = expect_suggest(&commands);
    assert_eq!(text, "weig");

    // The slower "wei" response must not populate the list.
    session.handle(SessionEvent::SuggestionsCompleted {
        token: first_token,
        result: Ok(suggestions(&["Weird measurement"])),
    });
    assert!(session.suggestions().is_empty());

    session.handle(SessionEvent::SuggestionsCompleted {
        token: second_token,
        result: Ok(suggestions(&["Weight"])),
    });
    assert_eq!(session.suggestions().len(), 1);
    assert_eq!(session.suggestions()[0].name, "Weight");
}

#[test]
fn suggestion_failure_is_silent() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    let commands = session.handle(SessionEvent::SearchInputChanged("wei".to_string()));
    let (token, _, _, _) = expect_suggest(&commands);
    session.handle(SessionEvent::SuggestionsCompleted {
        token,
        result: Err(FetchFailure::Unavailable("suggester down".to_string())),
    });
    assert!(session.suggestions().is_empty());
    assert!(session.error().is_none());
    assert_eq!(session.suggest_phase(), SuggestPhase::Idle);
}

#[test]
fn submit_refreshes_matrix_and_short_circuits_suggestions() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    let commands = session.handle(SessionEvent::SearchInputChanged("weight".to_string()));
    let (suggest_token, _, _, _) = expect_suggest(&commands);

    let commands = session.handle(SessionEvent::SearchSubmitted);
    let (matrix_token, request) = expect_matrix(&commands);
    assert_eq!(request, SearchRequest::filtered("P1", "weight"));

    // The pending suggestion response arrives after submit: superseded.
    session.handle(SessionEvent::SuggestionsCompleted {
        token: suggest_token,
        result: Ok(suggestions(&["Weight"])),
    });
    assert!(session.suggestions().is_empty());

    session.handle(SessionEvent::MatrixCompleted {
        token: matrix_token,
        result: Ok(response(1, &["Weight"])),
    });
    assert_eq!(session.rows().len(), 1);
}

#[test]
fn search_button_behaves_like_enter() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    session.handle(SessionEvent::SearchInputChanged("hei".to_string()));
    let commands = session.handle(SessionEvent::SearchButtonPressed);
    let (_, request) = expect_matrix(&commands);
    assert_eq!(request, SearchRequest::filtered("P1", "hei"));
}

#[test]
fn clearing_input_reverts_to_unfiltered_scope_listing() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    session.handle(SessionEvent::SearchInputChanged("weight".to_string()));
    let commands = session.handle(SessionEvent::SearchInputChanged(String::new()));
    let (_, request) = expect_matrix(&commands);
    // Structurally identical to the initial count-style refresh.
    assert_eq!(request, SearchRequest::count("P1"));
    assert!(session.suggestions().is_empty());
}

#[test]
fn picking_a_suggestion_adopts_it_and_refreshes() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    let commands = session.handle(SessionEvent::SearchInputChanged("wei".to_string()));
    let (token, _, _, _) = expect_suggest(&commands);
    session.handle(SessionEvent::SuggestionsCompleted {
        token,
        result: Ok(suggestions(&["Weight"])),
    });

    let commands = session.handle(SessionEvent::SuggestionPicked("Weight".to_string()));
    let (_, request) = expect_matrix(&commands);
    assert_eq!(session.filter(), "Weight");
    assert_eq!(request, SearchRequest::filtered("P1", "Weight"));
    assert!(session.suggestions().is_empty());
}

#[test]
fn search_events_are_ignored_without_a_catalogue() {
    let mut session = CatalogueSession::new();

    assert!(
        session
            .handle(SessionEvent::SearchInputChanged("weight".to_string()))
            .is_empty()
    );
    assert!(session.handle(SessionEvent::SearchSubmitted).is_empty());
    assert!(
        session
            .handle(SessionEvent::SuggestionPicked("Weight".to_string()))
            .is_empty()
    );
    assert_eq!(session.filter(), "");
}

// =============================================================================
// ERRORS & PASS-THROUGH
// =============================================================================

#[test]
fn matrix_failure_keeps_last_good_rows() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");
    let rows_before: Vec<_> = session.rows().to_vec();

    let commands = session.handle(SessionEvent::SearchSubmitted);
    let (token, _) = expect_matrix(&commands);
    session.handle(SessionEvent::MatrixCompleted {
        token,
        result: Err(FetchFailure::Unavailable("search backend down".to_string())),
    });
    assert_eq!(session.rows(), rows_before.as_slice());
    assert_eq!(session.error(), Some("search backend down"));

    session.handle(SessionEvent::ErrorDismissed);
    assert!(session.error().is_none());
}

#[test]
fn empty_result_set_renders_an_empty_table() {
    let mut session = CatalogueSession::new();
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    let commands = session.handle(SessionEvent::SearchInputChanged("zzz".to_string()));
    expect_suggest(&commands);
    let commands = session.handle(SessionEvent::SearchSubmitted);
    let (token, _) = expect_matrix(&commands);
    session.handle(SessionEvent::MatrixCompleted {
        token,
        result: Ok(response(0, &[])),
    });
    assert!(session.rows().is_empty());
    assert!(session.error().is_none());
}

#[test]
fn sort_rule_is_passed_through_on_refreshes() {
    let mut session = CatalogueSession::new().with_sort_rule(SortRule {
        field: "name".to_string(),
        order: SortOrder::Asc,
    });
    select_and_settle(&mut session, "1", "Lifelines", "P1");

    let commands = session.handle(SessionEvent::SearchSubmitted);
    let (_, request) = expect_matrix(&commands);
    assert_eq!(
        request.sort_rule,
        Some(SortRule {
            field: "name".to_string(),
            order: SortOrder::Asc,
        })
    );
}
