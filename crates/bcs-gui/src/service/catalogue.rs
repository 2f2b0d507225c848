//! Catalogue session commands as Iced background tasks.
//!
//! The session state machine returns [`SessionCommand`]s; this module is
//! where they actually hit the network. Every completion is wrapped back
//! into the session event carrying the command's token, so the state
//! machine can discard responses that arrive after being superseded.

use std::sync::Arc;

use iced::Task;

use bcs_api::{ApiError, ResourceClient, SearchClient};
use bcs_core::{FetchFailure, SessionCommand, SessionEvent};
use bcs_model::FEATURE_TYPE;

use crate::message::Message;

/// Load the catalogue directory for the selector.
pub fn load_directory(resource: Arc<ResourceClient>) -> Task<Message> {
    Task::perform(
        async move {
            resource
                .list_datasets()
                .await
                .map_err(|err| err.user_message())
        },
        Message::DirectoryLoaded,
    )
}

/// Execute one session command against the injected service handles.
pub fn perform(
    resource: &Arc<ResourceClient>,
    search: &Arc<SearchClient>,
    command: SessionCommand,
) -> Task<Message> {
    match command {
        SessionCommand::ResolveCatalogue { token, dataset_id } => {
            let resource = Arc::clone(resource);
            Task::perform(
                async move { resource.get_dataset(&dataset_id).await.map_err(classify) },
                move |result| Message::Session(SessionEvent::CatalogueResolved { token, result }),
            )
        }

        SessionCommand::RunCount { token, request } => {
            let search = Arc::clone(search);
            Task::perform(
                async move { search.search(&request).await.map_err(classify) },
                move |result| Message::Session(SessionEvent::CountCompleted { token, result }),
            )
        }

        SessionCommand::RefreshMatrix { token, request } => {
            let search = Arc::clone(search);
            Task::perform(
                async move { search.search(&request).await.map_err(classify) },
                move |result| Message::Session(SessionEvent::MatrixCompleted { token, result }),
            )
        }

        SessionCommand::FetchSuggestions {
            token,
            dataset_id,
            text,
            max_items,
        } => {
            let search = Arc::clone(search);
            Task::perform(
                async move {
                    search
                        .suggest(FEATURE_TYPE, &dataset_id, &text, max_items)
                        .await
                        .map_err(classify)
                },
                move |result| Message::Session(SessionEvent::SuggestionsCompleted { token, result }),
            )
        }
    }
}

/// Map a client error onto the session's failure taxonomy.
fn classify(err: ApiError) -> FetchFailure {
    if err.is_not_found() {
        FetchFailure::NotFound
    } else {
        FetchFailure::Unavailable(err.user_message())
    }
}
