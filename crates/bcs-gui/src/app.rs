//! Main application: the Iced Elm-architecture shell.
//!
//! `update()` is deliberately thin. Catalogue search interactions are
//! delegated wholesale to the `bcs-core` session state machine; the shell
//! only executes the commands the session returns, using the service
//! handles constructed at startup (dependency injection, no process-wide
//! clients).

use std::sync::Arc;

use iced::widget::container;
use iced::{Element, Length, Task, Theme};
use tracing::{info, warn};

use bcs_api::{ResourceClient, SearchClient};

use crate::message::Message;
use crate::service;
use crate::settings::ServerSettings;
use crate::state::{AppState, CatalogueChoice, DirectoryState};
use crate::theme::studio_theme;
use crate::view::view_home;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
    /// Resource lookup service handle.
    resource: Arc<ResourceClient>,
    /// Search backend service handle.
    search: Arc<SearchClient>,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and the task that
    /// loads the catalogue directory for the selector.
    pub fn new() -> (Self, Task<Message>) {
        let settings = ServerSettings::load();
        info!(base_url = %settings.base_url, "connecting to catalogue server");

        let resource = Arc::new(
            ResourceClient::new(settings.base_url.as_str())
                .expect("failed to construct HTTP client"),
        );
        let search = Arc::new(
            SearchClient::new(settings.base_url.as_str())
                .expect("failed to construct HTTP client"),
        );

        let app = Self {
            state: AppState::new(settings),
            resource: Arc::clone(&resource),
            search,
        };
        let startup = service::load_directory(resource);
        (app, startup)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // All search/selection synchronization happens in the session
            // state machine; run whatever commands it returns.
            Message::Session(event) => {
                let commands = self.state.session.handle(event);
                Task::batch(
                    commands
                        .into_iter()
                        .map(|command| service::perform(&self.resource, &self.search, command)),
                )
            }

            Message::DirectoryLoaded(Ok(datasets)) => {
                info!(count = datasets.len(), "catalogue directory loaded");
                self.state.directory =
                    DirectoryState::Ready(CatalogueChoice::from_listing(&datasets));
                Task::none()
            }

            Message::DirectoryLoaded(Err(message)) => {
                warn!(%message, "catalogue directory failed to load");
                self.state.directory = DirectoryState::Failed(message);
                Task::none()
            }

            Message::ReloadDirectory => {
                self.state.directory = DirectoryState::Loading;
                service::load_directory(Arc::clone(&self.resource))
            }
        }
    }

    /// Render the view.
    ///
    /// Pure function producing UI based on current state.
    pub fn view(&self) -> Element<'_, Message> {
        container(view_home(&self.state))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Window title.
    pub fn title(&self) -> String {
        match self.state.session.active() {
            Some(catalogue) => format!("{} - Biobank Catalogue Studio", catalogue.name),
            None => "Biobank Catalogue Studio".to_string(),
        }
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        studio_theme()
    }
}
