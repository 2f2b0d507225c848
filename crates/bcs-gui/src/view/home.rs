//! The catalogue search screen.
//!
//! Selector, summary counters, search box with typeahead suggestions, and
//! the results table. Every interaction is raised as a named session event;
//! nothing here mutates state.

use iced::widget::{Space, button, column, container, pick_list, row, text};
use iced::{Alignment, Element, Font, Length, Theme, font};
use iced_fonts::lucide;

use bcs_core::{CatalogueSession, SessionEvent};

use crate::component::{EmptyState, results_table, search_box, search_box_disabled};
use crate::message::Message;
use crate::state::{AppState, DirectoryState};
use crate::theme::{
    SPACING_MD, SPACING_SM, SPACING_XS, StudioColors, button_ghost, button_primary,
    container_card, container_error,
};

/// Render the main screen.
pub fn view_home(state: &AppState) -> Element<'_, Message> {
    let mut content = column![
        page_header(),
        catalogue_card(state),
        summary_card(&state.session),
        search_card(&state.session),
    ]
    .spacing(SPACING_MD);

    if let Some(error) = state.session.error() {
        content = content.push(error_banner(error));
    }

    content = content.push(results_section(&state.session));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_MD)
        .into()
}

fn page_header<'a>() -> Element<'a, Message> {
    column![
        text("Biobank Catalogue Studio").size(20).font(Font {
            weight: font::Weight::Semibold,
            ..Default::default()
        }),
        text("Pick a catalogue, then search its data items.")
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
    ]
    .spacing(SPACING_XS)
    .into()
}

// =============================================================================
// CATALOGUE SELECTOR
// =============================================================================

fn catalogue_card(state: &AppState) -> Element<'_, Message> {
    let selector: Element<'_, Message> = match &state.directory {
        DirectoryState::Loading => text("Loading catalogues...")
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            })
            .into(),

        DirectoryState::Failed(message) => row![
            text(message.clone())
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }),
            button(text("Retry").size(13))
                .on_press(Message::ReloadDirectory)
                .padding([4.0, 8.0])
                .style(button_ghost),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into(),

        DirectoryState::Ready(choices) => {
            let selected = state
                .session
                .selected_dataset_id()
                .and_then(|id| choices.iter().find(|choice| choice.id == id))
                .cloned();

            let picker = pick_list(choices.clone(), selected, |choice| {
                Message::Session(SessionEvent::CatalogueSelected(Some(choice.id)))
            })
            .placeholder("Select a catalogue")
            .width(Length::Fixed(320.0));

            let mut controls = row![picker].spacing(SPACING_SM).align_y(Alignment::Center);

            if state.session.selected_dataset_id().is_some() {
                controls = controls.push(
                    button(
                        container(lucide::x().size(16)).style(|theme: &Theme| container::Style {
                            text_color: Some(theme.studio().text_muted),
                            ..Default::default()
                        }),
                    )
                    .on_press(Message::Session(SessionEvent::CatalogueSelected(None)))
                    .padding([4.0, 8.0])
                    .style(button_ghost),
                );
            }

            if state.session.is_resolving() {
                controls = controls.push(text("Resolving...").size(13).style(
                    |theme: &Theme| text::Style {
                        color: Some(theme.studio().text_muted),
                    },
                ));
            }

            controls.into()
        }
    };

    container(
        column![
            text("Catalogue").size(12).style(|theme: &Theme| {
                text::Style {
                    color: Some(theme.studio().text_secondary),
                }
            }),
            selector,
        ]
        .spacing(SPACING_SM),
    )
    .width(Length::Fill)
    .padding(SPACING_MD)
    .style(container_card)
    .into()
}

// =============================================================================
// SUMMARY COUNTERS
// =============================================================================

fn summary_card(session: &CatalogueSession) -> Element<'_, Message> {
    let catalogue_value = session
        .active()
        .map(|catalogue| catalogue.name.clone())
        .unwrap_or_else(|| "Nothing selected".to_string());

    let count_value = match (session.active(), session.total_items()) {
        (None, _) => "Nothing selected".to_string(),
        (Some(_), None) => "...".to_string(),
        (Some(_), Some(total)) => total.to_string(),
    };

    container(
        row![
            stat("Selected catalogue", catalogue_value),
            stat("Data items", count_value),
            Space::new().width(Length::Fill),
        ]
        .spacing(SPACING_MD * 2.0),
    )
    .width(Length::Fill)
    .padding(SPACING_MD)
    .style(container_card)
    .into()
}

fn stat<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    column![
        text(label).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_secondary),
        }),
        text(value).size(18).font(Font {
            weight: font::Weight::Semibold,
            ..Default::default()
        }),
    ]
    .spacing(SPACING_XS)
    .into()
}

// =============================================================================
// SEARCH & SUGGESTIONS
// =============================================================================

fn search_card(session: &CatalogueSession) -> Element<'_, Message> {
    let placeholder = "Search data items (3 characters or more)";

    let (input, search_button) = if session.active().is_some() {
        let input = search_box(
            session.filter(),
            placeholder,
            |value| Message::Session(SessionEvent::SearchInputChanged(value)),
            Message::Session(SessionEvent::SearchSubmitted),
            Message::Session(SessionEvent::SearchInputChanged(String::new())),
        );
        let search_button = button(text("Search").size(13))
            .on_press(Message::Session(SessionEvent::SearchButtonPressed))
            .padding([8.0, SPACING_MD])
            .style(button_primary);
        (input, search_button)
    } else {
        let input = search_box_disabled(placeholder);
        let search_button = button(text("Search").size(13))
            .padding([8.0, SPACING_MD])
            .style(button_primary);
        (input, search_button)
    };

    let mut section = column![
        row![input, search_button]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center)
    ]
    .spacing(SPACING_XS);

    if !session.suggestions().is_empty() {
        section = section.push(suggestion_list(session));
    }

    container(section)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(container_card)
        .into()
}

fn suggestion_list(session: &CatalogueSession) -> Element<'_, Message> {
    let mut entries = column![].spacing(0);

    for suggestion in session.suggestions() {
        entries = entries.push(
            button(text(suggestion.name.clone()).size(13))
                .on_press(Message::Session(SessionEvent::SuggestionPicked(
                    suggestion.name.clone(),
                )))
                .padding([SPACING_XS, SPACING_SM])
                .width(Length::Fill)
                .style(button_ghost),
        );
    }

    container(entries)
        .width(Length::Fill)
        .padding(SPACING_XS)
        .style(container_card)
        .into()
}

// =============================================================================
// ERRORS & RESULTS
// =============================================================================

fn error_banner(error: &str) -> Element<'_, Message> {
    container(
        row![
            text(error.to_string()).size(13),
            Space::new().width(Length::Fill),
            button(text("Dismiss").size(13))
                .on_press(Message::Session(SessionEvent::ErrorDismissed))
                .padding([4.0, 8.0])
                .style(button_ghost),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([SPACING_SM, SPACING_MD])
    .style(container_error)
    .into()
}

fn results_section(session: &CatalogueSession) -> Element<'_, Message> {
    if session.active().is_none() {
        return EmptyState::new(lucide::database().size(48), "Nothing selected")
            .description("Choose a catalogue to browse its data items.")
            .view();
    }

    results_table(session.rows())
}
