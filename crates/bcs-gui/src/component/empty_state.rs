//! Empty state component.
//!
//! Standardized feedback for when there's nothing to display yet.

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Font, Length, Theme, font};

use crate::theme::{SPACING_SM, StudioColors};

/// Empty state with icon, title, and optional description.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
}

impl<'a, M: 'a> EmptyState<'a, M> {
    /// Create a new empty state with icon and title.
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the element, centered in the available space.
    pub fn view(self) -> Element<'a, M> {
        let icon = container(self.icon).style(|theme: &Theme| container::Style {
            text_color: Some(theme.studio().text_disabled),
            ..Default::default()
        });

        let mut content = column![
            icon,
            text(self.title).size(16).font(Font {
                weight: font::Weight::Semibold,
                ..Default::default()
            }),
        ]
        .spacing(SPACING_SM)
        .align_x(Alignment::Center);

        if let Some(description) = self.description {
            content = content.push(text(description).size(13).style(|theme: &Theme| {
                text::Style {
                    color: Some(theme.studio().text_muted),
                }
            }));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
