//! Search box component.
//!
//! A text input with search icon and clear button. Enter submits.

use iced::widget::{button, container, row, text_input};
use iced::{Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::theme::{SPACING_XS, StudioColors, button_ghost, text_input_default};

/// Creates a search input with submit and clear wiring.
///
/// Shows a search icon prefix and a clear button once text is entered.
///
/// # Arguments
///
/// * `value` - Current search text
/// * `placeholder` - Placeholder text
/// * `on_change` - Message factory for text changes
/// * `on_submit` - Message to send when Enter is pressed
/// * `on_clear` - Message to send when the clear button is clicked
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_submit: M,
    on_clear: M,
) -> Element<'a, M> {
    let search_icon =
        container(lucide::search().size(14)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.studio().text_muted),
            ..Default::default()
        });

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .on_submit(on_submit)
        .padding(Padding::new(8.0).left(SPACING_XS))
        .width(Length::Fill)
        .style(text_input_default);

    // Clear button (only shown when there's text)
    let clear_button = if value.is_empty() {
        None
    } else {
        Some(
            button(
                container(lucide::x().size(16)).style(|theme: &Theme| container::Style {
                    text_color: Some(theme.studio().text_muted),
                    ..Default::default()
                }),
            )
            .on_press(on_clear)
            .padding([4.0, 8.0])
            .style(button_ghost),
        )
    };

    // Layout: [icon][input][clear?]
    let mut content = row![
        container(search_icon)
            .width(Length::Fixed(28.0))
            .center_x(Length::Shrink)
            .center_y(Length::Shrink),
        container(input).width(Length::Fill),
    ]
    .align_y(iced::Alignment::Center)
    .spacing(SPACING_XS);

    if let Some(btn) = clear_button {
        content = content.push(btn);
    }

    container(content).width(Length::Fill).into()
}

/// Inert variant shown while no catalogue is selected.
pub fn search_box_disabled<'a, M: Clone + 'a>(placeholder: &str) -> Element<'a, M> {
    let input = text_input(placeholder, "")
        .padding(Padding::new(8.0).left(SPACING_XS))
        .width(Length::Fill)
        .style(text_input_default);

    container(input).width(Length::Fill).into()
}
