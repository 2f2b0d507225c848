//! Results table for matched data items.
//!
//! Two columns, Name and Description, in the order the backend returned the
//! items. Long descriptions show a truncated preview; the full text appears
//! in a tooltip on hover. An empty result set renders an empty table.

use iced::widget::text::Wrapping;
use iced::widget::{column, container, scrollable, text, tooltip};
use iced::{Border, Element, Font, Length, Theme, font};

use bcs_core::{DescriptionCell, MatrixRow};

use crate::message::Message;
use crate::theme::{
    BORDER_RADIUS_SM, BORDER_WIDTH_THIN, SPACING_MD, SPACING_SM, StudioColors, container_card,
};

/// Width of the Name column; Description takes the rest.
const NAME_COLUMN_WIDTH: f32 = 240.0;

/// Render the results table (header plus one row per matched item).
pub fn results_table(rows: &[MatrixRow]) -> Element<'_, Message> {
    let mut body = column![header_row()].spacing(0);

    for (index, row) in rows.iter().enumerate() {
        body = body.push(data_row(row, index.is_multiple_of(2)));
    }

    let table = container(
        scrollable(body)
            .direction(scrollable::Direction::Vertical(
                scrollable::Scrollbar::new().width(8).scroller_width(6),
            ))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(|theme: &Theme| container::Style {
        border: Border {
            color: theme.studio().border_default,
            width: BORDER_WIDTH_THIN,
            radius: BORDER_RADIUS_SM.into(),
        },
        ..Default::default()
    });

    table.into()
}

fn header_row<'a>() -> Element<'a, Message> {
    let cell = |label: &'a str, width: Length| {
        container(
            text(label)
                .size(12)
                .wrapping(Wrapping::None)
                .font(Font {
                    weight: font::Weight::Semibold,
                    ..Default::default()
                })
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.studio().text_secondary),
                }),
        )
        .width(width)
        .padding([SPACING_SM, SPACING_MD])
    };

    container(iced::widget::row![
        cell("Name", Length::Fixed(NAME_COLUMN_WIDTH)),
        cell("Description", Length::Fill),
    ])
    .width(Length::Fill)
    .style(|theme: &Theme| container::Style {
        background: Some(theme.studio().background_secondary.into()),
        ..Default::default()
    })
    .into()
}

fn data_row(row: &MatrixRow, is_even: bool) -> Element<'_, Message> {
    // Names are plain text by contract; the text widget interprets nothing.
    let name_cell = container(text(&row.name).size(13).wrapping(Wrapping::WordOrGlyph))
        .width(Length::Fixed(NAME_COLUMN_WIDTH))
        .padding([SPACING_SM, SPACING_MD]);

    let description_cell = container(description_content(&row.description))
        .width(Length::Fill)
        .padding([SPACING_SM, SPACING_MD]);

    container(iced::widget::row![name_cell, description_cell])
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            let studio = theme.studio();
            container::Style {
                background: Some(if is_even {
                    studio.background_elevated.into()
                } else {
                    studio.background_secondary.into()
                }),
                border: Border {
                    color: studio.border_subtle,
                    width: 0.5,
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

/// The description cell: verbatim text, or a hover-expandable preview.
fn description_content(cell: &DescriptionCell) -> Element<'_, Message> {
    match cell {
        DescriptionCell::Inline(description) => {
            text(description).size(13).wrapping(Wrapping::WordOrGlyph).into()
        }
        DescriptionCell::Expandable { preview, full } => tooltip(
            text(preview).size(13).wrapping(Wrapping::WordOrGlyph),
            container(text(full).size(13))
                .max_width(420.0)
                .padding(SPACING_SM)
                .style(container_card),
            tooltip::Position::Bottom,
        )
        .into(),
    }
}
