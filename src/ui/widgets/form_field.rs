//! Labeled form field with an inline validation message
//!
//! Generic over the message type so any page can wrap its inputs.

use iced::widget::{Space, column, row, text, text_input};
use iced::{Element, Fill};

use crate::ui::theme::{self, MEDIUM_WEIGHT};

/// Wrap `input` with a label above and the error (if any) below
pub fn labeled<'a, Message: 'a>(
    label: &'a str,
    required: bool,
    input: impl Into<Element<'a, Message>>,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    let mut title = row![
        text(label)
            .size(14)
            .font(theme::font(MEDIUM_WEIGHT))
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
    ];
    if required {
        title = title.push(Space::new().width(2)).push(
            text("*")
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::danger(theme)),
                }),
        );
    }

    let mut field = column![title, Space::new().height(6), input.into()].width(Fill);
    if let Some(message) = error {
        field = field.push(Space::new().height(4)).push(
            text(message)
                .size(12)
                .style(|theme| text::Style {
                    color: Some(theme::danger(theme)),
                }),
        );
    }
    field.into()
}

/// Full-width themed text input
pub fn text_field<'a, Message, F>(
    placeholder: &'a str,
    value: &'a str,
    invalid: bool,
    on_input: F,
) -> text_input::TextInput<'a, Message>
where
    Message: Clone + 'a,
    F: Fn(String) -> Message + 'a,
{
    text_input(placeholder, value)
        .on_input(on_input)
        .padding([10, 12])
        .size(15)
        .width(Fill)
        .style(theme::field_input(invalid))
}
