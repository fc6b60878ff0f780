//! Top navigation bar
//! Event title on the left, page switcher on the right

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Desk pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavItem {
    #[default]
    Register,
    CheckIn,
    LuckyDraw,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::Register, NavItem::CheckIn, NavItem::LuckyDraw];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Register => "Register",
            NavItem::CheckIn => "Check-in",
            NavItem::LuckyDraw => "Lucky Draw",
        }
    }

    /// Window title suffix
    pub fn title(&self) -> &'static str {
        match self {
            NavItem::Register => "Registration",
            NavItem::CheckIn => "QR Check-in",
            NavItem::LuckyDraw => "Lucky Draw",
        }
    }
}

pub fn view(active: NavItem) -> Element<'static, Message> {
    let brand = column![
        text("EVready 2026")
            .size(22)
            .font(theme::font(BOLD_WEIGHT))
            .style(|theme| text::Style {
                color: Some(theme::heading(theme)),
            }),
        text("Registration Desk")
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
    ];

    let items = NavItem::ALL.iter().fold(row![].spacing(8), |items, &item| {
        items.push(
            button(text(item.label()).size(14))
                .padding([8, 16])
                .style(theme::nav_item(item == active))
                .on_press(Message::Navigate(item)),
        )
    });

    container(
        row![brand, Space::new().width(Fill), items]
            .align_y(Alignment::Center)
            .padding(Padding::new(12.0).left(24.0).right(24.0)),
    )
    .width(Fill)
    .style(theme::nav_bar)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_the_landing_page() {
        assert_eq!(NavItem::default(), NavItem::Register);
        assert_eq!(NavItem::ALL.len(), 3);
    }
}
