// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, scrollable, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::components::{self, NavItem};
use crate::ui::{pages, theme, widgets};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let page: Element<'_, Message> = match self.ui.active_nav {
            NavItem::Register => pages::register::view(
                &self.desk.registration,
                &self.core.settings.registration.coupon_options,
            ),
            NavItem::CheckIn => pages::checkin::view(&self.desk.checkin),
            NavItem::LuckyDraw => pages::draw::view(
                &self.desk.draw,
                self.core.is_muted(),
                self.core.audio.is_some(),
            ),
        };

        let main_content = container(
            scrollable(container(page).width(Fill).padding([32, 24]).center_x(Fill))
                .id(iced::widget::Id::new("page_scroll"))
                .height(Fill)
                .style(theme::page_scrollable),
        )
        .width(Fill)
        .height(Fill)
        .style(theme::main_content);

        let main_layout = column![
            components::nav_bar::view(self.ui.active_nav),
            main_content,
            components::footer::view(),
        ]
        .width(Fill)
        .height(Fill);

        // Confetti overlay (empty space when idle)
        let confetti_overlay: Element<'_, Message> = if self.ui.confetti.is_active() {
            self.ui.confetti.view()
        } else {
            Space::new().width(0).height(0).into()
        };

        // Toast overlay (empty space if not visible)
        let toast_overlay: Element<'_, Message> = if self.ui.toast.is_some() {
            container(widgets::view_toast(self.ui.toast.as_ref()))
                .width(Fill)
                .padding(20)
                .align_x(Alignment::Center)
                .into()
        } else {
            Space::new().width(0).height(0).into()
        };

        // Always use consistent stack structure to preserve scroll position
        stack![main_layout, confetti_overlay, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
