//! QR check-in page
//!
//! Hand-held scanners type the decoded pass into the focused input and send
//! Enter, which submits the code.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::{ScanDay, ScanDesk, ScanResult};
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

/// Widget id of the scan input, focused when scanning starts
pub const SCAN_INPUT_ID: &str = "scan_input";

const COLUMN_WIDTH: f32 = 420.0;

pub fn view(desk: &ScanDesk) -> Element<'_, Message> {
    let banner = container(
        column![
            text("EVready 2026")
                .size(28)
                .font(theme::font(BOLD_WEIGHT))
                .color(iced::Color::WHITE),
            text("Attendee Check-in").size(15).color(theme::GREEN_100),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding([28, 16])
    .center_x(Fill)
    .style(theme::banner);

    let mut content = column![banner, day_selector(desk)]
        .spacing(24)
        .align_x(Alignment::Center)
        .width(Fill);

    if let Some(result) = desk.result() {
        content = content.push(result_card(result));
    }

    content.push(scanner(desk)).into()
}

fn day_selector(desk: &ScanDesk) -> Element<'_, Message> {
    ScanDay::ALL
        .iter()
        .fold(row![].spacing(12), |days, &day| {
            let active = desk.day() == Some(day);
            let mut label = row![text(day.to_string()).size(15).font(theme::font(MEDIUM_WEIGHT))]
                .spacing(8)
                .align_y(Alignment::Center);
            if active {
                label = label.push(
                    container(text(desk.count().to_string()).size(12).color(theme::GREEN_800))
                        .padding([2, 8])
                        .style(theme::badge),
                );
            }
            days.push(
                button(label)
                    .padding([10, 20])
                    .style(theme::nav_item(active))
                    .on_press(Message::SelectScanDay(day)),
            )
        })
        .into()
}

fn result_card(result: &ScanResult) -> Element<'_, Message> {
    let icon = if result.is_success() { "✓" } else { "✗" };
    let mut body = column![
        row![
            text(icon).size(20),
            text(result.message()).size(16).font(theme::font(BOLD_WEIGHT)),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
    ]
    .spacing(6);

    if let ScanResult::Success { name, reg_num, .. } = result {
        body = body
            .push(text(format!("Name: {}", name)).size(14))
            .push(text(format!("Reg No: {}", reg_num)).size(14));
    }

    container(body)
        .width(COLUMN_WIDTH)
        .padding(16)
        .style(theme::result_card(result.is_success()))
        .into()
}

fn scanner(desk: &ScanDesk) -> Element<'_, Message> {
    let busy = desk.is_scanning() || desk.is_submitting();

    let mut input = text_input("Scan a QR pass...", &desk.input)
        .id(iced::widget::Id::new(SCAN_INPUT_ID))
        .padding([12, 14])
        .size(16)
        .width(Fill)
        .style(theme::field_input(false));
    if desk.is_scanning() {
        input = input
            .on_input(Message::ScanInputChanged)
            .on_submit(Message::SubmitScan);
    }

    let label = if desk.is_submitting() {
        "Checking in..."
    } else if desk.is_scanning() {
        "Scanning…"
    } else {
        "Start Scan"
    };
    let start = button(container(text(label).size(15)).center_x(Fill))
        .width(Fill)
        .padding([12, 16])
        .style(theme::primary_button)
        .on_press_maybe((!busy).then_some(Message::StartScan));

    let mut controls = column![input, start].spacing(12).width(COLUMN_WIDTH);
    if desk.is_scanning() {
        controls = controls.push(
            button(container(text("Cancel").size(14)).center_x(Fill))
                .width(Fill)
                .padding([8, 16])
                .style(theme::text_button)
                .on_press(Message::StopScan),
        );
    } else if desk.day().is_none() {
        controls = controls.push(
            text("Select a day to begin")
                .size(13)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        );
    }

    column![Space::new().height(4), controls]
        .align_x(Alignment::Center)
        .into()
}
