//! Copyright footer

use chrono::Datelike;
use iced::widget::{container, text};
use iced::{Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// Footer line for `year`
pub fn notice(year: i32) -> String {
    format!(
        "© {} All Rights Reserved. Powered by SaaScraft Studio (India) Pvt. Ltd.",
        year
    )
}

pub fn view() -> Element<'static, Message> {
    let year = chrono::Local::now().year();
    container(text(notice(year)).size(12))
        .width(Fill)
        .center_x(Fill)
        .padding([10, 16])
        .style(theme::footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_carries_year() {
        let line = notice(2026);
        assert!(line.starts_with("© 2026 All Rights Reserved."));
        assert!(line.ends_with("Pvt. Ltd."));
    }
}
