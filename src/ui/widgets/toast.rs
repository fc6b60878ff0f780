//! Toast notification widget
//!
//! Floating card with a colored accent bar and icon. Each toast carries an
//! id so a delayed hide only dismisses the toast it was scheduled for.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Background, Border, Color, Element};

use crate::ui::theme;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

const MAX_WIDTH: f32 = 420.0;

/// Toast notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastStyle {
    /// Icon circle and border tint
    pub fn accent_color(&self) -> iced::Color {
        match self {
            ToastStyle::Success => theme::success(&iced::Theme::Light),
            ToastStyle::Error => theme::danger(&iced::Theme::Light),
            ToastStyle::Warning => theme::warning(&iced::Theme::Light),
            ToastStyle::Info => theme::info(&iced::Theme::Light),
        }
    }

    /// Get the icon for this style
    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Error => "✗",
            ToastStyle::Warning => "⚠",
            ToastStyle::Info => "ℹ",
        }
    }

    /// How long the toast stays on screen
    pub fn auto_hide(&self) -> Duration {
        match self {
            ToastStyle::Error | ToastStyle::Warning => Duration::from_secs(4),
            ToastStyle::Success | ToastStyle::Info => Duration::from_secs(3),
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            style,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Info)
    }
}

/// Build a toast notification widget
///
/// Icon in a tinted circle, then the message; the card itself is styled by
/// [`theme::toast_card`].
pub fn view_toast<'a, Message: 'a>(toast: Option<&Toast>) -> Element<'a, Message> {
    let Some(toast) = toast else {
        return Space::new().width(0).height(0).into();
    };

    let accent = toast.style.accent_color();
    let badge = container(text(toast.style.icon()).size(13).color(Color::WHITE))
        .center(22)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(accent)),
            border: Border {
                radius: 11.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let message = text(toast.message.clone())
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    container(
        row![badge, message]
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .max_width(MAX_WIDTH)
    .padding([12, 18])
    .style(theme::toast_card(accent))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Toast::success("a");
        let b = Toast::success("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn errors_linger_longer() {
        assert_eq!(ToastStyle::Success.auto_hide(), Duration::from_secs(3));
        assert_eq!(ToastStyle::Error.auto_hide(), Duration::from_secs(4));
    }
}
