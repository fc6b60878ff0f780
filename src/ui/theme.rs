//! Theme system for the registration desk
//! Green event branding on a light surface, with a dark variant

use iced::color;
use iced::widget::{button, checkbox, container, pick_list, scrollable, text_input};
use iced::font::Weight;
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark | Theme::Dracula | Theme::Nord | Theme::TokyoNight | Theme::CatppuccinMocha
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x07140c);
    pub const SURFACE: Color = color!(0x10231a);
    pub const SURFACE_ELEVATED: Color = color!(0x163024);
    pub const BORDER: Color = color!(0x1f4d33);
    pub const TEXT_MUTED: Color = color!(0x7f9c8a);
    pub const TEXT_SECONDARY: Color = color!(0xb5d1bf);
    pub const TEXT_PRIMARY: Color = color!(0xf0fdf4);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf0fdf4);
    pub const SURFACE: Color = color!(0xffffff);
    pub const SURFACE_ELEVATED: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xbbf7d0);
    pub const TEXT_MUTED: Color = color!(0x6b7280);
    pub const TEXT_SECONDARY: Color = color!(0x4b5563);
    pub const TEXT_PRIMARY: Color = color!(0x111827);
}

/// Brand greens (same for both modes)
pub const GREEN_50: Color = color!(0xf0fdf4);
pub const GREEN_100: Color = color!(0xdcfce7);
pub const GREEN_200: Color = color!(0xbbf7d0);
pub const GREEN_400: Color = color!(0x4ade80);
pub const GREEN_500: Color = color!(0x22c55e);
pub const GREEN_600: Color = color!(0x16a34a);
pub const GREEN_700: Color = color!(0x15803d);
pub const GREEN_800: Color = color!(0x166534);
pub const EMERALD_500: Color = color!(0x10b981);
pub const RED_600: Color = color!(0xdc2626);

/// Primary accent color
pub const ACCENT: Color = GREEN_700;

/// Hover state for primary accent
pub const ACCENT_HOVER: Color = GREEN_800;

/// Disabled text color (for inactive buttons)
pub const TEXT_DISABLED: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.5);

pub const BOLD_WEIGHT: Weight = Weight::Bold;
pub const MEDIUM_WEIGHT: Weight = Weight::Medium;

/// Default font at the given weight
pub fn font(weight: Weight) -> Font {
    Font {
        weight,
        ..Default::default()
    }
}

/// Confetti palette
pub const CONFETTI: [Color; 6] = [
    color!(0x00ff00),
    color!(0x32cd32),
    color!(0x98fb98),
    color!(0xadff2f),
    color!(0x7cfc00),
    color!(0x00fa9a),
];

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Surface elevated color (for cards, popups)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_ELEVATED
    } else {
        light::SURFACE_ELEVATED
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Heading color: brand green on light, pale green on dark
pub fn heading(theme: &Theme) -> Color {
    if is_dark(theme) { GREEN_200 } else { GREEN_800 }
}

/// Danger/error color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.3, 0.3)
    } else {
        RED_600
    }
}

/// Danger hover color
pub fn danger_hover(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(1.0, 0.4, 0.4)
    } else {
        Color::from_rgb(0.72, 0.11, 0.11)
    }
}

/// Success color
pub fn success(_theme: &Theme) -> Color {
    GREEN_600
}

/// Warning color
pub fn warning(_theme: &Theme) -> Color {
    Color::from_rgb(0.95, 0.75, 0.3)
}

/// Info color
pub fn info(_theme: &Theme) -> Color {
    Color::from_rgb(0.4, 0.7, 0.95)
}

/// Divider/separator color
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

/// Shadow color for cards
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.08, 0.33, 0.18, 0.15)
    }
}

/// Hover background with alpha
pub fn hover_bg_alpha(theme: &Theme, alpha: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, alpha)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, alpha)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Top navigation bar
pub fn nav_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            width: 1.0,
            color: border_color(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Hero banner strip
pub fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(
            iced::gradient::Linear::new(iced::Radians(std::f32::consts::FRAC_PI_2))
                .add_stop(0.0, GREEN_800)
                .add_stop(1.0, EMERALD_500)
                .into(),
        )),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Form and panel card
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_elevated(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Floating toast card, border tinted with the toast's accent
pub fn toast_card(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: Some(Background::Color(surface_elevated(theme))),
        border: Border {
            radius: 10.0.into(),
            width: 1.0,
            color: Color { a: 0.5, ..accent },
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Pill badge (registration number, counts)
pub fn badge(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(if is_dark(theme) {
            dark::SURFACE
        } else {
            GREEN_50
        })),
        text_color: Some(heading(theme)),
        border: Border {
            radius: 999.0.into(),
            width: 1.0,
            color: GREEN_200,
        },
        ..Default::default()
    }
}

/// Check-in result card
pub fn result_card(is_success: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: Some(Background::Color(if is_success {
            GREEN_600
        } else {
            danger(theme)
        })),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Spinning name card; `glow` in `[1, 2]` widens and brightens the halo
pub fn spin_card(glow: f32) -> impl Fn(&Theme) -> container::Style {
    let intensity = (glow - 1.0).clamp(0.0, 1.0);
    move |theme| container::Style {
        background: Some(Background::Color(surface_elevated(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 24.0.into(),
            width: 2.0 + intensity * 2.0,
            color: Color {
                a: 0.6 + intensity * 0.4,
                ..GREEN_500
            },
        },
        shadow: Shadow {
            color: Color {
                a: 0.25 + intensity * 0.5,
                ..GREEN_400
            },
            offset: Vector::ZERO,
            blur_radius: 24.0 * glow,
        },
        ..Default::default()
    }
}

/// Footer strip
pub fn footer(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.7,
            ..surface(theme)
        })),
        text_color: Some(text_muted(theme)),
        border: Border {
            width: 1.0,
            color: border_color(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color { a: 0.6, ..ACCENT })),
            text_color: Color {
                a: 0.8,
                ..Color::WHITE
            },
            ..base
        },
        _ => base,
    }
}

/// Secondary button - outlined in brand green
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: heading(theme),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: GREEN_700,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg_alpha(theme, 0.05))),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: TEXT_DISABLED,
            border: Border {
                color: TEXT_DISABLED,
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}

/// Text button (no background, just text color change on hover)
pub fn text_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Danger button (for destructive actions)
pub fn danger_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(danger(theme))),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(danger_hover(theme))),
            ..base
        },
        _ => base,
    }
}

/// Navigation / segmented item; the active item is filled
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if active {
            return primary_button(theme, status);
        }
        let base = button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: text_secondary(theme),
            border: Border {
                radius: 8.0.into(),
                width: 1.0,
                color: border_color(theme),
            },
            ..Default::default()
        };
        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(hover_bg_alpha(theme, 0.05))),
                text_color: text_primary(theme),
                ..base
            },
            _ => base,
        }
    }
}

// ============================================================================
// Input Styles
// ============================================================================

/// Form text field; `invalid` draws the border in the danger color
pub fn field_input(invalid: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme, status| {
        let border = match status {
            _ if invalid => danger(theme),
            text_input::Status::Focused { .. } => GREEN_600,
            text_input::Status::Hovered => GREEN_400,
            _ => border_color(theme),
        };
        text_input::Style {
            background: Background::Color(surface(theme)),
            border: Border {
                radius: 8.0.into(),
                width: 1.0,
                color: border,
            },
            icon: text_muted(theme),
            placeholder: text_muted(theme),
            value: text_primary(theme),
            selection: Color { a: 0.4, ..GREEN_400 },
        }
    }
}

/// Form dropdown; `invalid` draws the border in the danger color
pub fn field_pick_list(invalid: bool) -> impl Fn(&Theme, pick_list::Status) -> pick_list::Style {
    move |theme, status| {
        let border = match status {
            _ if invalid => danger(theme),
            pick_list::Status::Opened { .. } => GREEN_600,
            pick_list::Status::Hovered => GREEN_400,
            pick_list::Status::Active => border_color(theme),
        };
        pick_list::Style {
            text_color: text_primary(theme),
            placeholder_color: text_muted(theme),
            handle_color: text_secondary(theme),
            background: Background::Color(surface(theme)),
            border: Border {
                radius: 8.0.into(),
                width: 1.0,
                color: border,
            },
        }
    }
}

/// Dropdown menu
pub fn pick_list_menu(theme: &Theme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        text_color: text_primary(theme),
        background: Background::Color(surface_elevated(theme)),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        selected_text_color: Color::WHITE,
        selected_background: Background::Color(GREEN_600),
        shadow: Shadow::default(),
    }
}

/// Terms checkbox
pub fn terms_checkbox(theme: &Theme, status: checkbox::Status) -> checkbox::Style {
    let is_checked = matches!(
        status,
        checkbox::Status::Active { is_checked: true }
            | checkbox::Status::Hovered { is_checked: true }
    );
    checkbox::Style {
        background: Background::Color(if is_checked {
            GREEN_700
        } else {
            surface(theme)
        }),
        icon_color: Color::WHITE,
        border: Border {
            radius: 4.0.into(),
            width: if is_checked { 0.0 } else { 1.0 },
            color: GREEN_600,
        },
        text_color: Some(text_secondary(theme)),
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for page content
pub fn page_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_detection() {
        assert!(is_dark(&Theme::Dark));
        assert!(!is_dark(&Theme::Light));
    }

    #[test]
    fn invalid_field_uses_danger_border() {
        let style = field_input(true)(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border.color, danger(&Theme::Light));
        let style = field_input(false)(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border.color, border_color(&Theme::Light));
    }

    #[test]
    fn spin_card_glow_grows() {
        let calm = spin_card(1.0)(&Theme::Light);
        let bright = spin_card(2.0)(&Theme::Light);
        assert!(bright.shadow.blur_radius > calm.shadow.blur_radius);
        assert!(bright.border.width > calm.border.width);
    }
}
