//! Countdown ring primitive
//!
//! Canvas ring that empties clockwise as time runs out, with the remaining
//! seconds drawn in the middle. Generic over the message type.

use iced::alignment;
use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, Text};
use iced::{Color, Element, Pixels, Point, Radians, Renderer, Theme, mouse};

use crate::ui::theme;

#[derive(Debug, Clone, Copy)]
pub struct ProgressRing {
    /// Fraction still remaining (0.0 - 1.0)
    pub progress: f32,
    pub stroke_width: f32,
    /// Track color; `None` follows the theme divider
    pub track_color: Option<Color>,
    pub progress_color: Color,
    /// Centered label, usually whole seconds left
    pub label: Option<u64>,
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self {
            progress: 0.0,
            stroke_width: 6.0,
            track_color: None,
            progress_color: theme::GREEN_600,
            label: None,
        }
    }
}

impl ProgressRing {
    pub fn new(progress: f32) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn progress_color(mut self, color: Color) -> Self {
        self.progress_color = color;
        self
    }

    pub fn label(mut self, seconds: u64) -> Self {
        self.label = Some(seconds);
        self
    }
}

impl<Message> Program<Message> for ProgressRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = (bounds.width.min(bounds.height) / 2.0) - (self.stroke_width / 2.0) - 1.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(self.stroke_width)
                .with_color(self.track_color.unwrap_or_else(|| theme::divider(theme))),
        );

        if self.progress > 0.0 {
            let start_angle = -std::f32::consts::FRAC_PI_2;
            let sweep_angle = self.progress * std::f32::consts::TAU;

            let arc = Path::new(|builder| {
                builder.arc(iced::widget::canvas::path::Arc {
                    center,
                    radius,
                    start_angle: Radians(start_angle),
                    end_angle: Radians(start_angle + sweep_angle),
                });
            });

            frame.stroke(
                &arc,
                Stroke::default()
                    .with_width(self.stroke_width)
                    .with_color(self.progress_color)
                    .with_line_cap(iced::widget::canvas::LineCap::Round),
            );
        }

        if let Some(seconds) = self.label {
            frame.fill_text(Text {
                content: seconds.to_string(),
                position: center,
                color: theme::text_primary(theme),
                size: Pixels(radius * 0.8),
                font: theme::font(theme::BOLD_WEIGHT),
                align_x: alignment::Horizontal::Center.into(),
                align_y: alignment::Vertical::Center,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

pub fn view_progress_ring_styled<'a, Message: 'a>(
    ring: ProgressRing,
    size: f32,
) -> Element<'a, Message> {
    Canvas::new(ring).width(size).height(size).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(ProgressRing::new(1.5).progress, 1.0);
        assert_eq!(ProgressRing::new(-0.2).progress, 0.0);
    }

    #[test]
    fn label_is_optional() {
        assert_eq!(ProgressRing::new(0.5).label, None);
        assert_eq!(ProgressRing::new(0.5).label(12).label, Some(12));
    }
}
