//! Confetti burst for the winner reveal
//!
//! Particles are simulated at a nominal 60 frames per second, scaled by the
//! real time between redraws. Each particle keeps its origin as a fraction of
//! the canvas and its travel in pixels, so the burst survives resizes.

use std::time::{Duration, Instant};

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{Color, Element, Fill, Point, Radians, Rectangle, Renderer, Size, Theme, Vector, mouse};
use rand::Rng;

use crate::ui::theme;

/// Particles split across one reveal burst
pub const PARTICLE_BUDGET: usize = 300;

/// Delay before [`SECOND_WAVE`]
pub const SECOND_WAVE_DELAY: Duration = Duration::from_secs(1);

const FRAME_SECS: f32 = 1.0 / 60.0;
/// Longest gap simulated in one step, in frames
const MAX_STEP_FRAMES: f32 = 4.0;
const GRAVITY: f32 = 3.0;
const TOTAL_TICKS: f32 = 200.0;
const PARTICLE_SIZE: Size = Size::new(9.0, 6.0);

/// One launch of particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volley {
    /// Share of [`PARTICLE_BUDGET`]
    pub ratio: f32,
    /// Cone width in degrees
    pub spread: f32,
    pub start_velocity: f32,
    /// Per-frame velocity multiplier
    pub decay: f32,
    /// Launch height as a fraction of the canvas
    pub origin_y: f32,
}

impl Volley {
    const fn new(ratio: f32, spread: f32, start_velocity: f32, decay: f32) -> Self {
        Self {
            ratio,
            spread,
            start_velocity,
            decay,
            origin_y: 0.6,
        }
    }

    pub fn particle_count(&self) -> usize {
        (PARTICLE_BUDGET as f32 * self.ratio).floor() as usize
    }
}

/// Volleys fired together on reveal
pub const REVEAL_VOLLEYS: [Volley; 5] = [
    Volley::new(0.25, 26.0, 55.0, 0.9),
    Volley::new(0.2, 60.0, 45.0, 0.9),
    Volley::new(0.35, 100.0, 45.0, 0.91),
    Volley::new(0.1, 120.0, 25.0, 0.92),
    Volley::new(0.1, 120.0, 45.0, 0.9),
];

/// Follow-up volley from lower down
pub const SECOND_WAVE: Volley = Volley {
    origin_y: 0.7,
    ..Volley::new(0.25, 100.0, 35.0, 0.9)
};

#[derive(Debug, Clone)]
struct Particle {
    origin: (f32, f32),
    offset: Vector,
    angle: f32,
    velocity: f32,
    decay: f32,
    wobble: f32,
    wobble_speed: f32,
    tilt: f32,
    tick: f32,
    color: Color,
}

impl Particle {
    fn spawn<R: Rng>(volley: &Volley, rng: &mut R) -> Self {
        let spread = volley.spread.to_radians();
        // Straight up, fanned across the spread
        let angle = -std::f32::consts::FRAC_PI_2 + (0.5 * spread - rng.random::<f32>() * spread);
        let palette = &theme::CONFETTI;
        Self {
            origin: (0.5, volley.origin_y),
            offset: Vector::ZERO,
            angle,
            velocity: volley.start_velocity * 0.5 + rng.random::<f32>() * volley.start_velocity,
            decay: volley.decay,
            wobble: rng.random::<f32>() * 10.0,
            wobble_speed: 0.05 + rng.random::<f32>() * 0.05,
            tilt: rng.random::<f32>() * std::f32::consts::PI,
            tick: 0.0,
            color: palette[rng.random_range(0..palette.len())],
        }
    }

    /// Advance by `frames` nominal frames; false once expired
    fn step(&mut self, frames: f32) -> bool {
        self.offset.x += self.angle.cos() * self.velocity * frames;
        self.offset.y += (self.angle.sin() * self.velocity + GRAVITY) * frames;
        self.velocity *= self.decay.powf(frames);
        self.wobble += self.wobble_speed * frames;
        self.tilt += 0.1 * frames;
        self.tick += frames;
        self.tick < TOTAL_TICKS
    }

    fn opacity(&self) -> f32 {
        (1.0 - self.tick / TOTAL_TICKS).clamp(0.0, 1.0)
    }
}

/// Live confetti particles
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
    last_frame: Option<Instant>,
}

impl Confetti {
    pub fn fire<R: Rng>(&mut self, volley: &Volley, rng: &mut R) {
        let count = volley.particle_count();
        self.particles
            .extend((0..count).map(|_| Particle::spawn(volley, rng)));
    }

    /// Fire every reveal volley
    pub fn burst<R: Rng>(&mut self, rng: &mut R) {
        for volley in &REVEAL_VOLLEYS {
            self.fire(volley, rng);
        }
        tracing::debug!("Confetti burst with {} particles", self.particles.len());
    }

    /// Simulate up to `now` and drop expired particles
    pub fn advance(&mut self, now: Instant) {
        let Some(last) = self.last_frame.replace(now) else {
            return;
        };
        if self.particles.is_empty() {
            return;
        }
        let frames =
            (now.saturating_duration_since(last).as_secs_f32() / FRAME_SECS).min(MAX_STEP_FRAMES);
        if frames <= 0.0 {
            return;
        }
        self.particles.retain_mut(|p| p.step(frames));
        if self.particles.is_empty() {
            self.last_frame = None;
        }
    }

    /// Whether frames are still needed
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.last_frame = None;
    }

    /// Full-size overlay drawing the current particles
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        Canvas::new(ConfettiLayer {
            particles: &self.particles,
        })
        .width(Fill)
        .height(Fill)
        .into()
    }
}

struct ConfettiLayer<'a> {
    particles: &'a [Particle],
}

impl<Message> Program<Message> for ConfettiLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for p in self.particles {
            let x = p.origin.0 * bounds.width + p.offset.x + p.wobble.cos() * 4.0;
            let y = p.origin.1 * bounds.height + p.offset.y + p.wobble.sin() * 4.0;
            if x < -PARTICLE_SIZE.width
                || y < -PARTICLE_SIZE.height
                || x > bounds.width + PARTICLE_SIZE.width
                || y > bounds.height + PARTICLE_SIZE.height
            {
                continue;
            }
            let color = Color {
                a: p.opacity(),
                ..p.color
            };
            frame.with_save(|frame| {
                frame.translate(Vector::new(x, y));
                frame.rotate(Radians(p.tilt));
                frame.fill_rectangle(
                    Point::new(-PARTICLE_SIZE.width / 2.0, -PARTICLE_SIZE.height / 2.0),
                    PARTICLE_SIZE,
                    color,
                );
            });
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_uses_full_budget() {
        let counts: Vec<usize> = REVEAL_VOLLEYS.iter().map(Volley::particle_count).collect();
        assert_eq!(counts, vec![75, 60, 105, 30, 30]);

        let mut confetti = Confetti::default();
        confetti.burst(&mut StdRng::seed_from_u64(1));
        assert_eq!(confetti.len(), PARTICLE_BUDGET);
        assert_eq!(SECOND_WAVE.particle_count(), 75);
    }

    #[test]
    fn particles_launch_upward_within_spread() {
        let mut rng = StdRng::seed_from_u64(2);
        let volley = REVEAL_VOLLEYS[0];
        let half = volley.spread.to_radians() / 2.0;
        for _ in 0..200 {
            let p = Particle::spawn(&volley, &mut rng);
            let from_up = p.angle + std::f32::consts::FRAC_PI_2;
            assert!(from_up.abs() <= half + 1e-5);
            assert!(p.velocity >= volley.start_velocity * 0.5);
            assert!(p.velocity <= volley.start_velocity * 1.5);
        }
    }

    #[test]
    fn velocity_decays_and_particles_fade() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::spawn(&REVEAL_VOLLEYS[2], &mut rng);
        let v0 = p.velocity;
        assert!(p.step(1.0));
        assert!((p.velocity - v0 * 0.91).abs() < 1e-3);
        assert!(p.opacity() < 1.0);
    }

    #[test]
    fn particles_removed_after_lifetime() {
        let mut confetti = Confetti::default();
        confetti.burst(&mut StdRng::seed_from_u64(4));
        let t0 = Instant::now();
        confetti.advance(t0);
        assert!(confetti.is_active());

        // Steps are capped, so walk forward frame by frame
        let mut now = t0;
        for _ in 0..(TOTAL_TICKS as usize + 10) {
            now += Duration::from_millis(17);
            confetti.advance(now);
        }
        assert!(!confetti.is_active());
        assert_eq!(confetti.len(), 0);
    }

    #[test]
    fn long_pause_is_capped() {
        let mut confetti = Confetti::default();
        confetti.fire(&SECOND_WAVE, &mut StdRng::seed_from_u64(5));
        let t0 = Instant::now();
        confetti.advance(t0);
        confetti.advance(t0 + Duration::from_secs(30));
        assert!(confetti.is_active());
    }

    #[test]
    fn clear_stops_animation() {
        let mut confetti = Confetti::default();
        confetti.burst(&mut StdRng::seed_from_u64(6));
        confetti.clear();
        assert!(!confetti.is_active());
    }
}
