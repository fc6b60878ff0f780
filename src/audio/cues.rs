//! Sound cue definitions
//!
//! Every cue is a short plan of sine tones so it can be synthesized on the
//! fly without bundled sound files.

use std::time::Duration;

/// One sine tone, scheduled relative to the start of its cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    pub duration: Duration,
    pub volume: f32,
    pub delay: Duration,
}

impl Tone {
    const fn new(freq: f32, duration_ms: u64, volume: f32, delay_ms: u64) -> Self {
        Self {
            freq,
            duration: Duration::from_millis(duration_ms),
            volume,
            delay: Duration::from_millis(delay_ms),
        }
    }
}

/// Short effects played on desk events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    CheckInSuccess,
    CheckInError,
    /// Once per second through the final countdown
    CountdownTick,
    /// Rising arpeggio on the winner reveal
    Celebration,
}

const CELEBRATION_BEEPS: u64 = 7;

impl Cue {
    pub fn tones(self) -> Vec<Tone> {
        match self {
            Cue::CheckInSuccess => vec![Tone::new(880.0, 150, 0.15, 0)],
            Cue::CheckInError => vec![Tone::new(220.0, 150, 0.15, 0)],
            Cue::CountdownTick => vec![Tone::new(700.0, 100, 0.4, 0)],
            Cue::Celebration => (0..CELEBRATION_BEEPS)
                .map(|i| Tone::new(600.0 + i as f32 * 50.0, 150, 0.4, i * 200))
                .collect(),
        }
    }

    /// Time until the last tone of the cue has finished
    pub fn length(self) -> Duration {
        self.tones()
            .iter()
            .map(|t| t.delay + t.duration)
            .max()
            .unwrap_or_default()
    }
}

/// Looping hum under a running draw
pub const SPIN_HUM: [Tone; 2] = [Tone::new(110.0, 0, 0.06, 0), Tone::new(165.0, 0, 0.03, 0)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_in_beeps() {
        let ok = Cue::CheckInSuccess.tones();
        let err = Cue::CheckInError.tones();
        assert_eq!(ok.len(), 1);
        assert_eq!(ok[0].freq, 880.0);
        assert_eq!(err[0].freq, 220.0);
        assert_eq!(ok[0].duration, Duration::from_millis(150));
        assert_eq!(err[0].volume, 0.15);
    }

    #[test]
    fn countdown_tick() {
        let tick = Cue::CountdownTick.tones();
        assert_eq!(tick, vec![Tone::new(700.0, 100, 0.4, 0)]);
    }

    #[test]
    fn celebration_rises_every_200ms() {
        let tones = Cue::Celebration.tones();
        assert_eq!(tones.len(), 7);
        for (i, t) in tones.iter().enumerate() {
            assert_eq!(t.freq, 600.0 + i as f32 * 50.0);
            assert_eq!(t.delay, Duration::from_millis(i as u64 * 200));
        }
        assert_eq!(Cue::Celebration.length(), Duration::from_millis(1_350));
    }
}
