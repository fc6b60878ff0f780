//! Lucky draw session state machine
//!
//! `Idle -> Running -> Revealed`, with `reset` returning to `Idle` from any
//! state. The winner is chosen when the draw starts; the spin only decides
//! what is on screen until the reveal.
//!
//! All derived state (displayed index, remaining time, final countdown) is
//! recomputed from the elapsed time in [`DrawSession::tick`], so repeated or
//! late ticks never drift and never advance the index twice. The periodic
//! timers the host must run are a pure function of the session state
//! ([`DrawSession::active_timers`]), so a timer cannot outlive the phase
//! that needs it.

use std::time::{Duration, Instant};

use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use super::participants::Participant;
use super::winner::pick_winner;

/// Timing parameters for a draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Total spin duration in seconds
    pub total_secs: u64,
    /// Length of the final countdown at the end of the spin, in seconds
    pub countdown_secs: u64,
    /// Participants cycled per second while spinning
    pub spin_rate: u32,
    /// Spin ticker interval in milliseconds
    pub tick_ms: u64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            total_secs: 120,
            countdown_secs: 30,
            spin_rate: 10,
            tick_ms: 100,
        }
    }
}

impl DrawConfig {
    pub fn total(&self) -> Duration {
        Duration::from_secs(self.total_secs)
    }

    pub fn countdown_window(&self) -> Duration {
        Duration::from_secs(self.countdown_secs.min(self.total_secs))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(10))
    }

    /// Final countdown cue interval
    pub fn countdown_interval(&self) -> Duration {
        Duration::from_secs(1)
    }
}

/// Top-level draw phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawPhase {
    #[default]
    Idle,
    Running,
    Revealed,
}

/// Periodic timers a session can require from its host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawTimer {
    /// Drives [`DrawSession::tick`]
    Spin,
    /// Drives [`DrawSession::countdown_tick`] during the final countdown
    Countdown,
}

/// Set of timers that must be running right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveTimers {
    pub spin: bool,
    pub countdown: bool,
}

impl ActiveTimers {
    pub const NONE: Self = Self {
        spin: false,
        countdown: false,
    };

    pub fn is_empty(&self) -> bool {
        !self.spin && !self.countdown
    }

    pub fn count(&self) -> usize {
        self.spin as usize + self.countdown as usize
    }

    pub fn contains(&self, timer: DrawTimer) -> bool {
        match timer {
            DrawTimer::Spin => self.spin,
            DrawTimer::Countdown => self.countdown,
        }
    }
}

/// Transitions reported by [`DrawSession::tick`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawEvent {
    /// The final countdown sub-state was entered
    FinalCountdownStarted,
    /// The spin finished and the winner is on screen
    Revealed { winner_index: usize },
}

/// Rejected transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// `start` without any loaded participants
    NoParticipants,
    /// `start` after the winner was revealed; only `reset` leaves `Revealed`
    AlreadyRevealed,
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::NoParticipants => write!(f, "Please upload participants CSV first"),
            DrawError::AlreadyRevealed => {
                write!(f, "Winner already revealed, start a new draw first")
            }
        }
    }
}

impl std::error::Error for DrawError {}

/// One draw session: participants through the reveal of a winner
#[derive(Debug, Clone, Default)]
pub struct DrawSession {
    config: DrawConfig,
    participants: Vec<Participant>,
    phase: DrawPhase,
    /// Pre-selected winner (index into `participants`)
    winner: Option<usize>,
    started_at: Option<Instant>,
    elapsed: Duration,
    displayed_index: usize,
    final_countdown: bool,
}

impl DrawSession {
    pub fn new(config: DrawConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_final_countdown(&self) -> bool {
        self.phase == DrawPhase::Running && self.final_countdown
    }

    /// Replace the participant list, dropping any previous session state
    pub fn load(&mut self, participants: Vec<Participant>) {
        self.reset();
        self.participants = participants;
        tracing::info!("Draw session loaded {} participants", self.participants.len());
    }

    /// Pre-select a winner and begin spinning
    ///
    /// Restarting while already running replaces the previous spin; the
    /// timer set stays a single spin ticker.
    pub fn start<R>(&mut self, now: Instant, rng: &mut R) -> Result<(), DrawError>
    where
        R: Rng + CryptoRng,
    {
        if self.phase == DrawPhase::Revealed {
            tracing::warn!("Draw start rejected: winner already revealed");
            return Err(DrawError::AlreadyRevealed);
        }

        let Some((index, _)) = pick_winner(&self.participants, rng) else {
            tracing::warn!("Draw start rejected: no participants loaded");
            return Err(DrawError::NoParticipants);
        };

        if self.phase == DrawPhase::Running {
            tracing::info!("Draw restarted while running");
        }

        self.winner = Some(index);
        self.started_at = Some(now);
        self.elapsed = Duration::ZERO;
        self.displayed_index = 0;
        self.final_countdown = false;
        self.phase = DrawPhase::Running;

        tracing::info!(
            "Draw started with {} participants, revealing in {}s",
            self.participants.len(),
            self.config.total_secs
        );
        Ok(())
    }

    /// Recompute all derived state from the elapsed time
    ///
    /// Ticks outside `Running` are ignored. Each event is reported once per
    /// session no matter how many ticks arrive.
    pub fn tick(&mut self, now: Instant) -> Vec<DrawEvent> {
        let mut events = Vec::new();
        let (DrawPhase::Running, Some(started_at), Some(winner)) =
            (self.phase, self.started_at, self.winner)
        else {
            return events;
        };

        let elapsed = now.saturating_duration_since(started_at);
        let total = self.config.total();
        self.elapsed = elapsed.min(total);

        if elapsed >= total {
            self.phase = DrawPhase::Revealed;
            self.displayed_index = winner;
            self.final_countdown = false;
            tracing::info!(
                "Draw revealed winner: {}",
                self.participants[winner].name
            );
            events.push(DrawEvent::Revealed {
                winner_index: winner,
            });
            return events;
        }

        let len = self.participants.len() as u128;
        let steps = elapsed.as_millis() * u128::from(self.config.spin_rate) / 1000;
        self.displayed_index = (steps % len) as usize;

        if !self.final_countdown && total - elapsed <= self.config.countdown_window() {
            self.final_countdown = true;
            tracing::info!("Final countdown started");
            events.push(DrawEvent::FinalCountdownStarted);
        }

        events
    }

    /// Countdown ticker entry point; true when a cue should play
    pub fn countdown_tick(&self) -> bool {
        self.is_final_countdown()
    }

    /// Return to `Idle`, clearing participants, winner and timing
    pub fn reset(&mut self) {
        if self.phase != DrawPhase::Idle || !self.participants.is_empty() {
            tracing::info!("Draw session reset");
        }
        self.participants.clear();
        self.phase = DrawPhase::Idle;
        self.winner = None;
        self.started_at = None;
        self.elapsed = Duration::ZERO;
        self.displayed_index = 0;
        self.final_countdown = false;
    }

    /// Timers the host must keep running for the current state
    pub fn active_timers(&self) -> ActiveTimers {
        match self.phase {
            DrawPhase::Running => ActiveTimers {
                spin: true,
                countdown: self.final_countdown,
            },
            DrawPhase::Idle | DrawPhase::Revealed => ActiveTimers::NONE,
        }
    }

    pub fn displayed_index(&self) -> usize {
        self.displayed_index
    }

    /// Participant currently on screen
    pub fn displayed(&self) -> Option<&Participant> {
        self.participants.get(self.displayed_index)
    }

    /// The winner, once revealed
    pub fn revealed_winner(&self) -> Option<&Participant> {
        match self.phase {
            DrawPhase::Revealed => self.winner.and_then(|i| self.participants.get(i)),
            _ => None,
        }
    }

    pub fn remaining(&self) -> Duration {
        match self.phase {
            DrawPhase::Idle => self.config.total(),
            DrawPhase::Running => self.config.total().saturating_sub(self.elapsed),
            DrawPhase::Revealed => Duration::ZERO,
        }
    }

    /// Remaining time in whole seconds, rounded up
    pub fn remaining_secs(&self) -> u64 {
        let remaining = self.remaining();
        remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
    }

    /// Visual intensity in `[1, 2]`, rising through the final countdown
    pub fn glow(&self) -> f32 {
        if !self.is_final_countdown() {
            return 1.0;
        }
        let window = self.config.countdown_window().as_secs_f32();
        if window <= 0.0 {
            return 1.0;
        }
        let into = window - self.remaining().as_secs_f32();
        1.0 + (into / window).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roster(n: usize) -> Vec<Participant> {
        (0..n)
            .map(|i| Participant {
                id: format!("id-{i}"),
                name: format!("Person {i}"),
                email: format!("p{i}@example.com"),
                mobile: format!("{i:010}"),
            })
            .collect()
    }

    fn session(n: usize) -> DrawSession {
        let mut s = DrawSession::new(DrawConfig::default());
        s.load(roster(n));
        s
    }

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn start_without_participants_is_rejected() {
        let mut s = DrawSession::new(DrawConfig::default());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            s.start(Instant::now(), &mut rng),
            Err(DrawError::NoParticipants)
        );
        assert_eq!(s.phase(), DrawPhase::Idle);
        assert!(s.active_timers().is_empty());
    }

    #[test]
    fn start_enters_running_with_spin_timer() {
        let mut s = session(4);
        let mut rng = StdRng::seed_from_u64(2);
        s.start(Instant::now(), &mut rng).unwrap();
        assert_eq!(s.phase(), DrawPhase::Running);
        assert_eq!(s.elapsed(), Duration::ZERO);
        assert_eq!(
            s.active_timers(),
            ActiveTimers {
                spin: true,
                countdown: false
            }
        );
        assert!(s.revealed_winner().is_none());
    }

    #[test]
    fn index_cycles_at_spin_rate_and_wraps() {
        let mut s = session(4);
        let t0 = Instant::now();
        s.start(t0, &mut StdRng::seed_from_u64(3)).unwrap();

        s.tick(t0 + Duration::from_millis(100));
        assert_eq!(s.displayed_index(), 1);
        s.tick(t0 + Duration::from_millis(300));
        assert_eq!(s.displayed_index(), 3);
        s.tick(t0 + Duration::from_millis(400));
        assert_eq!(s.displayed_index(), 0);
        s.tick(t0 + Duration::from_millis(1_050));
        assert_eq!(s.displayed_index(), 2);
    }

    #[test]
    fn repeated_ticks_do_not_double_advance() {
        let mut s = session(7);
        let t0 = Instant::now();
        s.start(t0, &mut StdRng::seed_from_u64(4)).unwrap();
        let at = t0 + Duration::from_millis(500);
        s.tick(at);
        let first = s.displayed_index();
        s.tick(at);
        s.tick(at);
        assert_eq!(s.displayed_index(), first);
    }

    #[test]
    fn remaining_rounds_up() {
        let mut s = session(2);
        let t0 = Instant::now();
        s.start(t0, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(s.remaining_secs(), 120);
        s.tick(t0 + Duration::from_millis(100));
        assert_eq!(s.remaining_secs(), 120);
        s.tick(t0 + secs(1));
        assert_eq!(s.remaining_secs(), 119);
        s.tick(t0 + Duration::from_millis(119_001));
        assert_eq!(s.remaining_secs(), 1);
    }

    #[test]
    fn final_countdown_starts_once_at_window() {
        let mut s = session(3);
        let t0 = Instant::now();
        s.start(t0, &mut StdRng::seed_from_u64(6)).unwrap();

        assert!(s.tick(t0 + Duration::from_millis(89_900)).is_empty());
        assert!(!s.countdown_tick());

        let events = s.tick(t0 + secs(90));
        assert_eq!(events, vec![DrawEvent::FinalCountdownStarted]);
        assert!(s.countdown_tick());
        assert_eq!(
            s.active_timers(),
            ActiveTimers {
                spin: true,
                countdown: true
            }
        );

        assert!(s.tick(t0 + secs(91)).is_empty());
        assert!(s.tick(t0 + secs(100)).is_empty());
    }

    #[test]
    fn reveals_preselected_winner_after_total_duration() {
        let list = roster(9);
        let mut s = DrawSession::new(DrawConfig::default());
        s.load(list.clone());
        let t0 = Instant::now();
        s.start(t0, &mut StdRng::seed_from_u64(7)).unwrap();
        let chosen = s.winner.unwrap();

        for ms in (100..120_000).step_by(100) {
            s.tick(t0 + Duration::from_millis(ms));
            assert_eq!(s.phase(), DrawPhase::Running);
        }

        let events = s.tick(t0 + secs(120));
        assert_eq!(
            events,
            vec![DrawEvent::Revealed {
                winner_index: chosen
            }]
        );
        assert_eq!(s.phase(), DrawPhase::Revealed);
        assert_eq!(s.displayed_index(), chosen);
        assert_eq!(s.displayed(), Some(&list[chosen]));
        assert_eq!(s.revealed_winner(), Some(&list[chosen]));
        assert!(s.active_timers().is_empty());
        assert_eq!(s.remaining_secs(), 0);
    }

    #[test]
    fn late_tick_reveals_directly() {
        let mut s = session(5);
        let t0 = Instant::now();
        s.start(t0, &mut StdRng::seed_from_u64(8)).unwrap();
        let events = s.tick(t0 + secs(500));
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], DrawEvent::Revealed { .. }));
        assert_eq!(s.elapsed(), secs(120));
    }

    #[test]
    fn ticks_after_reveal_are_ignored() {
        let mut s = session(5);
        let t0 = Instant::now();
        s.start(t0, &mut StdRng::seed_from_u64(9)).unwrap();
        s.tick(t0 + secs(120));
        let shown = s.displayed_index();
        assert!(s.tick(t0 + secs(121)).is_empty());
        assert!(s.tick(t0 + secs(300)).is_empty());
        assert_eq!(s.displayed_index(), shown);
        assert!(!s.countdown_tick());
    }

    #[test]
    fn revealed_session_rejects_start_until_reset() {
        let mut s = session(5);
        let mut rng = StdRng::seed_from_u64(12);
        let t0 = Instant::now();
        s.start(t0, &mut rng).unwrap();
        s.tick(t0 + secs(120));
        let winner = s.revealed_winner().cloned();

        assert_eq!(s.start(t0 + secs(121), &mut rng), Err(DrawError::AlreadyRevealed));
        assert_eq!(s.phase(), DrawPhase::Revealed);
        assert_eq!(s.revealed_winner().cloned(), winner);
        assert_eq!(s.active_timers(), ActiveTimers::NONE);

        s.reset();
        s.load(roster(3));
        assert!(s.start(t0 + secs(130), &mut rng).is_ok());
        assert_eq!(s.phase(), DrawPhase::Running);
    }

    #[test]
    fn double_start_keeps_single_spin_timer() {
        let mut s = session(6);
        let mut rng = StdRng::seed_from_u64(10);
        let t0 = Instant::now();
        s.start(t0, &mut rng).unwrap();
        s.start(t0 + Duration::from_millis(50), &mut rng).unwrap();

        let timers = s.active_timers();
        assert_eq!(timers.count(), 1);
        assert!(timers.contains(DrawTimer::Spin));

        // Restart resets elapsed: 100ms after the second start is one step
        s.tick(t0 + Duration::from_millis(150));
        assert_eq!(s.displayed_index(), 1);
    }

    #[test]
    fn restart_clears_final_countdown() {
        let mut s = session(3);
        let mut rng = StdRng::seed_from_u64(11);
        let t0 = Instant::now();
        s.start(t0, &mut rng).unwrap();
        s.tick(t0 + secs(95));
        assert!(s.is_final_countdown());

        s.start(t0 + secs(96), &mut rng).unwrap();
        assert!(!s.is_final_countdown());
        assert!(!s.active_timers().countdown);
    }

    #[test]
    fn reset_from_revealed_returns_to_idle() {
        let mut s = session(4);
        let t0 = Instant::now();
        s.start(t0, &mut StdRng::seed_from_u64(12)).unwrap();
        s.tick(t0 + secs(120));
        assert_eq!(s.phase(), DrawPhase::Revealed);

        s.reset();
        assert_eq!(s.phase(), DrawPhase::Idle);
        assert!(s.participants().is_empty());
        assert!(s.active_timers().is_empty());
        assert!(s.revealed_winner().is_none());
        assert_eq!(s.elapsed(), Duration::ZERO);
    }

    #[test]
    fn reset_while_running_cancels_timers() {
        let mut s = session(4);
        let t0 = Instant::now();
        s.start(t0, &mut StdRng::seed_from_u64(13)).unwrap();
        s.tick(t0 + secs(100));
        s.reset();
        assert!(s.active_timers().is_empty());
        assert!(s.tick(t0 + secs(120)).is_empty());
        assert_eq!(s.phase(), DrawPhase::Idle);
    }

    #[test]
    fn new_draw_picks_fresh_winner() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut winners = std::collections::HashSet::new();
        for _ in 0..30 {
            let mut s = session(10);
            let t0 = Instant::now();
            s.start(t0, &mut rng).unwrap();
            s.tick(t0 + secs(120));
            winners.insert(s.revealed_winner().unwrap().id.clone());
        }
        assert!(winners.len() > 1);
    }

    #[test]
    fn glow_rises_through_countdown() {
        let mut s = session(3);
        let t0 = Instant::now();
        s.start(t0, &mut StdRng::seed_from_u64(15)).unwrap();
        s.tick(t0 + secs(10));
        assert_eq!(s.glow(), 1.0);
        s.tick(t0 + secs(105));
        let mid = s.glow();
        assert!(mid > 1.4 && mid < 1.6, "glow was {mid}");
    }

    #[test]
    fn short_config_runs_end_to_end() {
        let config = DrawConfig {
            total_secs: 3,
            countdown_secs: 1,
            spin_rate: 20,
            tick_ms: 50,
        };
        let mut s = DrawSession::new(config);
        s.load(roster(2));
        let t0 = Instant::now();
        s.start(t0, &mut StdRng::seed_from_u64(16)).unwrap();
        assert!(s.tick(t0 + secs(1)).is_empty());
        assert_eq!(
            s.tick(t0 + secs(2)),
            vec![DrawEvent::FinalCountdownStarted]
        );
        assert!(matches!(
            s.tick(t0 + secs(3)).as_slice(),
            [DrawEvent::Revealed { .. }]
        ));
    }
}
