//! Countdown timer engine.
//!
//! A two-mode state machine alternating between work and break phases.
//! The engine holds no clock of its own: the owner calls `tick()` once
//! per real-time second (see [`super::Ticker`]), which keeps the state
//! deterministic and directly testable.
//!
//! Timer state is deliberately not persisted. Every fresh process
//! starts at work with the full work duration.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Default work phase duration: 25 minutes.
pub const DEFAULT_WORK_SECS: u32 = 25 * 60;
/// Default break phase duration: 5 minutes.
pub const DEFAULT_BREAK_SECS: u32 = 5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Work,
    Break,
}

impl Mode {
    pub fn flip(self) -> Self {
        match self {
            Mode::Work => Mode::Break,
            Mode::Break => Mode::Work,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "focus",
            Mode::Break => "break",
        }
    }
}

/// The fixed notification text emitted when a phase ends.
pub fn phase_end_message(ended: Mode) -> &'static str {
    match ended {
        Mode::Work => "Focus finished! Take a 5-minute break.",
        Mode::Break => "Break finished! Back to the desk.",
    }
}

/// Core countdown engine.
///
/// `tick()` decrements the remaining time by one second and performs
/// the work/break flip when it reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    mode: Mode,
    remaining_secs: u32,
    is_running: bool,
    work_secs: u32,
    break_secs: u32,
}

impl TimerEngine {
    /// Create an engine with the default 25/5 presets, idle at the
    /// start of a work phase.
    pub fn new() -> Self {
        Self::with_presets(DEFAULT_WORK_SECS, DEFAULT_BREAK_SECS)
    }

    /// Create an engine with custom phase presets.
    pub fn with_presets(work_secs: u32, break_secs: u32) -> Self {
        Self {
            mode: Mode::Work,
            remaining_secs: work_secs,
            is_running: false,
            work_secs,
            break_secs,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Preset duration for a mode.
    pub fn preset(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_secs,
            Mode::Break => self.break_secs,
        }
    }

    /// Remaining time formatted as `MM:SS`.
    pub fn format_remaining(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / 60,
            self.remaining_secs % 60
        )
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            is_running: self.is_running,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the countdown. No-op when already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.is_running {
            return None;
        }
        self.is_running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Pause the countdown. No-op when not running.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.is_running = false;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Reset the current phase to its preset and stop the countdown.
    pub fn reset(&mut self) -> Event {
        self.remaining_secs = self.preset(self.mode);
        self.is_running = false;
        Event::TimerReset {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Call exactly once per real-time second while a tick source is
    /// active. Returns `Some(Event::PhaseEnded)` when the decrement
    /// reaches zero: the engine then stops, flips to the other mode and
    /// reloads that mode's preset.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running || self.remaining_secs == 0 {
            return None;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs > 0 {
            return None;
        }

        let ended = self.mode;
        self.is_running = false;
        self.mode = ended.flip();
        self.remaining_secs = self.preset(self.mode);
        tracing::debug!(ended = ended.label(), next = self.mode.label(), "phase ended");
        Some(Event::PhaseEnded {
            ended,
            next: self.mode,
            message: phase_end_message(ended).to_string(),
            at: Utc::now(),
        })
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(engine: &mut TimerEngine, n: u32) -> Vec<Event> {
        (0..n).filter_map(|_| engine.tick()).collect()
    }

    #[test]
    fn fresh_engine_is_idle_work_phase() {
        let engine = TimerEngine::new();
        assert_eq!(engine.mode(), Mode::Work);
        assert_eq!(engine.remaining_secs(), 1500);
        assert!(!engine.is_running());
    }

    #[test]
    fn start_is_noop_when_running() {
        let mut engine = TimerEngine::new();
        assert!(engine.start().is_some());
        assert!(engine.start().is_none());
    }

    #[test]
    fn tick_does_nothing_while_paused() {
        let mut engine = TimerEngine::new();
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), 1500);
    }

    #[test]
    fn pause_stops_the_countdown() {
        let mut engine = TimerEngine::new();
        engine.start();
        engine.tick();
        assert!(engine.pause().is_some());
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), 1499);
    }

    #[test]
    fn reset_restores_preset_and_stops() {
        let mut engine = TimerEngine::new();
        engine.start();
        run_ticks(&mut engine, 10);
        engine.reset();
        assert_eq!(engine.remaining_secs(), 1500);
        assert!(!engine.is_running());
        assert_eq!(engine.mode(), Mode::Work);
    }

    #[test]
    fn work_phase_flips_to_break_after_full_countdown() {
        let mut engine = TimerEngine::new();
        engine.start();
        let events = run_ticks(&mut engine, 1500);
        assert_eq!(events.len(), 1);
        match &events[0] {
            Event::PhaseEnded { ended, next, message, .. } => {
                assert_eq!(*ended, Mode::Work);
                assert_eq!(*next, Mode::Break);
                assert_eq!(message, phase_end_message(Mode::Work));
            }
            other => panic!("expected PhaseEnded, got {other:?}"),
        }
        assert_eq!(engine.mode(), Mode::Break);
        assert_eq!(engine.remaining_secs(), 300);
        assert!(!engine.is_running());
    }

    #[test]
    fn break_phase_flips_back_to_work() {
        let mut engine = TimerEngine::new();
        engine.start();
        run_ticks(&mut engine, 1500);
        engine.start();
        let events = run_ticks(&mut engine, 300);
        assert_eq!(events.len(), 1);
        assert_eq!(engine.mode(), Mode::Work);
        assert_eq!(engine.remaining_secs(), 1500);
    }

    #[test]
    fn custom_presets_drive_the_flip() {
        let mut engine = TimerEngine::with_presets(3, 2);
        engine.start();
        let events = run_ticks(&mut engine, 3);
        assert_eq!(events.len(), 1);
        assert_eq!(engine.remaining_secs(), 2);
        assert_eq!(engine.mode(), Mode::Break);
    }

    #[test]
    fn format_remaining_pads_to_mm_ss() {
        let engine = TimerEngine::with_presets(65, 300);
        assert_eq!(engine.format_remaining(), "01:05");
    }
}
