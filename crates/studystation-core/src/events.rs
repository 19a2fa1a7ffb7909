use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every timer state change produces an Event.
/// The CLI prints them; the phase-end message is the user notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: Mode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// A work or break phase counted down to zero and the engine
    /// flipped to the other mode.
    PhaseEnded {
        ended: Mode,
        next: Mode,
        message: String,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        remaining_secs: u32,
        is_running: bool,
        at: DateTime<Utc>,
    },
}
