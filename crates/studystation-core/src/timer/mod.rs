mod engine;
mod ticker;

pub use engine::{
    phase_end_message, Mode, TimerEngine, DEFAULT_BREAK_SECS, DEFAULT_WORK_SECS,
};
pub use ticker::Ticker;
