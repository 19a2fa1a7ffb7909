//! Top-level application state and screen routing.
//!
//! The current tab is plain in-memory state, never persisted; a fresh
//! start always lands on Home. Screens own their state exclusively and
//! share nothing but the store handle, which is passed in explicitly
//! rather than held as an ambient global.

use crate::error::Result;
use crate::exam::ExamCountdown;
use crate::goals::GoalBook;
use crate::storage::{Config, Store};
use crate::tasks::TaskList;
use crate::timer::TimerEngine;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    /// Mood first-aid.
    Life,
    /// Exam countdown, timer and to-dos.
    Study,
    /// Streak goals.
    Goals,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Life, Tab::Study, Tab::Goals];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Study Station",
            Tab::Life => "Mood First-Aid",
            Tab::Study => "Focus Zone",
            Tab::Goals => "Progress Book",
        }
    }
}

/// Container for the whole application state.
///
/// Holds the selected tab plus one instance of each screen's state.
/// The timer always starts fresh; everything else loads from the store.
pub struct App<'a> {
    tab: Tab,
    pub exam: ExamCountdown<'a>,
    pub tasks: TaskList<'a>,
    pub goals: GoalBook<'a>,
    pub timer: TimerEngine,
}

impl<'a> App<'a> {
    /// Load all persisted screens from `store`; timer presets come
    /// from `config`.
    pub fn new(store: &'a Store, config: &Config) -> Result<Self> {
        Ok(Self {
            tab: Tab::default(),
            exam: ExamCountdown::load(store)?,
            tasks: TaskList::load(store)?,
            goals: GoalBook::load(store)?,
            timer: TimerEngine::with_presets(config.timer.work_secs, config.timer.break_secs),
        })
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }
}
