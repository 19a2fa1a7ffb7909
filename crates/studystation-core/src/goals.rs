//! Goal streaks.
//!
//! Each goal counts the distinct local calendar days on which the user
//! checked in, at most one increment per day. A missed day does not
//! reset the count: there is deliberately no decay or punishment logic.
//! The collection is mirrored into the store under `myGoals`.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sticky::StickyCell;
use crate::storage::Store;

/// Store key for the persisted goal collection.
pub const GOALS_KEY: &str = "myGoals";

const DATE_FMT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: u64,
    pub title: String,
    /// Count of distinct check-in days.
    pub streak: u32,
    /// Local calendar date of the last check-in, `YYYY-MM-DD`.
    pub last_date: Option<String>,
}

/// Outcome of a check-in attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckIn {
    /// Streak incremented; carries the new value.
    Recorded { streak: u32 },
    /// Already checked in today, nothing changed.
    AlreadyToday,
    /// No goal with that id.
    NotFound,
}

/// Goal collection with write-through persistence.
pub struct GoalBook<'a> {
    cell: StickyCell<'a, Vec<Goal>>,
    next_id: u64,
}

/// Today as a local calendar date. Check-ins compare dates, never
/// timestamps, so a second check-in later the same day is a no-op.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

impl<'a> GoalBook<'a> {
    /// Load the collection from the store, or start empty.
    pub fn load(store: &'a Store) -> Result<Self> {
        let cell = StickyCell::bind(store, GOALS_KEY, Vec::<Goal>::new())?;
        let next_id = cell.get().iter().map(|g| g.id).max().map_or(1, |m| m + 1);
        Ok(Self { cell, next_id })
    }

    pub fn goals(&self) -> &[Goal] {
        self.cell.get()
    }

    pub fn get(&self, id: u64) -> Option<&Goal> {
        self.goals().iter().find(|g| g.id == id)
    }

    /// Append a new goal with a zero streak.
    ///
    /// Whitespace-only titles are silently rejected and `None` is
    /// returned; otherwise the fresh goal's id.
    pub fn add_goal(&mut self, title: &str) -> Result<Option<u64>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }
        let id = self.next_id;
        self.next_id += 1;
        let goal = Goal {
            id,
            title: title.to_string(),
            streak: 0,
            last_date: None,
        };
        self.cell.update(|goals| goals.push(goal))?;
        Ok(Some(id))
    }

    /// Check in for today's local date.
    pub fn check_in(&mut self, id: u64) -> Result<CheckIn> {
        self.check_in_on(id, today_local())
    }

    /// Check in for an explicit calendar date.
    ///
    /// Increments the streak and stamps the date unless the goal was
    /// already stamped with that exact date.
    pub fn check_in_on(&mut self, id: u64, date: NaiveDate) -> Result<CheckIn> {
        let stamp = date.format(DATE_FMT).to_string();
        let mut outcome = CheckIn::NotFound;
        self.cell.update(|goals| {
            if let Some(goal) = goals.iter_mut().find(|g| g.id == id) {
                if goal.last_date.as_deref() == Some(stamp.as_str()) {
                    outcome = CheckIn::AlreadyToday;
                } else {
                    goal.streak += 1;
                    goal.last_date = Some(stamp.clone());
                    outcome = CheckIn::Recorded { streak: goal.streak };
                }
            }
        })?;
        Ok(outcome)
    }

    /// Remove a goal. Returns false when the id is absent.
    ///
    /// The caller is responsible for confirming with the user first;
    /// the CLI prompts before invoking this.
    pub fn delete_goal(&mut self, id: u64) -> Result<bool> {
        let mut found = false;
        self.cell.update(|goals| {
            let before = goals.len();
            goals.retain(|g| g.id != id);
            found = goals.len() != before;
        })?;
        Ok(found)
    }

    /// Whether the goal's last check-in was today (local date). Used to
    /// disable the check-in action for the rest of the day.
    pub fn is_checked_in_today(goal: &Goal) -> bool {
        let today = today_local().format(DATE_FMT).to_string();
        goal.last_date.as_deref() == Some(today.as_str())
    }
}
