//! Exam countdown.
//!
//! Holds a persisted exam name and optional exam date; the days-left
//! figure is a pure derivation from the wall clock, recomputed on every
//! render and never cached. The date is stored as a plain `YYYY-MM-DD`
//! string, with the empty string meaning "not set".

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::Result;
use crate::sticky::StickyCell;
use crate::storage::Store;

/// Store key for the exam name.
pub const EXAM_NAME_KEY: &str = "examName";
/// Store key for the exam date.
pub const EXAM_DATE_KEY: &str = "examDate";

/// Placeholder shown while no exam date is set.
pub const NO_DATE_PLACEHOLDER: &str = "---";

const DATE_FMT: &str = "%Y-%m-%d";
const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Persisted exam name and date with derived countdown.
pub struct ExamCountdown<'a> {
    name: StickyCell<'a, String>,
    date: StickyCell<'a, String>,
}

impl<'a> ExamCountdown<'a> {
    /// Load from the store. A fresh install shows a generic exam name
    /// and no date.
    pub fn load(store: &'a Store) -> Result<Self> {
        Ok(Self {
            name: StickyCell::bind(store, EXAM_NAME_KEY, "Entrance Exam".to_string())?,
            date: StickyCell::bind(store, EXAM_DATE_KEY, String::new())?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.get()
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name.set(name.to_string())
    }

    /// The exam date, or `None` while unset or unparseable.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.get(), DATE_FMT).ok()
    }

    pub fn set_date(&mut self, date: NaiveDate) -> Result<()> {
        self.date.set(date.format(DATE_FMT).to_string())
    }

    pub fn clear_date(&mut self) -> Result<()> {
        self.date.set(String::new())
    }

    /// Whole days until the exam at `now`, rounded up and clamped to
    /// zero once the date has passed. `None` while no date is set.
    pub fn days_left_at(&self, now: NaiveDateTime) -> Option<i64> {
        let exam_midnight = self.date()?.and_time(NaiveTime::MIN);
        let secs = (exam_midnight - now).num_seconds();
        if secs <= 0 {
            Some(0)
        } else {
            Some((secs + SECS_PER_DAY - 1) / SECS_PER_DAY)
        }
    }

    /// Days-left figure for display, or the placeholder when unset.
    pub fn days_left_display(&self, now: NaiveDateTime) -> String {
        match self.days_left_at(now) {
            Some(days) => days.to_string(),
            None => NO_DATE_PLACEHOLDER.to_string(),
        }
    }
}
