//! # Study Station Core Library
//!
//! Core business logic for Study Station, a CLI-first study companion.
//! All operations are available through the `studystation-cli` binary,
//! which is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Sticky storage**: a SQLite key-value store holding one JSON
//!   value per key, plus [`StickyCell`], which mirrors an in-memory
//!   value into the store on every change
//! - **Timer engine**: a caller-driven work/break state machine; a
//!   cancellable [`Ticker`] task supplies the one-second ticks
//! - **Tasks and goals**: a persisted to-do list and day-streak goal
//!   book, both written through on every mutation
//! - **Screens**: exam countdown, mood first-aid table and the tab
//!   router in [`app`]
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: countdown state machine
//! - [`StickyCell`]: persisted state cell
//! - [`Store`] / [`Config`]: durable storage and TOML configuration

pub mod app;
pub mod error;
pub mod events;
pub mod exam;
pub mod goals;
pub mod remedy;
pub mod sticky;
pub mod storage;
pub mod tasks;
pub mod timer;

pub use app::{App, Tab};
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use events::Event;
pub use exam::ExamCountdown;
pub use goals::{CheckIn, Goal, GoalBook};
pub use sticky::StickyCell;
pub use storage::{Config, Store};
pub use tasks::{TaskList, TodoItem};
pub use timer::{Mode, Ticker, TimerEngine};
