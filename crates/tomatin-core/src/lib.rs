//! # Tomatin Core Library
//!
//! Core logic for the Tomatin Pomodoro timer: a single-session countdown
//! with work/break alternation, persisted statistics, and background-safe
//! elapsed-time tracking. The CLI binary is a thin driver over this library;
//! a GUI shell would sit on the same surface.
//!
//! ## Architecture
//!
//! - **Reducer**: a pure state machine over wall-clock deltas. The host may
//!   suspend at any point; remaining time is re-measured from the last
//!   baseline stamp instead of decremented per callback, so true elapsed
//!   time is recovered on resume.
//! - **Session**: the single process-wide owner of [`TimerState`], hydrated
//!   from the store at startup and persisting the durable slices after
//!   every relevant change.
//! - **Storage**: SQLite-backed key-value snapshot storage plus TOML driver
//!   configuration.
//!
//! ## Key Components
//!
//! - [`reduce`] / [`Action`]: the timer state machine
//! - [`TimerSession`]: dispatch entry point and read model
//! - [`Store`]: snapshot persistence
//! - [`Config`]: driver configuration

pub mod error;
pub mod events;
pub mod session;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use events::Event;
pub use session::TimerSession;
pub use storage::{Config, Store};
pub use timer::{
    default_modes, reduce, Action, Phase, Snapshot, SoundConfig, Statistics, TimerMode, TimerState,
};
