use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Phase, Statistics};

/// Every observable state transition produces an `Event`.
/// Collaborators (the CLI, a GUI shell) render these; they carry no
/// authority over state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    ModeSelected {
        name: String,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A phase ran out and the timer flipped to the other one. The alarm
    /// flag is raised until dismissed.
    PhaseCompleted {
        finished_phase: Phase,
        next_phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    ModeAdded {
        name: String,
        at: DateTime<Utc>,
    },
    ModeRemoved {
        name: String,
        /// Name of the mode selected after the removal.
        selected: String,
        at: DateTime<Utc>,
    },
    StatisticsUpdated {
        statistics: Statistics,
        at: DateTime<Utc>,
    },
    SoundToggled {
        enabled: bool,
        at: DateTime<Utc>,
    },
    VolumeChanged {
        volume: f32,
        at: DateTime<Utc>,
    },
    /// Persisted slices were merged over defaults at startup.
    StateLoaded {
        custom_modes: usize,
        selected: String,
        at: DateTime<Utc>,
    },
    AlarmStopped {
        at: DateTime<Utc>,
    },
}
