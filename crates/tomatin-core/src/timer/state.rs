use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mode::{default_modes, Phase, TimerMode};

/// All-time session statistics. Monotonically non-decreasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub completed_sessions: u64,
    pub total_work_secs: u64,
    pub total_break_secs: u64,
    pub last_updated: DateTime<Utc>,
    pub streak_days: u32,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            completed_sessions: 0,
            total_work_secs: 0,
            total_break_secs: 0,
            last_updated: Utc::now(),
            streak_days: 0,
        }
    }
}

/// Alarm sound preferences. The core never plays audio itself; collaborators
/// read this to decide how to alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundConfig {
    pub enabled: bool,
    /// 0.0 (silent) to 1.0 (full).
    pub volume: f32,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.5,
        }
    }
}

/// Root timer state. One per process, owned by
/// [`TimerSession`](crate::session::TimerSession) and mutated exclusively
/// through [`reduce`](crate::timer::reduce).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub is_running: bool,
    pub current_phase: Phase,
    /// Remaining time in the current phase, in whole seconds.
    pub time_remaining_secs: u64,
    pub selected_mode: TimerMode,
    /// Insertion order, names unique.
    pub custom_modes: Vec<TimerMode>,
    pub statistics: Statistics,
    pub sound: SoundConfig,
    /// Instant the countdown baseline was last stamped. Elapsed-time
    /// recovery always measures from here, so a suspended host catches up
    /// on the first tick after resume.
    pub last_active: DateTime<Utc>,
    /// Raised on phase completion, cleared by explicit user action or reset.
    pub is_alarm_active: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        let selected = TimerMode::classic_pomodoro();
        Self {
            is_running: false,
            current_phase: Phase::Work,
            time_remaining_secs: selected.work_secs,
            selected_mode: selected,
            custom_modes: Vec::new(),
            statistics: Statistics::default(),
            sound: SoundConfig::default(),
            last_active: Utc::now(),
            is_alarm_active: false,
        }
    }
}

impl TimerState {
    /// Full duration of the current phase under the selected mode.
    pub fn phase_duration_secs(&self) -> u64 {
        self.selected_mode.duration_for(self.current_phase)
    }

    /// Built-in modes followed by custom ones, in presentation order.
    pub fn available_modes(&self) -> Vec<TimerMode> {
        let mut modes = default_modes();
        modes.extend(self.custom_modes.iter().cloned());
        modes
    }

    /// Look up a mode by name among built-in and custom modes.
    pub fn find_mode(&self, name: &str) -> Option<TimerMode> {
        self.available_modes().into_iter().find(|m| m.name == name)
    }

    /// True if `name` collides with any existing mode.
    pub fn mode_name_taken(&self, name: &str) -> bool {
        self.find_mode(name).is_some()
    }
}

/// The subset of [`TimerState`] that survives a restart.
///
/// `is_running`, `time_remaining_secs` and `last_active` are deliberately
/// absent: a reload always resumes idle, never as stale running state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub custom_modes: Vec<TimerMode>,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub sound: SoundConfig,
    /// May be absent in older snapshots; hydration then picks the first
    /// custom mode, or the first built-in if there are none.
    #[serde(default)]
    pub selected_mode: Option<TimerMode>,
}

impl Snapshot {
    pub fn capture(state: &TimerState) -> Self {
        Self {
            custom_modes: state.custom_modes.clone(),
            statistics: state.statistics.clone(),
            sound: state.sound.clone(),
            selected_mode: Some(state.selected_mode.clone()),
        }
    }
}
