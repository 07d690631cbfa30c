use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The timer alternates strictly between these two phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn flip(self) -> Self {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::Break => "break",
        }
    }
}

/// A named pair of work/break durations. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerMode {
    pub name: String,
    /// Work phase length in seconds.
    pub work_secs: u64,
    /// Break phase length in seconds.
    pub break_secs: u64,
}

impl TimerMode {
    /// Validated constructor. The reducer only ever sees modes that went
    /// through here or are built in.
    pub fn new(
        name: impl Into<String>,
        work_secs: u64,
        break_secs: u64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyModeName);
        }
        if work_secs == 0 {
            return Err(ValidationError::ZeroDuration { field: "work" });
        }
        if break_secs == 0 {
            return Err(ValidationError::ZeroDuration { field: "break" });
        }
        Ok(Self {
            name,
            work_secs,
            break_secs,
        })
    }

    pub fn duration_for(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Work => self.work_secs,
            Phase::Break => self.break_secs,
        }
    }

    /// 25 minutes of work, 5 of break.
    pub fn classic_pomodoro() -> Self {
        Self {
            name: "Classic Pomodoro".into(),
            work_secs: 25 * 60,
            break_secs: 5 * 60,
        }
    }

    /// 50 minutes of work, 10 of break.
    pub fn long_session() -> Self {
        Self {
            name: "Long Session".into(),
            work_secs: 50 * 60,
            break_secs: 10 * 60,
        }
    }
}

/// Built-in modes, available in every session. The first one is the
/// fallback selection whenever nothing else is valid.
pub fn default_modes() -> Vec<TimerMode> {
    vec![TimerMode::classic_pomodoro(), TimerMode::long_session()]
}
