//! The timer state machine.
//!
//! A pure reducer over wall-clock deltas. The current instant is an explicit
//! parameter, so the same inputs always produce the same output and drivers
//! stay in charge of time. There is no internal thread: the caller injects
//! [`Action::Tick`] periodically while running, and the first tick after a
//! host suspension recovers the full elapsed interval because remaining time
//! is measured from `last_active`, not decremented per callback.
//!
//! ## Usage
//!
//! ```ignore
//! let state = reduce(state, Action::Start, Utc::now());
//! // once per second while running:
//! let state = reduce(state, Action::Tick, Utc::now());
//! ```

use chrono::{DateTime, Local, Utc};

use super::mode::{Phase, TimerMode};
use super::state::{Snapshot, TimerState};

/// Everything a collaborator can ask the timer to do.
///
/// The enum is closed, so the reducer is total: unmet preconditions are
/// no-ops, never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Begin counting down from the current remaining time.
    Start,
    /// Freeze the countdown at its current value.
    Pause,
    /// Restore the full duration of the current phase and go idle.
    Reset,
    /// Select a mode; the mode must already be validated.
    SetMode(TimerMode),
    /// Reconcile elapsed wall-clock time into remaining time.
    Tick,
    /// Flip work/break once remaining time has hit zero.
    TogglePhase,
    /// Append a custom mode and select it.
    AddCustomMode(TimerMode),
    /// Drop a custom mode by name.
    RemoveCustomMode(String),
    /// Record a phase completion; dispatched once, right before the flip.
    UpdateStatistics,
    ToggleSound,
    SetVolume(f32),
    /// Merge a persisted snapshot over defaults. Process start only.
    LoadState(Snapshot),
    StopAlarm,
}

/// Apply `action` to `state` at instant `now`, producing the next state.
pub fn reduce(mut state: TimerState, action: Action, now: DateTime<Utc>) -> TimerState {
    match action {
        Action::Start => {
            if !state.is_running {
                state.is_running = true;
                state.last_active = now;
            }
            state
        }
        Action::Pause => {
            state.is_running = false;
            state
        }
        Action::Reset => {
            state.is_running = false;
            state.time_remaining_secs = state.phase_duration_secs();
            state.is_alarm_active = false;
            state.last_active = now;
            state
        }
        Action::SetMode(mode) => {
            state.selected_mode = mode;
            state.time_remaining_secs = state.phase_duration_secs();
            state.is_running = false;
            state.last_active = now;
            state
        }
        Action::Tick => {
            if state.is_running {
                let elapsed = elapsed_secs(state.last_active, now);
                state.time_remaining_secs = state.time_remaining_secs.saturating_sub(elapsed);
                state.last_active = now;
            }
            state
        }
        Action::TogglePhase => {
            // Only fires at expiry. Any suspension overshoot beyond the
            // phase duration collapses into this single flip; excess
            // elapsed time is discarded, phases are never auto-cycled.
            if state.time_remaining_secs == 0 {
                state.current_phase = state.current_phase.flip();
                state.time_remaining_secs = state.phase_duration_secs();
                state.is_running = false;
                state.last_active = now;
                state.is_alarm_active = true;
            }
            state
        }
        Action::AddCustomMode(mode) => {
            // Name uniqueness is a soft invariant: a colliding add is a no-op.
            if !state.mode_name_taken(&mode.name) {
                state.custom_modes.push(mode.clone());
                state.selected_mode = mode;
                state.time_remaining_secs = state.phase_duration_secs();
            }
            state
        }
        Action::RemoveCustomMode(name) => {
            let was_selected = state.selected_mode.name == name;
            state.custom_modes.retain(|m| m.name != name);
            if was_selected {
                // State must never reference a deleted mode.
                state.selected_mode = state
                    .custom_modes
                    .first()
                    .cloned()
                    .unwrap_or_else(TimerMode::classic_pomodoro);
                state.time_remaining_secs = state.phase_duration_secs();
            }
            state.is_running = false;
            state
        }
        Action::UpdateStatistics => {
            let elapsed_in_phase = state
                .phase_duration_secs()
                .saturating_sub(state.time_remaining_secs);
            let stats = &mut state.statistics;
            stats.completed_sessions += 1;
            match state.current_phase {
                Phase::Work => stats.total_work_secs += elapsed_in_phase,
                Phase::Break => stats.total_break_secs += elapsed_in_phase,
            }
            // Streaks compare local calendar dates, not 24-hour windows.
            let prev_day = stats.last_updated.with_timezone(&Local).date_naive();
            let today = now.with_timezone(&Local).date_naive();
            if today != prev_day {
                stats.streak_days += 1;
            }
            stats.last_updated = now;
            state
        }
        Action::ToggleSound => {
            state.sound.enabled = !state.sound.enabled;
            state
        }
        Action::SetVolume(volume) => {
            state.sound.volume = volume.clamp(0.0, 1.0);
            state
        }
        Action::LoadState(snapshot) => {
            state.custom_modes = snapshot.custom_modes;
            state.statistics = snapshot.statistics;
            state.sound = snapshot.sound;
            state.selected_mode = snapshot
                .selected_mode
                .or_else(|| state.custom_modes.first().cloned())
                .unwrap_or_else(TimerMode::classic_pomodoro);
            // Remaining time does not round-trip; rebase it on the restored
            // selection so the range invariant holds from the first instant.
            state.time_remaining_secs = state.phase_duration_secs();
            state.is_running = false;
            state.last_active = now;
            state
        }
        Action::StopAlarm => {
            state.is_alarm_active = false;
            state
        }
    }
}

fn elapsed_secs(last: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    // A clock stepped backwards counts as zero elapsed.
    (now - last).num_seconds().max(0) as u64
}
