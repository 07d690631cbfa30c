//! Process-lifetime owner of the timer state.
//!
//! There is exactly one timer per process. Rather than a module-level
//! global, the state lives in a [`TimerSession`] handle constructed once at
//! startup and threaded through explicitly. All mutation funnels through
//! [`dispatch`](TimerSession::dispatch); callers are expected to invoke it
//! serially (the reducer is never entered concurrently).

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::events::Event;
use crate::storage::Store;
use crate::timer::{reduce, Action, Phase, Snapshot, TimerState};

/// Owns the root [`TimerState`] and the durable store behind it.
///
/// After every dispatch the session captures the persisted slices (custom
/// modes, statistics, sound, selected mode) and, when they changed, writes
/// them back. Writes are fire-and-forget: a failure is reported on stderr
/// and dropped, it never blocks a state transition.
pub struct TimerSession {
    state: TimerState,
    store: Store,
}

impl TimerSession {
    /// Open the default on-disk store and hydrate state from it.
    pub fn open() -> Result<Self> {
        Ok(Self::with_store(Store::open()?))
    }

    /// Hydrate a session from an already-open store.
    pub fn with_store(store: Store) -> Self {
        let mut session = Self {
            state: TimerState::default(),
            store,
        };
        if let Some(snapshot) = session.store.load_snapshot() {
            session.dispatch(Action::LoadState(snapshot));
        }
        session
    }

    /// Read-only view of the full state, for collaborators.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Run one action through the reducer at the current wall-clock instant.
    ///
    /// Returns an [`Event`] describing the transition, or `None` when the
    /// action was a no-op (unmet precondition) or a plain tick.
    pub fn dispatch(&mut self, action: Action) -> Option<Event> {
        let now = Utc::now();
        let before = Snapshot::capture(&self.state);
        let prev_running = self.state.is_running;
        let prev_phase = self.state.current_phase;
        let prev_custom_len = self.state.custom_modes.len();

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action.clone(), now);

        let after = Snapshot::capture(&self.state);
        if after != before {
            self.persist(&after);
        }

        self.event_for(&action, prev_phase, prev_running, prev_custom_len, now)
    }

    fn persist(&self, snapshot: &Snapshot) {
        if let Err(e) = self.store.save_snapshot(snapshot) {
            eprintln!("warning: failed to persist timer state: {e}");
        }
    }

    fn event_for(
        &self,
        action: &Action,
        prev_phase: Phase,
        prev_running: bool,
        prev_custom_len: usize,
        now: DateTime<Utc>,
    ) -> Option<Event> {
        let state = &self.state;
        match action {
            Action::Start => (!prev_running && state.is_running).then(|| Event::TimerStarted {
                phase: state.current_phase,
                remaining_secs: state.time_remaining_secs,
                at: now,
            }),
            Action::Pause => (prev_running && !state.is_running).then(|| Event::TimerPaused {
                remaining_secs: state.time_remaining_secs,
                at: now,
            }),
            Action::Reset => Some(Event::TimerReset {
                phase: state.current_phase,
                remaining_secs: state.time_remaining_secs,
                at: now,
            }),
            Action::SetMode(_) => Some(Event::ModeSelected {
                name: state.selected_mode.name.clone(),
                remaining_secs: state.time_remaining_secs,
                at: now,
            }),
            Action::Tick => None,
            Action::TogglePhase => (state.current_phase != prev_phase).then(|| {
                Event::PhaseCompleted {
                    finished_phase: prev_phase,
                    next_phase: state.current_phase,
                    remaining_secs: state.time_remaining_secs,
                    at: now,
                }
            }),
            Action::AddCustomMode(mode) => (state.custom_modes.len() > prev_custom_len).then(|| {
                Event::ModeAdded {
                    name: mode.name.clone(),
                    at: now,
                }
            }),
            Action::RemoveCustomMode(name) => (state.custom_modes.len() < prev_custom_len).then(
                || Event::ModeRemoved {
                    name: name.clone(),
                    selected: state.selected_mode.name.clone(),
                    at: now,
                },
            ),
            Action::UpdateStatistics => Some(Event::StatisticsUpdated {
                statistics: state.statistics.clone(),
                at: now,
            }),
            Action::ToggleSound => Some(Event::SoundToggled {
                enabled: state.sound.enabled,
                at: now,
            }),
            Action::SetVolume(_) => Some(Event::VolumeChanged {
                volume: state.sound.volume,
                at: now,
            }),
            Action::LoadState(_) => Some(Event::StateLoaded {
                custom_modes: state.custom_modes.len(),
                selected: state.selected_mode.name.clone(),
                at: now,
            }),
            Action::StopAlarm => Some(Event::AlarmStopped { at: now }),
        }
    }
}
