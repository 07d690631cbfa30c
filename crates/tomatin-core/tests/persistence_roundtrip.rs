//! Store-backed session round-trips across process restarts (simulated by
//! reopening the store at the same path).

use tomatin_core::{Action, Store, TimerMode, TimerSession};

fn store_at(dir: &std::path::Path) -> Store {
    Store::open_at(&dir.join("tomatin.db")).unwrap()
}

#[test]
fn persisted_slices_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut session = TimerSession::with_store(store_at(dir.path()));
        session.dispatch(Action::AddCustomMode(
            TimerMode::new("Sprint", 600, 120).unwrap(),
        ));
        session.dispatch(Action::ToggleSound);
        session.dispatch(Action::SetVolume(0.25));
        session.dispatch(Action::Start);
        session.dispatch(Action::Tick);
    }

    let session = TimerSession::with_store(store_at(dir.path()));
    let state = session.state();

    assert_eq!(state.custom_modes.len(), 1);
    assert_eq!(state.selected_mode.name, "Sprint");
    assert!(!state.sound.enabled);
    assert_eq!(state.sound.volume, 0.25);

    // Session-local fields never round-trip: a reload resumes idle with the
    // full duration of the current phase under the restored selection.
    assert!(!state.is_running);
    assert_eq!(state.time_remaining_secs, 600);
    assert!(!state.is_alarm_active);
}

#[test]
fn statistics_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut session = TimerSession::with_store(store_at(dir.path()));
        session.dispatch(Action::UpdateStatistics);
        session.dispatch(Action::UpdateStatistics);
    }

    let session = TimerSession::with_store(store_at(dir.path()));
    assert_eq!(session.state().statistics.completed_sessions, 2);
}

#[test]
fn missing_database_file_starts_from_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let session = TimerSession::with_store(store_at(dir.path()));
    assert_eq!(session.state().selected_mode.name, "Classic Pomodoro");
    assert!(session.state().custom_modes.is_empty());
}
