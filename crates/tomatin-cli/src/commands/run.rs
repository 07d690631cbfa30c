//! Foreground timer driver.
//!
//! Owns the session for the life of the process. Two event sources funnel
//! into one loop: the `recv_timeout` period injects a `Tick` while the timer
//! runs, and a detached stdin reader forwards user command lines over the
//! same channel boundary. Dispatches are therefore serialized; the reducer
//! is never entered concurrently. Pausing stops further ticks because the
//! loop consults `is_running` before dispatching -- at most one stale tick
//! can land, and ticks are idempotent-safe.
//!
//! A host suspension (laptop lid, SIGSTOP) needs no special handling: the
//! first tick after resume recovers the full elapsed interval from the
//! wall clock.

use std::io::{BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use tomatin_core::{Action, Config, TimerSession, TimerState};

use super::emit;

pub fn run(phases: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut session = TimerSession::open()?;

    emit(session.dispatch(Action::Start));
    eprintln!("commands: pause, resume, reset, stop (alarm), status, quit");

    let (tx, rx) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let tick = Duration::from_millis(config.timer.tick_interval_ms.max(100));
    let mut completed = 0u32;
    let mut stdin_open = true;

    loop {
        if stdin_open {
            match rx.recv_timeout(tick) {
                Ok(line) => {
                    if !handle_command(line.trim(), &mut session)? {
                        break;
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    // Piped or closed stdin: keep ticking on our own clock.
                    stdin_open = false;
                    continue;
                }
                Err(RecvTimeoutError::Timeout) => {}
            }
        } else {
            std::thread::sleep(tick);
        }

        if !session.state().is_running {
            if !stdin_open {
                // Nothing can ever restart the countdown now.
                break;
            }
            continue;
        }

        session.dispatch(Action::Tick);
        render_countdown(session.state());

        if session.state().time_remaining_secs == 0 {
            println!();
            emit(session.dispatch(Action::UpdateStatistics));
            let flipped = session.dispatch(Action::TogglePhase);
            if session.state().is_alarm_active && session.state().sound.enabled {
                ring_bell();
            }
            emit(flipped);

            completed += 1;
            if let Some(limit) = phases {
                if completed >= limit {
                    break;
                }
            }
            if config.timer.auto_advance {
                emit(session.dispatch(Action::StopAlarm));
                emit(session.dispatch(Action::Start));
            }
        }
    }
    Ok(())
}

fn handle_command(
    line: &str,
    session: &mut TimerSession,
) -> Result<bool, Box<dyn std::error::Error>> {
    match line {
        "" => {}
        "pause" | "p" => {
            // Flush elapsed time first so the freeze lands on the current value.
            session.dispatch(Action::Tick);
            emit(session.dispatch(Action::Pause));
        }
        "resume" | "start" | "r" => emit(session.dispatch(Action::Start)),
        "reset" => emit(session.dispatch(Action::Reset)),
        "stop" | "s" => emit(session.dispatch(Action::StopAlarm)),
        "status" => println!("{}", serde_json::to_string_pretty(session.state())?),
        "quit" | "q" => return Ok(false),
        other => eprintln!("unknown command: {other}"),
    }
    Ok(true)
}

fn render_countdown(state: &TimerState) {
    let remaining = state.time_remaining_secs;
    print!(
        "\r{} {:02}:{:02}  ",
        state.current_phase.as_str(),
        remaining / 60,
        remaining % 60
    );
    let _ = std::io::stdout().flush();
}

fn ring_bell() {
    print!("\x07");
    let _ = std::io::stdout().flush();
}
