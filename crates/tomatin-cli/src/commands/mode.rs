use clap::Subcommand;
use serde_json::json;
use tomatin_core::{Action, TimerMode, TimerSession, ValidationError};

use super::emit;

#[derive(Subcommand)]
pub enum ModeAction {
    /// List built-in and custom modes
    List,
    /// Add a custom mode and select it
    Add {
        /// Mode name (must be unique)
        name: String,
        /// Work phase length in minutes
        #[arg(long = "work")]
        work_min: u64,
        /// Break phase length in minutes
        #[arg(long = "break")]
        break_min: u64,
    },
    /// Remove a custom mode
    Remove {
        /// Mode name
        name: String,
    },
    /// Select a mode by name
    Select {
        /// Mode name
        name: String,
    },
}

pub fn run(action: ModeAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = TimerSession::open()?;

    match action {
        ModeAction::List => {
            let state = session.state();
            let rows: Vec<_> = state
                .available_modes()
                .into_iter()
                .map(|m| {
                    json!({
                        "name": m.name,
                        "work_min": m.work_secs / 60,
                        "break_min": m.break_secs / 60,
                        "custom": state.custom_modes.iter().any(|c| c.name == m.name),
                        "selected": m.name == state.selected_mode.name,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        ModeAction::Add {
            name,
            work_min,
            break_min,
        } => {
            // Boundary validation: the reducer never sees an invalid mode.
            if session.state().mode_name_taken(&name) {
                return Err(ValidationError::DuplicateMode(name).into());
            }
            let mode = TimerMode::new(
                name,
                work_min.saturating_mul(60),
                break_min.saturating_mul(60),
            )?;
            emit(session.dispatch(Action::AddCustomMode(mode)));
        }
        ModeAction::Remove { name } => {
            let known = session.state().custom_modes.iter().any(|m| m.name == name);
            if !known {
                return Err(ValidationError::UnknownMode(name).into());
            }
            emit(session.dispatch(Action::RemoveCustomMode(name)));
        }
        ModeAction::Select { name } => {
            let mode = session
                .state()
                .find_mode(&name)
                .ok_or(ValidationError::UnknownMode(name))?;
            emit(session.dispatch(Action::SetMode(mode)));
        }
    }
    Ok(())
}
