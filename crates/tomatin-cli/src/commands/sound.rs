use clap::Subcommand;
use tomatin_core::{Action, TimerSession, ValidationError};

use super::emit;

#[derive(Subcommand)]
pub enum SoundAction {
    /// Toggle the alarm sound on or off
    Toggle,
    /// Set the alarm volume (0.0 - 1.0)
    Volume {
        /// Fraction of full volume
        volume: f32,
    },
}

pub fn run(action: SoundAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = TimerSession::open()?;

    match action {
        SoundAction::Toggle => {
            emit(session.dispatch(Action::ToggleSound));
        }
        SoundAction::Volume { volume } => {
            if !(0.0..=1.0).contains(&volume) {
                return Err(ValidationError::VolumeOutOfRange(volume).into());
            }
            emit(session.dispatch(Action::SetVolume(volume)));
        }
    }
    Ok(())
}
