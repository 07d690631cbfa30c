mod mode;
mod reducer;
mod state;

pub use mode::{default_modes, Phase, TimerMode};
pub use reducer::{reduce, Action};
pub use state::{Snapshot, SoundConfig, Statistics, TimerState};
