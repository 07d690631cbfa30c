pub mod config;
pub mod mode;
pub mod run;
pub mod sound;
pub mod stats;
pub mod status;

use tomatin_core::Event;

/// Print an event as one JSON line, if the dispatch produced one.
pub fn emit(event: Option<Event>) {
    if let Some(event) = event {
        match serde_json::to_string(&event) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to encode event: {e}"),
        }
    }
}
