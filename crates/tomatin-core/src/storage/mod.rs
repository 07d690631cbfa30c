mod config;
pub mod store;

pub use config::Config;
pub use store::Store;

use std::path::PathBuf;

/// Returns `~/.config/tomatin[-dev]/`, creating it if needed.
///
/// Set `TOMATIN_DATA_DIR` to an explicit directory (tests do), or
/// `TOMATIN_ENV=dev` to keep development data separate.
pub fn data_dir() -> std::io::Result<PathBuf> {
    if let Ok(dir) = std::env::var("TOMATIN_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TOMATIN_ENV").unwrap_or_else(|_| "production".to_string());
    let dir = if env == "dev" {
        base_dir.join("tomatin-dev")
    } else {
        base_dir.join("tomatin")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
