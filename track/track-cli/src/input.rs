//! Loading track descriptions from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use track_parse::TrackParser;
use track_types::{ParseConfig, Track};

/// Reads the whole description; `-` means stdin.
pub fn read_description(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read track from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Reads and parses a track.
pub fn load_track(path: &Path, config: ParseConfig) -> Result<Track> {
    let text = read_description(path)?;
    TrackParser::new(config)
        .parse(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
