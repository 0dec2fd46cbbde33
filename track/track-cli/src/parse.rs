//! `trackctl parse`

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use track_types::{ParseConfig, Track};

use crate::input::load_track;

/// Parses a track file and prints it.
pub fn run(path: &Path, json: bool, tolerance: Option<f64>) -> Result<()> {
    let mut config = ParseConfig::default();
    if let Some(tolerance) = tolerance {
        config = config.with_tolerance(tolerance);
    }
    let track = load_track(path, config)?;

    if json {
        let text = serde_json::to_string_pretty(&track).context("Failed to encode track")?;
        println!("{text}");
    } else {
        print_table(&track);
    }
    Ok(())
}

fn print_table(track: &Track) {
    println!(
        "{} waypoints, {} corridors, total length {:.3}",
        track.waypoint_count().bold(),
        track.corridor_count().bold(),
        track.total_length()
    );
    if let Some(bounds) = track.bounds() {
        println!(
            "bounds ({}, {}) .. ({}, {}), {} x {}",
            bounds.min.x,
            bounds.min.y,
            bounds.max.x,
            bounds.max.y,
            bounds.width(),
            bounds.height()
        );
    }

    println!();
    println!("{}", "Waypoints".underline());
    for waypoint in track.waypoints() {
        let marker = if waypoint.is_destination() {
            "destination".green().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:>4}  ({:>8}, {:>8})  degree {}  {marker}",
            waypoint.id(),
            waypoint.x(),
            waypoint.y(),
            track.degree(waypoint.id())
        );
    }

    println!();
    println!("{}", "Corridors".underline());
    for (index, corridor) in track.corridors().iter().enumerate() {
        println!(
            "  {index:>4}  {} - {}  length {:.3}",
            corridor.a,
            corridor.b,
            track.corridor_length(corridor)
        );
    }
}
