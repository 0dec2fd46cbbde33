//! `trackctl route`

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use track_navigate::Navigator;
use track_types::{NavigateConfig, NavigationStep, ParseConfig, Route, Turn, WaypointId};

use crate::input::load_track;

/// Plans a route through a track file and prints the steps.
pub fn run(path: &Path, from: WaypointId, to: WaypointId, json: bool, no_back: bool) -> Result<()> {
    let track = load_track(path, ParseConfig::default())?;
    let navigator = Navigator::new(&track, NavigateConfig::default().with_back(!no_back));

    let route = navigator
        .route(from, to)
        .with_context(|| format!("No route from {from} to {to}"))?;
    let steps = navigator.steps(&route)?;

    if json {
        let output = serde_json::json!({
            "route": route,
            "steps": steps,
        });
        let text = serde_json::to_string_pretty(&output).context("Failed to encode route")?;
        println!("{text}");
    } else {
        print_steps(&route, &steps);
    }
    Ok(())
}

fn turn_label(turn: Turn) -> String {
    match turn {
        Turn::Straight => turn.as_str().green().to_string(),
        Turn::Left | Turn::Right => turn.as_str().yellow().bold().to_string(),
        Turn::Back => turn.as_str().red().to_string(),
    }
}

fn print_steps(route: &Route, steps: &[NavigationStep]) {
    println!(
        "{} waypoints, length {:.3}",
        route.len().bold(),
        route.length()
    );
    for step in steps {
        match step.chosen() {
            Some(turn) => {
                let options: Vec<_> = step.options().iter().map(|t| t.as_str()).collect();
                println!(
                    "  at {:>4}: {} of [{}]",
                    step.waypoint(),
                    turn_label(turn),
                    options.join(", ")
                );
            }
            None => println!("  at {:>4}: {}", step.waypoint(), "arrived".bold()),
        }
    }
}
