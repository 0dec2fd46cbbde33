//! Destination marking pass.

use tracing::debug;
use track_types::Track;

/// Flags every waypoint with at most one incident corridor as a destination.
///
/// Waypoints marked explicitly with `_` keep their flag. Returns the number of
/// waypoints newly flagged.
pub fn mark_destinations(track: &mut Track) -> usize {
    let dead_ends: Vec<_> = track
        .degrees()
        .into_iter()
        .enumerate()
        .filter(|&(id, degree)| {
            degree <= 1 && track.waypoint(id).is_some_and(|w| !w.is_destination())
        })
        .map(|(id, _)| id)
        .collect();

    let mut marked = 0;
    for id in dead_ends {
        if track.mark_destination(id).is_ok() {
            marked += 1;
        }
    }

    debug!(marked, total = track.destinations().count(), "Marked destinations");
    marked
}
