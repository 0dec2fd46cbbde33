//! Turn-by-turn instructions along a route.
//!
//! At every route waypoint each incident corridor is labelled relative to
//! the current direction of travel using the 2D cross and dot products of
//! the travel direction `o` and the corridor direction `d`:
//!
//! | `dot(o, d)` | `cross(o, d)` | Label |
//! |-------------|---------------|-------|
//! | `> 0` | `0` | straight |
//! | `< 0` | `0` | back |
//! | `0` | `> 0` | right |
//! | `0` | `< 0` | left |
//!
//! With Y pointing down a positive cross product is a clockwise (right) turn.

use std::cmp::Ordering;

use nalgebra::Vector2;
use tracing::trace;
use track_types::{
    Heading, NavigateConfig, NavigationStep, Route, Track, TrackError, Turn, WaypointId,
};

/// Z component of the cross product `o × d`.
fn cross(o: &Vector2<f64>, d: &Vector2<f64>) -> f64 {
    o.x * d.y - o.y * d.x
}

/// Labels direction `direction` relative to travel direction `orientation`.
///
/// Returns `None` if the two directions are neither parallel nor
/// perpendicular.
///
/// # Example
///
/// ```
/// use track_navigate::turns::classify;
/// use track_types::{Heading, Turn};
///
/// // Heading right, a corridor going up (toward -y) is a left turn.
/// assert_eq!(classify(Heading::Right, Heading::Up), Some(Turn::Left));
/// assert_eq!(classify(Heading::Right, Heading::Down), Some(Turn::Right));
/// ```
#[must_use]
pub fn classify(orientation: Heading, direction: Heading) -> Option<Turn> {
    let o = orientation.unit();
    let d = direction.unit();
    let dot = o.dot(&d);
    let side = cross(&o, &d);

    match (dot.partial_cmp(&0.0)?, side.partial_cmp(&0.0)?) {
        (Ordering::Greater, Ordering::Equal) => Some(Turn::Straight),
        (Ordering::Less, Ordering::Equal) => Some(Turn::Back),
        (Ordering::Equal, Ordering::Greater) => Some(Turn::Right),
        (Ordering::Equal, Ordering::Less) => Some(Turn::Left),
        _ => None,
    }
}

/// Cardinal heading of the corridor running from `from` to `to`.
///
/// # Errors
///
/// Returns [`TrackError::InvalidId`] for unknown waypoints and
/// [`TrackError::InvalidGeometry`] if the displacement is not axis-aligned.
pub fn corridor_heading(
    track: &Track,
    from: WaypointId,
    to: WaypointId,
    tolerance: f64,
) -> Result<Heading, TrackError> {
    let (Some(a), Some(b)) = (track.position(from), track.position(to)) else {
        let id = if track.contains(from) { to } else { from };
        return Err(TrackError::InvalidId {
            id,
            count: track.waypoint_count(),
        });
    };
    Heading::from_displacement(&(b - a), tolerance)
        .ok_or(TrackError::InvalidGeometry { a: from, b: to })
}

/// Builds the step taken at an interior route waypoint.
///
/// Returns the step and the heading of the corridor taken.
fn junction_step(
    track: &Track,
    orientation: Heading,
    (prev, here, next): (WaypointId, WaypointId, WaypointId),
    config: &NavigateConfig,
) -> Result<(NavigationStep, Heading), TrackError> {
    let mut options = Vec::new();
    let mut chosen = None;

    for (_, corridor) in track.corridors_at(here) {
        let Some(other) = corridor.other(here) else {
            continue;
        };
        let direction = corridor_heading(track, here, other, config.tolerance())?;
        let turn = classify(orientation, direction)
            .ok_or(TrackError::InvalidGeometry { a: here, b: other })?;

        if other == next && chosen.is_none() {
            chosen = Some((turn, direction));
        }
        if other == prev && !config.include_back() {
            continue;
        }
        options.push(turn);
    }

    let (turn, heading) = chosen.ok_or(TrackError::InvalidGeometry { a: here, b: next })?;
    trace!(waypoint = here, %turn, options = options.len(), "Junction");
    Ok((NavigationStep::new(here, options, Some(turn)), heading))
}

/// Converts a route into one [`NavigationStep`] per route waypoint.
///
/// - The first step is `options = [straight]`, `chosen = straight`; the
///   direction of travel is seeded from the first corridor.
/// - Interior steps label every incident corridor, in corridor order.
/// - The last step has no options and nothing chosen.
///
/// An empty route yields no steps.
///
/// # Errors
///
/// Returns [`TrackError::InvalidId`] for route waypoints outside the track and
/// [`TrackError::InvalidGeometry`] if consecutive waypoints are not joined by
/// a corridor or a corridor is not axis-aligned.
///
/// # Example
///
/// ```
/// use track_navigate::turns::synthesize;
/// use track_types::{NavigateConfig, Route, Turn};
/// use track_parse::parse_track;
///
/// let track = parse_track("r1t1").unwrap();
/// let steps = synthesize(&track, &Route::new(vec![0, 1, 2], 2.0), &NavigateConfig::default()).unwrap();
///
/// assert_eq!(steps[1].chosen(), Some(Turn::Left));
/// assert!(steps[2].is_final());
/// ```
pub fn synthesize(
    track: &Track,
    route: &Route,
    config: &NavigateConfig,
) -> Result<Vec<NavigationStep>, TrackError> {
    let ids = route.waypoints();
    for &id in ids {
        track.check_id(id)?;
    }
    let (Some(&first), Some(&last)) = (ids.first(), ids.last()) else {
        return Ok(Vec::new());
    };
    if ids.len() == 1 {
        return Ok(vec![NavigationStep::arrival(first)]);
    }

    if !track.corridors_at(first).any(|(_, c)| c.joins(first, ids[1])) {
        return Err(TrackError::InvalidGeometry { a: first, b: ids[1] });
    }
    let mut orientation = corridor_heading(track, first, ids[1], config.tolerance())?;

    let mut steps = Vec::with_capacity(ids.len());
    steps.push(NavigationStep::new(first, vec![Turn::Straight], Some(Turn::Straight)));

    for window in ids.windows(3) {
        let leg = (window[0], window[1], window[2]);
        let (step, heading) = junction_step(track, orientation, leg, config)?;
        steps.push(step);
        orientation = heading;
    }

    steps.push(NavigationStep::arrival(last));
    Ok(steps)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn track(points: &[(f64, f64)], corridors: &[(usize, usize)]) -> Track {
        let mut track = Track::new();
        for &(x, y) in points {
            track.add_waypoint(Point2::new(x, y));
        }
        for &(a, b) in corridors {
            track.add_corridor(a, b).unwrap();
        }
        track
    }

    /// A plus sign: center 0, tips right 1, up 2, left 3, down 4.
    fn plus() -> Track {
        track(
            &[(0.0, 0.0), (1.0, 0.0), (0.0, -1.0), (-1.0, 0.0), (0.0, 1.0)],
            &[(0, 1), (0, 2), (0, 3), (0, 4)],
        )
    }

    fn steps(track: &Track, ids: &[usize]) -> Vec<NavigationStep> {
        synthesize(track, &Route::new(ids.to_vec(), 0.0), &NavigateConfig::default()).unwrap()
    }

    #[test]
    fn test_classify_all_pairs() {
        use Heading::{Down, Left, Right, Up};
        assert_eq!(classify(Right, Right), Some(Turn::Straight));
        assert_eq!(classify(Right, Left), Some(Turn::Back));
        assert_eq!(classify(Right, Up), Some(Turn::Left));
        assert_eq!(classify(Right, Down), Some(Turn::Right));
        assert_eq!(classify(Up, Right), Some(Turn::Right));
        assert_eq!(classify(Up, Left), Some(Turn::Left));
        assert_eq!(classify(Down, Right), Some(Turn::Left));
        assert_eq!(classify(Left, Down), Some(Turn::Left));
        for h in Heading::ALL {
            assert_eq!(classify(h, h.reversed()), Some(Turn::Back));
        }
    }

    #[test]
    fn test_crossing_the_plus() {
        // Arrive from the left tip heading right.
        let steps = steps(&plus(), &[3, 0, 1]);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].options(), &[Turn::Straight]);
        assert_eq!(steps[0].chosen(), Some(Turn::Straight));

        // Corridor order: to 1, to 2, to 3, to 4.
        assert_eq!(
            steps[1].options(),
            &[Turn::Straight, Turn::Left, Turn::Back, Turn::Right]
        );
        assert_eq!(steps[1].chosen(), Some(Turn::Straight));
        assert_eq!(steps[1].exits(), vec![Turn::Straight, Turn::Left, Turn::Right]);
        assert_eq!(steps[2], NavigationStep::arrival(1));
    }

    #[test]
    fn test_turning_in_the_plus() {
        // Arriving upward from the bottom tip.
        let to_right = steps(&plus(), &[4, 0, 1]);
        assert_eq!(to_right[1].chosen(), Some(Turn::Right));
        let to_left = steps(&plus(), &[4, 0, 3]);
        assert_eq!(to_left[1].chosen(), Some(Turn::Left));
    }

    #[test]
    fn test_without_back() {
        let config = NavigateConfig::default().with_back(false);
        let steps = synthesize(&plus(), &Route::new(vec![3, 0, 1], 2.0), &config).unwrap();
        assert_eq!(steps[1].options(), &[Turn::Straight, Turn::Left, Turn::Right]);
    }

    #[test]
    fn test_single_waypoint_route() {
        let steps = steps(&plus(), &[2]);
        assert_eq!(steps, vec![NavigationStep::arrival(2)]);
    }

    #[test]
    fn test_empty_route() {
        assert!(steps(&plus(), &[]).is_empty());
    }

    #[test]
    fn test_orientation_follows_route() {
        // Staircase: right, up, right, up. Turns alternate left, right, left.
        let stairs = track(
            &[(0.0, 0.0), (1.0, 0.0), (1.0, -1.0), (2.0, -1.0), (2.0, -2.0)],
            &[(0, 1), (1, 2), (2, 3), (3, 4)],
        );
        let chosen: Vec<_> = steps(&stairs, &[0, 1, 2, 3, 4])
            .iter()
            .map(NavigationStep::chosen)
            .collect();
        assert_eq!(
            chosen,
            vec![
                Some(Turn::Straight),
                Some(Turn::Left),
                Some(Turn::Right),
                Some(Turn::Left),
                None
            ]
        );
    }

    #[test]
    fn test_disconnected_leg_rejected() {
        let err = synthesize(&plus(), &Route::new(vec![1, 2], 0.0), &NavigateConfig::default())
            .unwrap_err();
        assert_eq!(err, TrackError::InvalidGeometry { a: 1, b: 2 });

        let err = synthesize(&plus(), &Route::new(vec![1, 0, 9], 0.0), &NavigateConfig::default())
            .unwrap_err();
        assert!(err.is_invalid_id());
    }

    #[test]
    fn test_diagonal_corridor_rejected() {
        let bent = track(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0)], &[(0, 1), (1, 2)]);
        let err = synthesize(&bent, &Route::new(vec![0, 1, 2], 0.0), &NavigateConfig::default())
            .unwrap_err();
        assert!(matches!(err, TrackError::InvalidGeometry { .. }));
    }
}
