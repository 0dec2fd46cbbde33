//! Ray/corridor intersection for axis-aligned geometry.
//!
//! Every move of the cursor is validated by probing a [`Ray`] from the
//! cursor along the move heading against all corridors built so far. Only
//! intersections strictly ahead of the ray origin count.
//!
//! # Example
//!
//! ```
//! use track_parse::intersect::{Probe, Ray, intersection_distance};
//! use track_types::Heading;
//! use nalgebra::Point2;
//!
//! // Horizontal corridor two units above the origin (y grows downward).
//! let corridor = (Point2::new(-1.0, -2.0), Point2::new(1.0, -2.0));
//! let ray = Ray::new(Point2::origin(), Heading::Up);
//!
//! assert_eq!(intersection_distance(&ray, corridor, 1e-9), Probe::Hit(2.0));
//! ```

use nalgebra::Point2;
use track_types::{Heading, Track, TrackError, approx_eq};

/// A half-line starting at `origin` and running along `heading`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start of the ray.
    pub origin: Point2<f64>,
    /// Direction of the ray.
    pub heading: Heading,
}

/// Outcome of probing one corridor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Probe {
    /// No intersection strictly ahead of the origin.
    Miss,
    /// Nearest intersection at this positive distance.
    Hit(f64),
    /// The ray runs along the corridor starting inside or at one end of it.
    Overlap,
}

/// Nearest corridor met by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance from the ray origin.
    pub distance: f64,
    /// Index of the corridor in [`Track::corridors`].
    pub corridor: usize,
}

impl Ray {
    /// Creates a ray.
    #[must_use]
    pub const fn new(origin: Point2<f64>, heading: Heading) -> Self {
        Self { origin, heading }
    }

    /// Signed distance from the origin to `coord` along the heading axis.
    fn forward(&self, coord: f64) -> f64 {
        let (dx, dy) = self.heading.offsets();
        if self.heading.is_vertical() {
            (coord - self.origin.y) * f64::from(dy)
        } else {
            (coord - self.origin.x) * f64::from(dx)
        }
    }

    /// Probes every corridor of `track` and returns the nearest hit.
    ///
    /// Ties keep the lowest corridor index.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::CollinearOverlap`] if the ray runs along an
    /// existing corridor.
    pub fn nearest_hit(&self, track: &Track, tolerance: f64) -> Result<Option<Hit>, TrackError> {
        let mut nearest: Option<Hit> = None;
        for (index, corridor) in track.corridors().iter().enumerate() {
            match intersection_distance(self, track.segment(corridor), tolerance) {
                Probe::Miss => {}
                Probe::Overlap => {
                    return Err(TrackError::CollinearOverlap {
                        from: self.origin,
                        heading: self.heading,
                        corridor: index,
                    });
                }
                Probe::Hit(distance) => {
                    if nearest.is_none_or(|n| distance < n.distance) {
                        nearest = Some(Hit {
                            distance,
                            corridor: index,
                        });
                    }
                }
            }
        }
        Ok(nearest)
    }
}

/// Returns `true` if the segment runs along the Y axis.
fn is_vertical(segment: (Point2<f64>, Point2<f64>), tolerance: f64) -> bool {
    approx_eq(segment.0.x, segment.1.x, tolerance)
}

/// Closed interval spanned by two coordinates.
fn span(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Distance from the ray origin to its intersection with a corridor.
///
/// - Ray and corridor perpendicular: a hit if the ray's fixed coordinate lies
///   within the corridor's span (inclusive) and the crossing is ahead.
/// - Parallel on different lines: [`Probe::Miss`].
/// - Collinear: nearer endpoint if both are ahead, [`Probe::Miss`] if both
///   are behind or at the origin, [`Probe::Overlap`] otherwise.
#[must_use]
pub fn intersection_distance(
    ray: &Ray,
    segment: (Point2<f64>, Point2<f64>),
    tolerance: f64,
) -> Probe {
    let (a, b) = segment;
    let ahead = |d: f64| d > tolerance;

    match (ray.heading.is_vertical(), is_vertical(segment, tolerance)) {
        (true, false) => {
            let (min, max) = span(a.x, b.x);
            if ray.origin.x < min - tolerance || ray.origin.x > max + tolerance {
                return Probe::Miss;
            }
            let d = ray.forward(a.y);
            if ahead(d) { Probe::Hit(d) } else { Probe::Miss }
        }
        (false, true) => {
            let (min, max) = span(a.y, b.y);
            if ray.origin.y < min - tolerance || ray.origin.y > max + tolerance {
                return Probe::Miss;
            }
            let d = ray.forward(a.x);
            if ahead(d) { Probe::Hit(d) } else { Probe::Miss }
        }
        (vertical, _) => {
            let (d1, d2) = if vertical {
                if !approx_eq(ray.origin.x, a.x, tolerance) {
                    return Probe::Miss;
                }
                (ray.forward(a.y), ray.forward(b.y))
            } else {
                if !approx_eq(ray.origin.y, a.y, tolerance) {
                    return Probe::Miss;
                }
                (ray.forward(a.x), ray.forward(b.x))
            };
            match (ahead(d1), ahead(d2)) {
                (true, true) => Probe::Hit(d1.min(d2)),
                (false, false) => Probe::Miss,
                _ => Probe::Overlap,
            }
        }
    }
}

/// Returns `true` if `point` lies strictly inside the segment, away from
/// both endpoints.
#[must_use]
pub fn segment_interior_contains(
    segment: (Point2<f64>, Point2<f64>),
    point: &Point2<f64>,
    tolerance: f64,
) -> bool {
    let (a, b) = segment;
    let (fixed, along, lo, hi) = if is_vertical(segment, tolerance) {
        let (lo, hi) = span(a.y, b.y);
        (approx_eq(point.x, a.x, tolerance), point.y, lo, hi)
    } else {
        let (lo, hi) = span(a.x, b.x);
        (approx_eq(point.y, a.y, tolerance), point.x, lo, hi)
    };
    fixed && along > lo + tolerance && along < hi - tolerance
}

/// Moves `point` onto the line carrying the segment.
#[must_use]
pub fn snap_to_segment(
    segment: (Point2<f64>, Point2<f64>),
    point: &Point2<f64>,
    tolerance: f64,
) -> Point2<f64> {
    let (a, _) = segment;
    if is_vertical(segment, tolerance) {
        Point2::new(a.x, point.y)
    } else {
        Point2::new(point.x, a.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> (Point2<f64>, Point2<f64>) {
        (Point2::new(ax, ay), Point2::new(bx, by))
    }

    fn ray(x: f64, y: f64, heading: Heading) -> Ray {
        Ray::new(Point2::new(x, y), heading)
    }

    #[test]
    fn test_vertical_ray_horizontal_corridor() {
        let corridor = seg(-1.0, 3.0, 1.0, 3.0);
        assert_eq!(
            intersection_distance(&ray(0.0, 0.0, Heading::Down), corridor, TOL),
            Probe::Hit(3.0)
        );
        // Behind the ray.
        assert_eq!(
            intersection_distance(&ray(0.0, 0.0, Heading::Up), corridor, TOL),
            Probe::Miss
        );
        // Outside the span.
        assert_eq!(
            intersection_distance(&ray(2.0, 0.0, Heading::Down), corridor, TOL),
            Probe::Miss
        );
    }

    #[test]
    fn test_horizontal_ray_vertical_corridor() {
        // Corridor endpoints given high-to-low must still span correctly.
        let corridor = seg(4.0, 2.0, 4.0, -2.0);
        assert_eq!(
            intersection_distance(&ray(0.0, 1.0, Heading::Right), corridor, TOL),
            Probe::Hit(4.0)
        );
        assert_eq!(
            intersection_distance(&ray(6.0, 1.0, Heading::Left), corridor, TOL),
            Probe::Hit(2.0)
        );
    }

    #[test]
    fn test_span_is_inclusive() {
        // Touching the corridor's endpoint counts as a hit.
        let corridor = seg(0.0, -2.0, 3.0, -2.0);
        assert_eq!(
            intersection_distance(&ray(3.0, 0.0, Heading::Up), corridor, TOL),
            Probe::Hit(2.0)
        );
    }

    #[test]
    fn test_origin_on_corridor_is_ignored() {
        let corridor = seg(-1.0, 0.0, 1.0, 0.0);
        assert_eq!(
            intersection_distance(&ray(0.0, 0.0, Heading::Up), corridor, TOL),
            Probe::Miss
        );
    }

    #[test]
    fn test_parallel_different_line() {
        let corridor = seg(0.0, 1.0, 5.0, 1.0);
        assert_eq!(
            intersection_distance(&ray(0.0, 0.0, Heading::Right), corridor, TOL),
            Probe::Miss
        );
    }

    #[test]
    fn test_collinear_ahead_returns_nearer_endpoint() {
        let corridor = seg(5.0, 0.0, 2.0, 0.0);
        assert_eq!(
            intersection_distance(&ray(0.0, 0.0, Heading::Right), corridor, TOL),
            Probe::Hit(2.0)
        );
    }

    #[test]
    fn test_collinear_behind_or_touching_is_miss() {
        let corridor = seg(-3.0, 0.0, 0.0, 0.0);
        assert_eq!(
            intersection_distance(&ray(0.0, 0.0, Heading::Right), corridor, TOL),
            Probe::Miss
        );
    }

    #[test]
    fn test_collinear_straddling_is_overlap() {
        let corridor = seg(-1.0, 0.0, 1.0, 0.0);
        assert_eq!(
            intersection_distance(&ray(0.0, 0.0, Heading::Right), corridor, TOL),
            Probe::Overlap
        );
        // Retracing a corridor from its end.
        let corridor = seg(0.0, 0.0, 0.0, 2.0);
        assert_eq!(
            intersection_distance(&ray(0.0, 2.0, Heading::Up), corridor, TOL),
            Probe::Overlap
        );
    }

    #[test]
    fn test_nearest_hit_over_track() {
        let mut track = Track::new();
        let ids: Vec<_> = [(3.0, -1.0), (3.0, 1.0), (1.0, -1.0), (1.0, 1.0)]
            .into_iter()
            .map(|(x, y)| track.add_waypoint(Point2::new(x, y)))
            .collect();
        track.add_corridor(ids[0], ids[1]).unwrap();
        track.add_corridor(ids[2], ids[3]).unwrap();

        let hit = ray(0.0, 0.0, Heading::Right)
            .nearest_hit(&track, TOL)
            .unwrap()
            .unwrap();
        assert_eq!(hit.corridor, 1);
        assert_eq!(hit.distance, 1.0);

        let miss = ray(0.0, 0.0, Heading::Left).nearest_hit(&track, TOL).unwrap();
        assert!(miss.is_none());
    }

    #[test]
    fn test_nearest_hit_reports_overlap() {
        let mut track = Track::new();
        let a = track.add_waypoint(Point2::new(0.0, 0.0));
        let b = track.add_waypoint(Point2::new(2.0, 0.0));
        track.add_corridor(a, b).unwrap();

        let err = ray(2.0, 0.0, Heading::Left)
            .nearest_hit(&track, TOL)
            .unwrap_err();
        assert!(matches!(err, TrackError::CollinearOverlap { corridor: 0, .. }));
    }

    #[test]
    fn test_interior_contains() {
        let corridor = seg(0.0, 0.0, 0.0, 4.0);
        assert!(segment_interior_contains(corridor, &Point2::new(0.0, 1.0), TOL));
        assert!(!segment_interior_contains(corridor, &Point2::new(0.0, 4.0), TOL));
        assert!(!segment_interior_contains(corridor, &Point2::new(1.0, 1.0), TOL));
    }

    #[test]
    fn test_snap() {
        let corridor = seg(0.0, 2.0, 5.0, 2.0);
        let snapped = snap_to_segment(corridor, &Point2::new(1.5, 2.0 + 1e-12), TOL);
        assert_eq!(snapped, Point2::new(1.5, 2.0));
    }
}
