//! Error types for track parsing and navigation.
//!
//! This module defines the [`TrackError`] enum which represents every failure
//! the kernel can report. Variants fall into four categories:
//!
//! - **Syntax**: the track description is malformed ([`TrackError::Syntax`])
//! - **Geometry**: a move is well-formed but geometrically impossible
//!   ([`TrackError::CrossesCorridor`], [`TrackError::Unbounded`],
//!   [`TrackError::CollinearOverlap`], [`TrackError::NoWaypoint`],
//!   [`TrackError::InvalidGeometry`])
//! - **Invalid id**: a waypoint id is outside the track ([`TrackError::InvalidId`])
//! - **Unreachable**: no route exists ([`TrackError::Unreachable`])

use nalgebra::Point2;

use crate::geometry::Heading;
use crate::track::WaypointId;

/// Errors that can occur while parsing a track or routing over it.
///
/// # Example
///
/// ```
/// use track_types::TrackError;
///
/// let error = TrackError::syntax(3, "unknown token 'x'");
/// assert!(error.is_syntax());
/// assert!(error.to_string().contains("byte 3"));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TrackError {
    /// The track description could not be tokenized or is badly nested.
    #[error("syntax error at byte {offset}: {message}")]
    Syntax {
        /// Byte offset of the offending token in the input.
        offset: usize,
        /// Human readable description.
        message: String,
    },

    /// A bounded move would pass through an existing corridor.
    #[error(
        "moving {heading} by {distance} from ({}, {}) would cross an existing corridor after {hit}",
        .from.x, .from.y
    )]
    CrossesCorridor {
        /// Cursor position before the move.
        from: Point2<f64>,
        /// Direction of travel.
        heading: Heading,
        /// Requested travel distance.
        distance: f64,
        /// Distance at which the first corridor is met.
        hit: f64,
    },

    /// A wildcard move has no corridor in its path.
    #[error("wildcard move {heading} from ({}, {}) goes to infinity", .from.x, .from.y)]
    Unbounded {
        /// Cursor position before the move.
        from: Point2<f64>,
        /// Direction of travel.
        heading: Heading,
    },

    /// A move runs along an existing corridor on the same line.
    #[error(
        "moving {heading} from ({}, {}) would overlap corridor {corridor}",
        .from.x, .from.y
    )]
    CollinearOverlap {
        /// Cursor position before the move.
        from: Point2<f64>,
        /// Direction of travel.
        heading: Heading,
        /// Index of the overlapped corridor.
        corridor: usize,
    },

    /// A destination mark was placed where no waypoint exists.
    #[error("no waypoint at ({}, {}) to mark as destination", .0.x, .0.y)]
    NoWaypoint(Point2<f64>),

    /// A corridor direction is not one of the four cardinal headings.
    #[error("corridor between waypoints {a} and {b} is not axis-aligned")]
    InvalidGeometry {
        /// First endpoint.
        a: WaypointId,
        /// Second endpoint.
        b: WaypointId,
    },

    /// A waypoint id is outside `0..count`.
    #[error("waypoint id {id} is out of range for a track with {count} waypoints")]
    InvalidId {
        /// The rejected id.
        id: WaypointId,
        /// Number of waypoints in the track.
        count: usize,
    },

    /// No sequence of corridors connects the two waypoints.
    #[error("waypoint {to} is unreachable from waypoint {from}")]
    Unreachable {
        /// Route source.
        from: WaypointId,
        /// Route target.
        to: WaypointId,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TrackError {
    /// Creates a syntax error at the given byte offset.
    #[must_use]
    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error with the given message.
    ///
    /// # Example
    ///
    /// ```
    /// use track_types::TrackError;
    ///
    /// let error = TrackError::invalid_config("tolerance must be positive");
    /// assert!(error.to_string().contains("tolerance"));
    /// ```
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` for malformed input.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    /// Returns `true` for geometrically impossible moves or corridors.
    #[must_use]
    pub const fn is_geometry(&self) -> bool {
        matches!(
            self,
            Self::CrossesCorridor { .. }
                | Self::Unbounded { .. }
                | Self::CollinearOverlap { .. }
                | Self::NoWaypoint(_)
                | Self::InvalidGeometry { .. }
        )
    }

    /// Returns `true` if a waypoint id was out of range.
    #[must_use]
    pub const fn is_invalid_id(&self) -> bool {
        matches!(self, Self::InvalidId { .. })
    }

    /// Returns `true` if no route exists between the requested waypoints.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_display() {
        let error = TrackError::syntax(7, "unknown token 'q'");
        let msg = error.to_string();
        assert!(msg.contains("byte 7"));
        assert!(msg.contains("unknown token"));
    }

    #[test]
    fn test_crosses_display() {
        let error = TrackError::CrossesCorridor {
            from: Point2::new(0.0, 0.0),
            heading: Heading::Right,
            distance: 3.0,
            hit: 1.0,
        };
        let msg = error.to_string();
        assert!(msg.contains("cross"));
        assert!(msg.contains("right"));
    }

    #[test]
    fn test_unbounded_display() {
        let error = TrackError::Unbounded {
            from: Point2::new(1.0, 2.0),
            heading: Heading::Up,
        };
        assert!(error.to_string().contains("infinity"));
    }

    #[test]
    fn test_unreachable_display() {
        let error = TrackError::Unreachable { from: 0, to: 4 };
        assert_eq!(error.to_string(), "waypoint 4 is unreachable from waypoint 0");
    }

    #[test]
    fn test_categories() {
        assert!(TrackError::syntax(0, "x").is_syntax());
        assert!(TrackError::NoWaypoint(Point2::origin()).is_geometry());
        assert!(TrackError::InvalidGeometry { a: 0, b: 1 }.is_geometry());
        assert!(TrackError::InvalidId { id: 9, count: 2 }.is_invalid_id());
        assert!(TrackError::Unreachable { from: 0, to: 1 }.is_unreachable());

        let overlap = TrackError::CollinearOverlap {
            from: Point2::origin(),
            heading: Heading::Left,
            corridor: 0,
        };
        assert!(overlap.is_geometry());
        assert!(!overlap.is_syntax());
        assert!(!overlap.is_unreachable());
    }

    #[test]
    fn test_invalid_config_helper() {
        let error = TrackError::invalid_config("max_depth must be positive");
        assert!(matches!(error, TrackError::InvalidConfig(msg) if msg.contains("max_depth")));
    }
}
