//! Shortest routes and turn-by-turn navigation over parsed tracks.
//!
//! This crate works on the [`Track`] graphs produced by `track-parse`:
//!
//! - **Dijkstra** ([`dijkstra`]): weighted shortest paths with a
//!   deterministic lowest-id tie-break
//! - **Turns** ([`turns`]): labels the corridors at each route waypoint as
//!   straight, left, right or back relative to the direction of travel
//!
//! # Quick Start
//!
//! ```
//! use track_navigate::find_route;
//! use track_parse::parse_track;
//! use track_types::Turn;
//!
//! // Right 2, then a fork up and down.
//! let track = parse_track("r2(t1|b1)").unwrap();
//! let steps = find_route(&track, 0, 2).unwrap();
//!
//! assert_eq!(steps.len(), 3);
//! assert_eq!(steps[1].chosen(), Some(Turn::Left));
//! assert!(steps[2].is_final());
//! ```
//!
//! # Configuration
//!
//! [`Navigator`] bundles a track with a [`NavigateConfig`]. Setting
//! `include_back` to `false` leaves the corridor just travelled out of the
//! step options:
//!
//! ```
//! use track_navigate::Navigator;
//! use track_parse::parse_track;
//! use track_types::{NavigateConfig, Turn};
//!
//! let track = parse_track("r2(t1|b1)").unwrap();
//! let navigator = Navigator::new(&track, NavigateConfig::default().with_back(false));
//! let steps = navigator.find_route(0, 3).unwrap();
//!
//! assert_eq!(steps[1].options(), &[Turn::Left, Turn::Right]);
//! ```

#![doc(html_root_url = "https://docs.rs/track-navigate/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod dijkstra;
pub mod turns;

use tracing::debug;
use track_types::{NavigateConfig, NavigationStep, Route, Track, TrackError, WaypointId};

// Re-export main types for convenience
pub use dijkstra::{ShortestPathTree, shortest_path_tree, shortest_route};
pub use turns::{classify, synthesize};

/// Route planner bound to one track.
///
/// # Example
///
/// ```
/// use track_navigate::Navigator;
/// use track_parse::parse_track;
/// use track_types::NavigateConfig;
///
/// let track = parse_track("r1r1r1").unwrap();
/// let navigator = Navigator::new(&track, NavigateConfig::default());
///
/// let route = navigator.route(0, 3).unwrap();
/// assert_eq!(route.waypoints(), &[0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    /// The track to route over.
    track: &'a Track,
    /// Navigation settings.
    config: NavigateConfig,
}

impl<'a> Navigator<'a> {
    /// Creates a navigator over `track`.
    #[must_use]
    pub const fn new(track: &'a Track, config: NavigateConfig) -> Self {
        Self { track, config }
    }

    /// Creates a navigator with default settings.
    #[must_use]
    pub const fn with_defaults(track: &'a Track) -> Self {
        Self::new(track, NavigateConfig::new())
    }

    /// Returns the track.
    #[must_use]
    pub const fn track(&self) -> &Track {
        self.track
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &NavigateConfig {
        &self.config
    }

    /// Shortest route between two waypoints.
    ///
    /// # Errors
    ///
    /// See [`shortest_route`].
    pub fn route(&self, source: WaypointId, target: WaypointId) -> Result<Route, TrackError> {
        shortest_route(self.track, source, target)
    }

    /// Distances and predecessors from `source` to every waypoint.
    ///
    /// # Errors
    ///
    /// See [`shortest_path_tree`].
    pub fn tree(&self, source: WaypointId) -> Result<ShortestPathTree, TrackError> {
        shortest_path_tree(self.track, source)
    }

    /// Turn-by-turn steps along an existing route.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidConfig`] for an invalid configuration,
    /// otherwise see [`synthesize`].
    pub fn steps(&self, route: &Route) -> Result<Vec<NavigationStep>, TrackError> {
        self.config.ensure_valid()?;
        synthesize(self.track, route, &self.config)
    }

    /// Finds the shortest route and converts it into steps.
    ///
    /// # Errors
    ///
    /// - [`TrackError::InvalidConfig`] for an invalid configuration
    /// - [`TrackError::InvalidId`] if either id is out of range
    /// - [`TrackError::Unreachable`] if no corridors connect the waypoints
    pub fn find_route(
        &self,
        source: WaypointId,
        target: WaypointId,
    ) -> Result<Vec<NavigationStep>, TrackError> {
        self.config.ensure_valid()?;
        let route = self.route(source, target)?;
        let steps = synthesize(self.track, &route, &self.config)?;
        debug!(
            source,
            target,
            steps = steps.len(),
            length = route.length(),
            "Navigation planned"
        );
        Ok(steps)
    }
}

/// Finds the shortest route from `source` to `target` and returns one
/// [`NavigationStep`] per route waypoint, with default settings.
///
/// # Errors
///
/// See [`Navigator::find_route`].
pub fn find_route(
    track: &Track,
    source: WaypointId,
    target: WaypointId,
) -> Result<Vec<NavigationStep>, TrackError> {
    Navigator::with_defaults(track).find_route(source, target)
}

/// Converts a route into steps with default settings.
///
/// # Errors
///
/// See [`synthesize`].
pub fn navigation_steps(track: &Track, route: &Route) -> Result<Vec<NavigationStep>, TrackError> {
    Navigator::with_defaults(track).steps(route)
}
