//! The track graph: waypoints joined by axis-aligned corridors.
//!
//! A [`Track`] owns its [`Waypoint`]s (indexed by dense [`WaypointId`]s in
//! creation order) and its undirected [`Corridor`]s. It is normally produced
//! by the `track-parse` crate and is read-only afterwards, apart from the
//! one-shot destination marking pass.
//!
//! # Example
//!
//! ```
//! use track_types::Track;
//! use nalgebra::Point2;
//!
//! let mut track = Track::new();
//! let a = track.add_waypoint(Point2::new(0.0, 0.0));
//! let b = track.add_waypoint(Point2::new(2.0, 0.0));
//! track.add_corridor(a, b).unwrap();
//!
//! assert_eq!(track.waypoint_count(), 2);
//! assert!((track.total_length() - 2.0).abs() < 1e-10);
//! ```

use nalgebra::Point2;

use crate::error::TrackError;
use crate::geometry::{Bounds, points_coincide};

/// Dense identifier of a waypoint; equal to its index in [`Track::waypoints`].
pub type WaypointId = usize;

/// A graph node at a unique 2D coordinate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    id: WaypointId,
    position: Point2<f64>,
    destination: bool,
}

impl Waypoint {
    /// Returns the waypoint id.
    #[must_use]
    pub const fn id(&self) -> WaypointId {
        self.id
    }

    /// Returns the position.
    #[must_use]
    pub const fn position(&self) -> &Point2<f64> {
        &self.position
    }

    /// X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Y coordinate (grows downward).
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Whether this waypoint may be chosen as a route destination.
    #[must_use]
    pub const fn is_destination(&self) -> bool {
        self.destination
    }
}

/// An undirected corridor between two waypoints.
///
/// The endpoint order records how the corridor was created and carries no
/// meaning for routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Corridor {
    /// First endpoint.
    pub a: WaypointId,
    /// Second endpoint.
    pub b: WaypointId,
}

impl Corridor {
    /// Creates a corridor between `a` and `b`.
    #[must_use]
    pub const fn new(a: WaypointId, b: WaypointId) -> Self {
        Self { a, b }
    }

    /// Returns `true` if `id` is one of the endpoints.
    #[must_use]
    pub const fn touches(&self, id: WaypointId) -> bool {
        self.a == id || self.b == id
    }

    /// Returns the endpoint opposite to `id`, if `id` is an endpoint.
    ///
    /// # Example
    ///
    /// ```
    /// use track_types::Corridor;
    ///
    /// let corridor = Corridor::new(3, 7);
    /// assert_eq!(corridor.other(3), Some(7));
    /// assert_eq!(corridor.other(5), None);
    /// ```
    #[must_use]
    pub const fn other(&self, id: WaypointId) -> Option<WaypointId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }

    /// Returns `true` if the corridor joins `x` and `y` in either order.
    #[must_use]
    pub const fn joins(&self, x: WaypointId, y: WaypointId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// Graph of waypoints and corridors.
///
/// Serializes for output only. A track is always assembled through
/// [`Track::add_waypoint`] and [`Track::add_corridor`], which check ids.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Track {
    waypoints: Vec<Waypoint>,
    corridors: Vec<Corridor>,
}

impl Track {
    /// Creates an empty track.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            waypoints: Vec::new(),
            corridors: Vec::new(),
        }
    }

    /// All waypoints, indexed by id.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// All corridors in creation order.
    #[must_use]
    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    /// Number of waypoints.
    #[must_use]
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Number of corridors.
    #[must_use]
    pub fn corridor_count(&self) -> usize {
        self.corridors.len()
    }

    /// Returns the waypoint with the given id.
    #[must_use]
    pub fn waypoint(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.get(id)
    }

    /// Returns `true` if `id` names a waypoint of this track.
    #[must_use]
    pub fn contains(&self, id: WaypointId) -> bool {
        id < self.waypoints.len()
    }

    /// Fails with [`TrackError::InvalidId`] unless `id` is in `0..N`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidId`] for out-of-range ids.
    pub fn check_id(&self, id: WaypointId) -> Result<(), TrackError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(TrackError::InvalidId {
                id,
                count: self.waypoints.len(),
            })
        }
    }

    /// Position of a waypoint.
    #[must_use]
    pub fn position(&self, id: WaypointId) -> Option<&Point2<f64>> {
        self.waypoints.get(id).map(Waypoint::position)
    }

    /// Appends a waypoint and returns its id.
    ///
    /// Callers are responsible for not placing two waypoints at the same
    /// coordinate; see [`Track::waypoint_at`].
    pub fn add_waypoint(&mut self, position: Point2<f64>) -> WaypointId {
        let id = self.waypoints.len();
        self.waypoints.push(Waypoint {
            id,
            position,
            destination: false,
        });
        id
    }

    /// Appends a corridor between two existing waypoints and returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidId`] if an endpoint does not exist and
    /// [`TrackError::InvalidGeometry`] if both endpoints are the same waypoint.
    pub fn add_corridor(&mut self, a: WaypointId, b: WaypointId) -> Result<usize, TrackError> {
        self.check_id(a)?;
        self.check_id(b)?;
        if a == b {
            return Err(TrackError::InvalidGeometry { a, b });
        }
        self.corridors.push(Corridor::new(a, b));
        Ok(self.corridors.len() - 1)
    }

    /// Splits corridor `index` at waypoint `via`.
    ///
    /// The corridor `a-b` becomes `a-via` in place and `via-b` is appended.
    /// Returns the index of the appended half.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidId`] if `via` does not exist or `index`
    /// is not a corridor, and [`TrackError::InvalidGeometry`] if `via` is
    /// already an endpoint of the corridor.
    pub fn split_corridor(&mut self, index: usize, via: WaypointId) -> Result<usize, TrackError> {
        self.check_id(via)?;
        let count = self.corridors.len();
        let corridor = self
            .corridors
            .get_mut(index)
            .ok_or(TrackError::InvalidId { id: index, count })?;
        if corridor.touches(via) {
            return Err(TrackError::InvalidGeometry {
                a: corridor.a,
                b: corridor.b,
            });
        }
        let far = corridor.b;
        corridor.b = via;
        self.corridors.push(Corridor::new(via, far));
        Ok(self.corridors.len() - 1)
    }

    /// Flags a waypoint as a possible destination. The flag is never cleared.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidId`] for out-of-range ids.
    pub fn mark_destination(&mut self, id: WaypointId) -> Result<(), TrackError> {
        let count = self.waypoints.len();
        let waypoint = self
            .waypoints
            .get_mut(id)
            .ok_or(TrackError::InvalidId { id, count })?;
        waypoint.destination = true;
        Ok(())
    }

    /// Finds the waypoint at `position`, comparing within `tolerance`.
    #[must_use]
    pub fn waypoint_at(&self, position: &Point2<f64>, tolerance: f64) -> Option<WaypointId> {
        self.waypoints
            .iter()
            .find(|w| points_coincide(&w.position, position, tolerance))
            .map(Waypoint::id)
    }

    /// Endpoint positions of a corridor.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a waypoint of this track. Corridors
    /// returned by [`Track::corridors`] always satisfy this.
    #[must_use]
    pub fn segment(&self, corridor: &Corridor) -> (Point2<f64>, Point2<f64>) {
        (
            self.waypoints[corridor.a].position,
            self.waypoints[corridor.b].position,
        )
    }

    /// Euclidean length of a corridor.
    #[must_use]
    pub fn corridor_length(&self, corridor: &Corridor) -> f64 {
        let (a, b) = self.segment(corridor);
        nalgebra::distance(&a, &b)
    }

    /// Sum of all corridor lengths.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.corridors.iter().map(|c| self.corridor_length(c)).sum()
    }

    /// Length of the shortest corridor, `None` for a track without corridors.
    #[must_use]
    pub fn shortest_corridor(&self) -> Option<f64> {
        self.corridors
            .iter()
            .map(|c| self.corridor_length(c))
            .reduce(f64::min)
    }

    /// Corridors incident to `id` with their indices, in corridor order.
    pub fn corridors_at(&self, id: WaypointId) -> impl Iterator<Item = (usize, &Corridor)> + '_ {
        self.corridors
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.touches(id))
    }

    /// Neighbouring waypoints of `id` with the corridor length to each.
    pub fn neighbors(&self, id: WaypointId) -> impl Iterator<Item = (WaypointId, f64)> + '_ {
        self.corridors_at(id)
            .filter_map(move |(_, c)| c.other(id).map(|n| (n, self.corridor_length(c))))
    }

    /// Number of corridors incident to `id`.
    #[must_use]
    pub fn degree(&self, id: WaypointId) -> usize {
        self.corridors_at(id).count()
    }

    /// Degree of every waypoint, indexed by id.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.waypoints.len()];
        for corridor in &self.corridors {
            degrees[corridor.a] += 1;
            degrees[corridor.b] += 1;
        }
        degrees
    }

    /// Waypoints flagged as possible destinations.
    pub fn destinations(&self) -> impl Iterator<Item = &Waypoint> + '_ {
        self.waypoints.iter().filter(|w| w.destination)
    }

    /// Bounding box of all waypoints, `None` for an empty track.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.waypoints.iter().map(|w| w.position))
    }
}
