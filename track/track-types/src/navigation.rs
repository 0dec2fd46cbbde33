//! Routes and turn-by-turn navigation output.
//!
//! A [`Route`] is the ordered list of waypoints produced by the shortest-path
//! search. Turning it into driving decisions yields one [`NavigationStep`] per
//! route waypoint, each labelling the available corridors with a [`Turn`].

use std::fmt;

use crate::track::WaypointId;

/// Direction of a corridor relative to the current direction of travel.
///
/// Serialized as the lowercase words `straight`, `left`, `right` and `back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Turn {
    /// Continue in the current direction.
    Straight,
    /// Turn left (counter-clockwise on screen).
    Left,
    /// Turn right (clockwise on screen).
    Right,
    /// Reverse along the corridor just travelled.
    Back,
}

impl Turn {
    /// Returns the lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Left => "left",
            Self::Right => "right",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-waypoint record of the possible and the chosen turn.
///
/// # Example
///
/// ```
/// use track_types::{NavigationStep, Turn};
///
/// let step = NavigationStep::new(4, vec![Turn::Back, Turn::Left, Turn::Right], Some(Turn::Left));
/// assert_eq!(step.exits(), vec![Turn::Left, Turn::Right]);
/// assert!(!step.is_final());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationStep {
    waypoint: WaypointId,
    options: Vec<Turn>,
    chosen: Option<Turn>,
}

impl NavigationStep {
    /// Creates a step.
    #[must_use]
    pub const fn new(waypoint: WaypointId, options: Vec<Turn>, chosen: Option<Turn>) -> Self {
        Self {
            waypoint,
            options,
            chosen,
        }
    }

    /// Creates the terminal step of a route: no options, nothing chosen.
    #[must_use]
    pub const fn arrival(waypoint: WaypointId) -> Self {
        Self::new(waypoint, Vec::new(), None)
    }

    /// The waypoint this step happens at.
    #[must_use]
    pub const fn waypoint(&self) -> WaypointId {
        self.waypoint
    }

    /// One label per incident corridor, in corridor order.
    #[must_use]
    pub fn options(&self) -> &[Turn] {
        &self.options
    }

    /// The label of the corridor taken next, `None` at the final step.
    #[must_use]
    pub const fn chosen(&self) -> Option<Turn> {
        self.chosen
    }

    /// Returns `true` for the terminal step.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        self.chosen.is_none()
    }

    /// Options without the corridor the vehicle arrived on.
    ///
    /// Removes a single [`Turn::Back`] entry, if present.
    #[must_use]
    pub fn exits(&self) -> Vec<Turn> {
        let mut exits = self.options.clone();
        if let Some(pos) = exits.iter().position(|t| *t == Turn::Back) {
            exits.remove(pos);
        }
        exits
    }
}

/// Shortest route between two waypoints.
///
/// # Example
///
/// ```
/// use track_types::Route;
///
/// let route = Route::new(vec![0, 1, 2, 3], 3.0);
/// assert_eq!(route.source(), Some(0));
/// assert_eq!(route.target(), Some(3));
/// assert_eq!(route.legs().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    waypoints: Vec<WaypointId>,
    length: f64,
}

impl Route {
    /// Creates a route from its waypoint sequence and total length.
    #[must_use]
    pub const fn new(waypoints: Vec<WaypointId>, length: f64) -> Self {
        Self { waypoints, length }
    }

    /// Waypoint ids, source first.
    #[must_use]
    pub fn waypoints(&self) -> &[WaypointId] {
        &self.waypoints
    }

    /// Sum of the corridor lengths along the route.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Number of waypoints on the route.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns `true` if the route holds no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// First waypoint.
    #[must_use]
    pub fn source(&self) -> Option<WaypointId> {
        self.waypoints.first().copied()
    }

    /// Last waypoint.
    #[must_use]
    pub fn target(&self) -> Option<WaypointId> {
        self.waypoints.last().copied()
    }

    /// Consecutive `(from, to)` pairs.
    pub fn legs(&self) -> impl Iterator<Item = (WaypointId, WaypointId)> + '_ {
        self.waypoints.windows(2).map(|w| (w[0], w[1]))
    }
}
