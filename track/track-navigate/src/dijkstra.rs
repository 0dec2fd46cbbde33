//! Dijkstra shortest paths over a track.
//!
//! Corridor weights are Euclidean lengths. Among queue entries with equal
//! cost the lowest waypoint id is settled first, and a predecessor is only
//! replaced by a strictly shorter path, so results are fully deterministic.
//!
//! # Example
//!
//! ```
//! use track_navigate::dijkstra::shortest_route;
//! use track_parse::parse_track;
//!
//! let track = parse_track("r1r1r1").unwrap();
//! let route = shortest_route(&track, 0, 3).unwrap();
//!
//! assert_eq!(route.waypoints(), &[0, 1, 2, 3]);
//! assert!((route.length() - 3.0).abs() < 1e-10);
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;
use track_types::{Route, Track, TrackError, WaypointId};

/// Priority queue entry.
#[derive(Clone, Copy, Debug)]
struct State {
    cost: f64,
    node: WaypointId,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; lower id wins ties.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and predecessors from a single source.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    source: WaypointId,
    dist: Vec<f64>,
    pred: Vec<Option<WaypointId>>,
}

impl ShortestPathTree {
    /// The waypoint the search started from.
    #[must_use]
    pub const fn source(&self) -> WaypointId {
        self.source
    }

    /// Shortest distance to `id`, `None` if unreachable or out of range.
    #[must_use]
    pub fn distance(&self, id: WaypointId) -> Option<f64> {
        self.dist.get(id).copied().filter(|d| d.is_finite())
    }

    /// Predecessor of `id` on its shortest path; `None` for the source and
    /// for unreachable waypoints.
    #[must_use]
    pub fn predecessor(&self, id: WaypointId) -> Option<WaypointId> {
        self.pred.get(id).copied().flatten()
    }

    /// Returns `true` if `id` can be reached from the source.
    #[must_use]
    pub fn is_reachable(&self, id: WaypointId) -> bool {
        self.distance(id).is_some()
    }

    /// Number of reachable waypoints, the source included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_finite()).count()
    }

    /// Walks predecessors back from `target` and returns the source-first route.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidId`] for an out-of-range target and
    /// [`TrackError::Unreachable`] if no path leads to it.
    pub fn route_to(&self, target: WaypointId) -> Result<Route, TrackError> {
        if target >= self.dist.len() {
            return Err(TrackError::InvalidId {
                id: target,
                count: self.dist.len(),
            });
        }
        let length = self.distance(target).ok_or(TrackError::Unreachable {
            from: self.source,
            to: target,
        })?;

        let mut waypoints = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            waypoints.push(prev);
            current = prev;
        }
        waypoints.reverse();
        Ok(Route::new(waypoints, length))
    }
}

/// Adjacency lists keyed by waypoint id, neighbours in corridor order.
fn adjacency(track: &Track) -> Vec<Vec<(WaypointId, f64)>> {
    let mut edges = vec![Vec::new(); track.waypoint_count()];
    for corridor in track.corridors() {
        let length = track.corridor_length(corridor);
        edges[corridor.a].push((corridor.b, length));
        edges[corridor.b].push((corridor.a, length));
    }
    edges
}

/// Runs Dijkstra from `source` over the whole track.
///
/// # Errors
///
/// Returns [`TrackError::InvalidId`] if `source` is not a waypoint.
pub fn shortest_path_tree(track: &Track, source: WaypointId) -> Result<ShortestPathTree, TrackError> {
    track.check_id(source)?;

    let edges = adjacency(track);
    let n = edges.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<WaypointId>> = vec![None; n];
    let mut settled = vec![false; n];
    dist[source] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if settled[node] || cost > dist[node] {
            continue;
        }
        settled[node] = true;

        for &(neighbor, weight) in &edges[node] {
            let candidate = cost + weight;
            if candidate < dist[neighbor] {
                dist[neighbor] = candidate;
                pred[neighbor] = Some(node);
                heap.push(State {
                    cost: candidate,
                    node: neighbor,
                });
            }
        }
    }

    let tree = ShortestPathTree { source, dist, pred };
    debug!(
        source,
        reachable = tree.reachable_count(),
        waypoints = n,
        "Shortest path tree"
    );
    Ok(tree)
}

/// Shortest route between two waypoints.
///
/// # Errors
///
/// Returns [`TrackError::InvalidId`] if either id is out of range and
/// [`TrackError::Unreachable`] if the waypoints are in different components.
pub fn shortest_route(
    track: &Track,
    source: WaypointId,
    target: WaypointId,
) -> Result<Route, TrackError> {
    track.check_id(source)?;
    track.check_id(target)?;
    let route = shortest_path_tree(track, source)?.route_to(target)?;
    debug!(
        source,
        target,
        hops = route.len().saturating_sub(1),
        length = route.length(),
        "Found route"
    );
    Ok(route)
}
