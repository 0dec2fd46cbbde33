//! Graph builder driven by a token stream.
//!
//! The builder keeps a [`Cursor`] (current position plus a stack of anchor
//! positions) and applies tokens one at a time. Every move is validated
//! against the corridors built so far through [`Ray::nearest_hit`]:
//!
//! - a bounded move that would pass through a corridor is rejected
//! - a move that ends exactly on a corridor splits that corridor
//! - a wildcard move travels to the nearest corridor, or fails if there is none

use nalgebra::Point2;
use tracing::{debug, trace};
use track_types::{Heading, ParseConfig, Track, TrackError, WaypointId};

use crate::intersect::{Ray, segment_interior_contains, snap_to_segment};
use crate::token::{Amount, Token, TokenKind};

/// Parse-time cursor: current position and the anchors of open groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    position: Point2<f64>,
    anchors: Vec<Point2<f64>>,
}

impl Cursor {
    /// A cursor at the origin with no open groups.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Point2::origin(),
            anchors: Vec::new(),
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> &Point2<f64> {
        &self.position
    }

    /// Number of open groups.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.anchors.len()
    }

    /// The innermost anchor, or the origin at top level.
    #[must_use]
    pub fn anchor(&self) -> Point2<f64> {
        self.anchors.last().copied().unwrap_or_else(Point2::origin)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a [`Track`] from tokens.
///
/// # Example
///
/// ```
/// use track_parse::builder::TrackBuilder;
/// use track_parse::token::tokenize;
/// use track_types::ParseConfig;
///
/// let tokens = tokenize("r1(t1|b1)").unwrap();
/// let track = TrackBuilder::new(&ParseConfig::default()).build(&tokens).unwrap();
/// assert_eq!(track.waypoint_count(), 4);
/// assert_eq!(track.corridor_count(), 3);
/// ```
#[derive(Debug)]
pub struct TrackBuilder<'a> {
    config: &'a ParseConfig,
    track: Track,
    cursor: Cursor,
}

impl<'a> TrackBuilder<'a> {
    /// Creates a builder holding a single waypoint at the origin.
    #[must_use]
    pub fn new(config: &'a ParseConfig) -> Self {
        let mut track = Track::new();
        track.add_waypoint(Point2::origin());
        Self {
            config,
            track,
            cursor: Cursor::new(),
        }
    }

    /// Current cursor.
    #[must_use]
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Track built so far.
    #[must_use]
    pub const fn track(&self) -> &Track {
        &self.track
    }

    /// Applies every token and returns the finished track.
    ///
    /// Groups still open at the end of input are closed implicitly.
    ///
    /// # Errors
    ///
    /// Returns the first syntax or geometry error; the partial track is
    /// dropped.
    pub fn build(mut self, tokens: &[Token]) -> Result<Track, TrackError> {
        for token in tokens {
            self.apply(token)?;
        }
        if self.cursor.depth() > 0 {
            debug!(open = self.cursor.depth(), "Closing groups left open at end of input");
        }
        Ok(self.track)
    }

    /// Applies one token.
    ///
    /// # Errors
    ///
    /// See [`TrackBuilder::build`].
    pub fn apply(&mut self, token: &Token) -> Result<(), TrackError> {
        match token.kind {
            TokenKind::Move {
                amount: Amount::Literal(distance),
                ..
            } if distance <= self.config.tolerance() => {
                Err(TrackError::syntax(token.offset, "distance must be positive"))
            }
            TokenKind::Move { heading, amount } => self.travel(heading, amount),
            TokenKind::Open => {
                if self.cursor.depth() >= self.config.max_depth() {
                    return Err(TrackError::syntax(
                        token.offset,
                        format!("groups nested deeper than {}", self.config.max_depth()),
                    ));
                }
                self.cursor.anchors.push(self.cursor.position);
                Ok(())
            }
            TokenKind::Close => {
                let anchor = self
                    .cursor
                    .anchors
                    .pop()
                    .ok_or_else(|| TrackError::syntax(token.offset, "unmatched ')'"))?;
                self.cursor.position = anchor;
                Ok(())
            }
            TokenKind::Branch => {
                self.cursor.position = self.cursor.anchor();
                Ok(())
            }
            TokenKind::Mark => {
                let id = self.waypoint_under_cursor()?;
                self.track.mark_destination(id)
            }
        }
    }

    fn waypoint_under_cursor(&self) -> Result<WaypointId, TrackError> {
        self.track
            .waypoint_at(&self.cursor.position, self.config.tolerance())
            .ok_or(TrackError::NoWaypoint(self.cursor.position))
    }

    /// Moves the cursor and adds the travelled corridor.
    fn travel(&mut self, heading: Heading, amount: Amount) -> Result<(), TrackError> {
        let tolerance = self.config.tolerance();
        let from = self.cursor.position;
        let start = self.waypoint_under_cursor()?;
        let nearest = Ray::new(from, heading).nearest_hit(&self.track, tolerance)?;

        let distance = match amount {
            Amount::Literal(distance) => {
                if let Some(hit) = nearest {
                    if hit.distance < distance - tolerance {
                        return Err(TrackError::CrossesCorridor {
                            from,
                            heading,
                            distance,
                            hit: hit.distance,
                        });
                    }
                }
                distance
            }
            Amount::Wildcard => {
                nearest
                    .ok_or(TrackError::Unbounded { from, heading })?
                    .distance
            }
        };

        let end = self.resolve(heading.advance(&from, distance))?;
        self.track.add_corridor(start, end)?;
        if let Some(position) = self.track.position(end) {
            self.cursor.position = *position;
        }

        trace!(%heading, distance, start, end, "Travelled");
        Ok(())
    }

    /// Finds or creates the waypoint at `target`, splitting the corridor it
    /// lands on if needed.
    fn resolve(&mut self, target: Point2<f64>) -> Result<WaypointId, TrackError> {
        let tolerance = self.config.tolerance();
        if let Some(id) = self.track.waypoint_at(&target, tolerance) {
            return Ok(id);
        }

        let crossed = self.track.corridors().iter().position(|c| {
            segment_interior_contains(self.track.segment(c), &target, tolerance)
        });

        match crossed {
            Some(index) => {
                let segment = self.track.segment(&self.track.corridors()[index]);
                let id = self
                    .track
                    .add_waypoint(snap_to_segment(segment, &target, tolerance));
                self.track.split_corridor(index, id)?;
                debug!(corridor = index, waypoint = id, "Split corridor");
                Ok(id)
            }
            None => Ok(self.track.add_waypoint(target)),
        }
    }
}
