//! Parser for compact track descriptions.
//!
//! A track description is a string of moves and grouping tokens that draws a
//! network of axis-aligned corridors starting from the origin. This crate
//! turns it into a [`Track`] graph:
//!
//! - **Tokenizer** ([`token`]): splits the text into moves, groups and marks
//! - **Intersection** ([`intersect`]): ray probes against existing corridors
//! - **Builder** ([`builder::TrackBuilder`]): applies tokens, validating every
//!   move and splitting corridors where a move lands on them
//! - **Marker** ([`marker`]): flags dead ends as destinations
//!
//! # Quick Start
//!
//! ```
//! use track_parse::parse_track;
//!
//! // A T-junction: right 2, then up 1 and down 1 from the end.
//! let track = parse_track("r2(t1|b1)").unwrap();
//!
//! assert_eq!(track.waypoint_count(), 4);
//! assert_eq!(track.corridor_count(), 3);
//! // The origin and both tips are dead ends.
//! assert_eq!(track.destinations().count(), 3);
//! ```
//!
//! # Grammar
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `t<n>`, `b<n>`, `l<n>`, `r<n>` | move up, down, left or right by `n` |
//! | `t*`, `b*`, `l*`, `r*` | move until the nearest corridor |
//! | `(` `)` | open and close a group |
//! | `\|` | go back to the start of the current group |
//! | `_` | mark the waypoint under the cursor as a destination |
//! | `#` | comment until end of line |
//!
//! Y grows downward, so `t` decreases `y`.
//!
//! # Errors
//!
//! Parsing is all-or-nothing. Syntax errors carry the byte offset of the
//! offending token; geometry errors carry the position and heading of the
//! rejected move.
//!
//! ```
//! use track_parse::parse_track;
//!
//! assert!(parse_track("r1 x").unwrap_err().is_syntax());
//! assert!(parse_track("r*").unwrap_err().is_geometry());
//! ```

#![doc(html_root_url = "https://docs.rs/track-parse/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod builder;
pub mod intersect;
pub mod marker;
pub mod token;

use tracing::info;
use track_types::{ParseConfig, Track, TrackError};

// Re-export main types for convenience
pub use builder::{Cursor, TrackBuilder};
pub use intersect::{Hit, Probe, Ray, intersection_distance};
pub use marker::mark_destinations;
pub use token::{Amount, Token, TokenKind, tokenize};

/// Reusable parser holding a [`ParseConfig`].
///
/// # Example
///
/// ```
/// use track_parse::TrackParser;
/// use track_types::ParseConfig;
///
/// let parser = TrackParser::new(ParseConfig::default().with_max_depth(4));
/// let track = parser.parse("r1(t1)").unwrap();
/// assert_eq!(track.waypoint_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrackParser {
    config: ParseConfig,
}

impl TrackParser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parses a track description.
    ///
    /// # Errors
    ///
    /// - [`TrackError::InvalidConfig`] if the configuration is invalid
    /// - [`TrackError::Syntax`] for malformed or oversized input
    /// - a geometry error for a move that crosses, retraces or never meets
    ///   a corridor, or a mark with no waypoint under the cursor
    pub fn parse(&self, text: &str) -> Result<Track, TrackError> {
        self.config.ensure_valid()?;
        if text.len() > self.config.max_input_len() {
            return Err(TrackError::syntax(
                self.config.max_input_len(),
                format!(
                    "input is {} bytes, limit is {}",
                    text.len(),
                    self.config.max_input_len()
                ),
            ));
        }

        let tokens = tokenize(text)?;
        let mut track = TrackBuilder::new(&self.config).build(&tokens)?;
        mark_destinations(&mut track);

        info!(
            tokens = tokens.len(),
            waypoints = track.waypoint_count(),
            corridors = track.corridor_count(),
            destinations = track.destinations().count(),
            "Parsed track"
        );
        Ok(track)
    }
}

/// Parses a track description with default settings.
///
/// # Errors
///
/// See [`TrackParser::parse`].
pub fn parse_track(text: &str) -> Result<Track, TrackError> {
    TrackParser::default().parse(text)
}

/// Parses a track description with explicit settings.
///
/// # Errors
///
/// See [`TrackParser::parse`].
pub fn parse_track_with(text: &str, config: &ParseConfig) -> Result<Track, TrackError> {
    TrackParser::new(config.clone()).parse(text)
}
