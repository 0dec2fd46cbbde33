//! Core types for track navigation: waypoints, corridors, routes and turns.
//!
//! This crate provides the foundational types shared by the parser
//! (`track-parse`) and the navigator (`track-navigate`):
//!
//! - **Track graph**: [`Track`], [`Waypoint`], [`Corridor`]
//! - **Geometry**: [`Heading`], [`Bounds`] and tolerant comparisons
//! - **Navigation output**: [`Route`], [`NavigationStep`], [`Turn`]
//! - **Configuration**: [`ParseConfig`], [`NavigateConfig`]
//! - **Errors**: [`TrackError`]
//!
//! # Coordinate Systems
//!
//! Coordinates are screen-style: X grows to the right and Y grows downward.
//! Heading `+x` then turning toward `-y` is a **left** turn.
//!
//! # Example
//!
//! ```
//! use track_types::{Track, Heading};
//! use nalgebra::Point2;
//!
//! let mut track = Track::new();
//! let origin = track.add_waypoint(Point2::origin());
//! let tip = track.add_waypoint(Heading::Right.advance(&Point2::origin(), 1.0));
//! track.add_corridor(origin, tip).unwrap();
//!
//! assert_eq!(track.degree(origin), 1);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization for all types and deserialization for
//!   everything except [`Track`]

#![doc(html_root_url = "https://docs.rs/track-types/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod navigation;
pub mod track;

// Re-export main types at crate root for convenience
pub use config::{DEFAULT_TOLERANCE, NavigateConfig, ParseConfig};
pub use error::TrackError;
pub use geometry::{Bounds, Heading, approx_eq, points_coincide};
pub use navigation::{NavigationStep, Route, Turn};
pub use track::{Corridor, Track, Waypoint, WaypointId};
