//! Planar geometry primitives for axis-aligned tracks.
//!
//! Tracks use a screen-style coordinate system:
//!
//! - X grows to the right
//! - Y grows **downward**
//!
//! so the `t` (top) token moves toward `-y` and `b` (bottom) toward `+y`.
//! Turn polarity in navigation output depends on this convention.

use std::fmt;

use nalgebra::{Point2, Vector2};

/// One of the four cardinal directions of travel.
///
/// # Example
///
/// ```
/// use track_types::Heading;
/// use nalgebra::Vector2;
///
/// let heading = Heading::from_token('t').unwrap();
/// assert_eq!(heading, Heading::Up);
/// assert_eq!(heading.unit(), Vector2::new(0.0, -1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heading {
    /// Toward `-y` (token `t`).
    Up,
    /// Toward `+y` (token `b`).
    Down,
    /// Toward `-x` (token `l`).
    Left,
    /// Toward `+x` (token `r`).
    Right,
}

impl Heading {
    /// All headings in token order `t`, `b`, `l`, `r`.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Maps a direction token to its heading.
    #[must_use]
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            't' => Some(Self::Up),
            'b' => Some(Self::Down),
            'l' => Some(Self::Left),
            'r' => Some(Self::Right),
            _ => None,
        }
    }

    /// Integer unit offsets `(dx, dy)`.
    #[must_use]
    pub const fn offsets(self) -> (i8, i8) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Unit vector pointing along this heading.
    #[must_use]
    pub fn unit(self) -> Vector2<f64> {
        let (dx, dy) = self.offsets();
        Vector2::new(f64::from(dx), f64::from(dy))
    }

    /// Returns `true` for [`Heading::Up`] and [`Heading::Down`].
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// The opposite heading.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Classifies a displacement as a cardinal heading.
    ///
    /// Returns `None` when the displacement is shorter than `tolerance` or
    /// has components along both axes.
    ///
    /// # Example
    ///
    /// ```
    /// use track_types::Heading;
    /// use nalgebra::Vector2;
    ///
    /// assert_eq!(Heading::from_displacement(&Vector2::new(0.0, 4.0), 1e-9), Some(Heading::Down));
    /// assert_eq!(Heading::from_displacement(&Vector2::new(1.0, 1.0), 1e-9), None);
    /// ```
    #[must_use]
    pub fn from_displacement(delta: &Vector2<f64>, tolerance: f64) -> Option<Self> {
        let horizontal = delta.x.abs() > tolerance;
        let vertical = delta.y.abs() > tolerance;
        match (horizontal, vertical) {
            (true, false) if delta.x > 0.0 => Some(Self::Right),
            (true, false) => Some(Self::Left),
            (false, true) if delta.y > 0.0 => Some(Self::Down),
            (false, true) => Some(Self::Up),
            _ => None,
        }
    }

    /// Returns the point reached by travelling `distance` from `origin`.
    #[must_use]
    pub fn advance(self, origin: &Point2<f64>, distance: f64) -> Point2<f64> {
        origin + self.unit() * distance
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Compares two scalars within an absolute tolerance.
#[must_use]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Compares two points component-wise within an absolute tolerance.
#[must_use]
pub fn points_coincide(a: &Point2<f64>, b: &Point2<f64>, tolerance: f64) -> bool {
    approx_eq(a.x, b.x, tolerance) && approx_eq(a.y, b.y, tolerance)
}

/// Axis-aligned bounding box of a set of waypoints.
///
/// # Example
///
/// ```
/// use track_types::Bounds;
/// use nalgebra::Point2;
///
/// let bounds = Bounds::from_points([Point2::new(0.0, 0.0), Point2::new(3.0, -2.0)]).unwrap();
/// assert_eq!(bounds.width(), 3.0);
/// assert_eq!(bounds.height(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Minimum corner.
    pub min: Point2<f64>,
    /// Maximum corner.
    pub max: Point2<f64>,
}

impl Bounds {
    /// Computes the bounds of the given points, `None` if there are none.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point2<f64>>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    /// Extent along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_token() {
        assert_eq!(Heading::from_token('t'), Some(Heading::Up));
        assert_eq!(Heading::from_token('b'), Some(Heading::Down));
        assert_eq!(Heading::from_token('l'), Some(Heading::Left));
        assert_eq!(Heading::from_token('r'), Some(Heading::Right));
        assert_eq!(Heading::from_token('x'), None);
    }

    #[test]
    fn test_screen_convention() {
        assert_eq!(Heading::Up.unit(), Vector2::new(0.0, -1.0));
        assert_eq!(Heading::Down.unit(), Vector2::new(0.0, 1.0));
        assert_eq!(Heading::Left.unit(), Vector2::new(-1.0, 0.0));
        assert_eq!(Heading::Right.unit(), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn test_reversed() {
        for heading in Heading::ALL {
            assert_eq!(heading.reversed().reversed(), heading);
            assert_eq!(heading.unit(), -heading.reversed().unit());
        }
    }

    #[test]
    fn test_from_displacement() {
        let tol = 1e-9;
        assert_eq!(
            Heading::from_displacement(&Vector2::new(-2.5, 0.0), tol),
            Some(Heading::Left)
        );
        assert_eq!(
            Heading::from_displacement(&Vector2::new(0.0, -0.5), tol),
            Some(Heading::Up)
        );
        assert_eq!(Heading::from_displacement(&Vector2::zeros(), tol), None);
        assert_eq!(
            Heading::from_displacement(&Vector2::new(3.0, 1e-12), tol),
            Some(Heading::Right)
        );
    }

    #[test]
    fn test_advance() {
        let p = Heading::Up.advance(&Point2::new(1.0, 1.0), 2.5);
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, -1.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Heading::Down.to_string(), "down");
        assert_eq!(Heading::Right.to_string(), "right");
    }

    #[test]
    fn test_bounds() {
        let bounds = Bounds::from_points([
            Point2::new(1.0, -1.0),
            Point2::new(-2.0, 4.0),
            Point2::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, Point2::new(-2.0, -1.0));
        assert_eq!(bounds.max, Point2::new(1.0, 4.0));
        assert_relative_eq!(bounds.width(), 3.0);
        assert_relative_eq!(bounds.height(), 5.0);
        assert!(Bounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_points_coincide() {
        let a = Point2::new(0.1 + 0.2, 1.0);
        let b = Point2::new(0.3, 1.0);
        assert!(points_coincide(&a, &b, 1e-9));
        assert!(!points_coincide(&a, &Point2::new(0.3, 1.1), 1e-9));
    }
}
