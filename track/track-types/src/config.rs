//! Configuration for parsing and navigation.
//!
//! # Example
//!
//! ```
//! use track_types::{NavigateConfig, ParseConfig};
//!
//! let parse = ParseConfig::default()
//!     .with_tolerance(1e-6)
//!     .with_max_depth(32);
//! assert!(parse.validate().is_empty());
//!
//! let navigate = NavigateConfig::default().with_back(false);
//! assert!(!navigate.include_back());
//! ```

use crate::error::TrackError;

/// Default absolute tolerance for coordinate comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Settings for the track parser.
///
/// Defaults:
/// - Tolerance: `1e-9` (exact for integer-valued inputs)
/// - Max depth: 256 nested `(`
/// - Max input length: 64 KiB
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseConfig {
    /// Absolute tolerance when comparing coordinates and distances.
    tolerance: f64,
    /// Maximum nesting depth of `(` groups.
    max_depth: usize,
    /// Maximum accepted input length in bytes.
    max_input_len: usize,
}

impl ParseConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_depth: 256,
            max_input_len: 64 * 1024,
        }
    }

    /// Sets the comparison tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum `(` nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the maximum input length in bytes.
    #[must_use]
    pub const fn with_max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = len;
        self
    }

    /// Returns the comparison tolerance.
    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum nesting depth.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the maximum input length.
    #[must_use]
    pub const fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    /// Validates the configuration and returns any issues.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            issues.push(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            ));
        }
        if self.max_input_len == 0 {
            issues.push("max_input_len must be positive".to_string());
        }
        issues
    }

    /// Like [`ParseConfig::validate`], but as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidConfig`] joining all issues.
    pub fn ensure_valid(&self) -> Result<(), TrackError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(TrackError::invalid_config(issues.join("; ")))
        }
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings for route search and turn synthesis.
///
/// Defaults:
/// - Tolerance: `1e-9`
/// - Include back: `true` (the arrival corridor is listed as [`Turn::Back`])
///
/// [`Turn::Back`]: crate::Turn::Back
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigateConfig {
    /// Absolute tolerance when classifying corridor directions.
    tolerance: f64,
    /// Whether step options list the corridor just arrived on.
    include_back: bool,
}

impl NavigateConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            include_back: true,
        }
    }

    /// Sets the direction classification tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets whether the arrival corridor appears in step options.
    #[must_use]
    pub const fn with_back(mut self, include: bool) -> Self {
        self.include_back = include;
        self
    }

    /// Returns the classification tolerance.
    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns whether the arrival corridor appears in step options.
    #[must_use]
    pub const fn include_back(&self) -> bool {
        self.include_back
    }

    /// Validates the configuration and returns any issues.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            issues.push(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            ));
        }
        issues
    }

    /// Like [`NavigateConfig::validate`], but as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidConfig`] joining all issues.
    pub fn ensure_valid(&self) -> Result<(), TrackError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(TrackError::invalid_config(issues.join("; ")))
        }
    }
}

impl Default for NavigateConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = ParseConfig::default();
        assert_eq!(config.tolerance(), DEFAULT_TOLERANCE);
        assert_eq!(config.max_depth(), 256);
        assert_eq!(config.max_input_len(), 65536);
        assert!(config.validate().is_empty());
        assert!(config.ensure_valid().is_ok());
    }

    #[test]
    fn test_parse_invalid_tolerance() {
        let config = ParseConfig::default().with_tolerance(-1.0);
        assert_eq!(config.validate().len(), 1);

        let config = ParseConfig::default()
            .with_tolerance(f64::NAN)
            .with_max_input_len(0);
        assert_eq!(config.validate().len(), 2);
        assert!(matches!(
            config.ensure_valid(),
            Err(TrackError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_navigate_builder() {
        let config = NavigateConfig::new().with_back(false).with_tolerance(0.5);
        assert!(!config.include_back());
        assert_eq!(config.tolerance(), 0.5);
        assert!(config.validate().is_empty());
        let bad = NavigateConfig::new().with_tolerance(f64::INFINITY);
        assert!(!bad.validate().is_empty());
        assert!(bad.ensure_valid().is_err());
    }
}
