use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Maximum end-to-start gap for a wall chain to count as closed.
pub const CLOSURE_TOLERANCE: f64 = 0.01;

/// Shortest wall an edit may produce.
pub const MIN_WALL_LENGTH: f64 = 50.0;

/// Angles within this many degrees of a multiple of 90 snap to it.
pub const SNAP_THRESHOLD_DEG: f64 = 5.0;

/// A snapped successor wall is accepted only if it misses its target by less than this.
pub const SNAP_MAX_ERROR: f64 = 1.0;

/// Cross products below this are treated as parallel lines.
pub const PARALLEL_TOLERANCE: f64 = 1e-6;

/// Tolerances and thresholds used by the kernel.
///
/// All lengths are in the room's linear unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub closure_tolerance: f64,
    pub min_wall_length: f64,
    pub snap_threshold_deg: f64,
    pub snap_max_error: f64,
    pub parallel_tolerance: f64,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            closure_tolerance: CLOSURE_TOLERANCE,
            min_wall_length: MIN_WALL_LENGTH,
            snap_threshold_deg: SNAP_THRESHOLD_DEG,
            snap_max_error: SNAP_MAX_ERROR,
            parallel_tolerance: PARALLEL_TOLERANCE,
        }
    }
}

impl KernelConfig {
    /// Parses a config from TOML. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML, or
    /// `ConfigError::NonPositive` if any tolerance is zero or negative.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every tolerance is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NonPositive` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("closure_tolerance", self.closure_tolerance),
            ("min_wall_length", self.min_wall_length),
            ("snap_threshold_deg", self.snap_threshold_deg),
            ("snap_max_error", self.snap_max_error),
            ("parallel_tolerance", self.parallel_tolerance),
        ];
        for (field, value) in fields {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value }.into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RoomError;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = KernelConfig::from_toml_str("").unwrap();
        assert_eq!(config, KernelConfig::default());
    }

    #[test]
    fn partial_toml_overrides_one_field() {
        let config = KernelConfig::from_toml_str("min_wall_length = 25.0").unwrap();
        assert!((config.min_wall_length - 25.0).abs() < 1e-12);
        assert!((config.closure_tolerance - CLOSURE_TOLERANCE).abs() < 1e-12);
    }

    #[test]
    fn negative_value_rejected() {
        let err = KernelConfig::from_toml_str("snap_max_error = -1.0").unwrap_err();
        assert!(matches!(
            err,
            RoomError::Config(ConfigError::NonPositive {
                field: "snap_max_error",
                ..
            })
        ));
    }

    #[test]
    fn malformed_toml_rejected() {
        let err = KernelConfig::from_toml_str("min_wall_length = \"long\"").unwrap_err();
        assert!(matches!(err, RoomError::Config(ConfigError::Parse(_))));
    }
}
