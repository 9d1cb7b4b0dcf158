//! Control-loop configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Metric;

/// Dead-zone band around zero error.
///
/// Errors inside `[lower, upper]` are treated as "close enough to the set
/// point" and drive no corrective force, preventing oscillation from noise
/// near the set point. Expects `lower <= 0 <= upper`; the default is the
/// degenerate band that suppresses nothing but an exact-zero error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RopeBand {
    pub lower: f64,
    pub upper: f64,
}

impl RopeBand {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Whether `error` falls inside the dead zone.
    pub fn contains(&self, error: f64) -> bool {
        self.lower <= error && error <= self.upper
    }
}

/// Immutable parameter bundle for one control loop.
///
/// Built once per loop and shared read-only for the loop's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopConfig {
    /// The metric this loop tracks; everything else is filtered out.
    pub metric: Metric,
    /// Target value for the tracked metric.
    pub set_point: f64,
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain.
    pub ki: f64,
    /// Derivative gain.
    pub kd: f64,
    /// Inclusive lower actuation bound.
    pub min_size: u32,
    /// Inclusive upper actuation bound.
    pub max_size: u32,
    /// Dead zone around zero error.
    pub rope: RopeBand,
    /// Minimum time between successive real actuations.
    pub cooldown: Duration,
}

impl LoopConfig {
    /// Check the bounds and rope invariants.
    ///
    /// Called by `ControlLoop::new`; a failing configuration never becomes
    /// a running loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size > self.max_size {
            return Err(ConfigError::Bounds {
                min: self.min_size,
                max: self.max_size,
            });
        }
        // Also rejects NaN bounds.
        if !(self.rope.lower <= 0.0 && 0.0 <= self.rope.upper) {
            return Err(ConfigError::Rope {
                lower: self.rope.lower,
                upper: self.rope.upper,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> LoopConfig {
        LoopConfig {
            metric: Metric::Cpu,
            set_point: 0.6,
            kp: 0.01,
            ki: 0.01,
            kd: 0.01,
            min_size: 3,
            max_size: 10,
            rope: RopeBand::new(-0.25, 0.0),
            cooldown: Duration::from_millis(10),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert_eq!(base_config().validate(), Ok(()));
    }

    #[test]
    fn min_above_max_rejected() {
        let mut config = base_config();
        config.min_size = 11;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Bounds { min: 11, max: 10 })
        );
    }

    #[test]
    fn equal_bounds_allowed() {
        let mut config = base_config();
        config.min_size = 5;
        config.max_size = 5;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rope_must_straddle_zero() {
        let mut config = base_config();
        config.rope = RopeBand::new(0.1, 0.3);
        assert!(matches!(config.validate(), Err(ConfigError::Rope { .. })));

        config.rope = RopeBand::new(-0.3, -0.1);
        assert!(matches!(config.validate(), Err(ConfigError::Rope { .. })));

        config.rope = RopeBand::new(f64::NAN, 0.0);
        assert!(matches!(config.validate(), Err(ConfigError::Rope { .. })));
    }

    #[test]
    fn rope_contains_is_inclusive() {
        let rope = RopeBand::new(-0.25, 0.0);
        assert!(rope.contains(-0.25));
        assert!(rope.contains(-0.1));
        assert!(rope.contains(0.0));
        assert!(!rope.contains(-0.26));
        assert!(!rope.contains(0.01));
    }

    #[test]
    fn default_rope_only_absorbs_exact_zero() {
        let rope = RopeBand::default();
        assert!(rope.contains(0.0));
        assert!(!rope.contains(1e-9));
        assert!(!rope.contains(-1e-9));
    }
}
