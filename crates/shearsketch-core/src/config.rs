//! Tuning constants for the interaction engine.

use crate::affine::DEGENERATE_EPSILON;
use crate::bounds::DEFAULT_SAMPLE_STEPS;
use crate::shapes::MIN_RADIUS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Constants that govern creation, hit-testing and drag response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Radius floor applied once a shape is finalized.
    pub min_radius: f64,
    /// Radius used when a shape is finalized without any pointer motion.
    pub default_radius: f64,
    /// Distance within which a pointer grabs a handle.
    pub handle_hit_radius: f64,
    /// Polygon segments used to sample the bounding box.
    pub sample_steps: usize,
    /// Shear change per pixel of pointer motion on an edge handle.
    pub shear_sensitivity: f64,
    /// Radians of rotation per pixel of horizontal pointer motion.
    pub rotation_speed: f64,
    /// Shear determinant magnitude below which inversion is refused.
    pub degenerate_epsilon: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            min_radius: MIN_RADIUS,
            default_radius: 10.0,
            handle_hit_radius: 6.0,
            sample_steps: DEFAULT_SAMPLE_STEPS,
            shear_sensitivity: 0.01,
            rotation_speed: 0.01,
            degenerate_epsilon: DEGENERATE_EPSILON,
        }
    }
}

impl InteractionConfig {
    /// Parse a (possibly partial) JSON document; missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the engine's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("min_radius", self.min_radius),
            ("default_radius", self.default_radius),
            ("handle_hit_radius", self.handle_hit_radius),
            ("degenerate_epsilon", self.degenerate_epsilon),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a positive number, got {value}"),
                });
            }
        }
        if self.sample_steps < 4 {
            return Err(ConfigError::Invalid {
                field: "sample_steps",
                reason: format!("need at least 4 segments, got {}", self.sample_steps),
            });
        }
        for (field, value) in [
            ("shear_sensitivity", self.shear_sensitivity),
            ("rotation_speed", self.rotation_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a finite number, got {value}"),
                });
            }
        }
        Ok(())
    }
}
