use crate::{vector::Vector, Result, VectorError};
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EPSILON: f64 = 1e-9;

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

/// Tolerance used for approximate vector comparison.
///
/// Can be deserialized from JSON such as `{"epsilon": 1e-6}`; a missing
/// `epsilon` falls back to [`DEFAULT_EPSILON`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceConfig {
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl ToleranceConfig {
    pub fn new(epsilon: f64) -> Result<Self> {
        let config = Self { epsilon };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: ToleranceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Epsilon must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            debug!("tolerance rejected: epsilon = {}", self.epsilon);
            return Err(VectorError::InvalidTolerance(self.epsilon));
        }
        Ok(())
    }

    pub fn approx_eq(&self, a: &Vector, b: &Vector) -> bool {
        a.equal(b, self.epsilon)
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}
