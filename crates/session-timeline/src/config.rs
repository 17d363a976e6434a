//! Layout configuration supplied by the rendering layer.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// Rendering density for a timeline.
///
/// Deserializes from TOML or JSON; missing fields fall back to their defaults:
///
/// ```toml
/// pixels_per_hour = 80.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Vertical pixels for one hour of wall-clock time.
    pub pixels_per_hour: f64,
}

impl LayoutConfig {
    pub const DEFAULT_PIXELS_PER_HOUR: f64 = 80.0;

    pub fn with_pixels_per_hour(pixels_per_hour: f64) -> Self {
        Self { pixels_per_hour }
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// Returns `TimelineError::InvalidConfig` for malformed TOML, unknown keys,
    /// or a density that fails [`validate`](Self::validate).
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| TimelineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.pixels_per_hour.is_finite() || self.pixels_per_hour <= 0.0 {
            return Err(TimelineError::InvalidConfig(format!(
                "pixels_per_hour must be a positive number, got {}",
                self.pixels_per_hour
            )));
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pixels_per_hour: Self::DEFAULT_PIXELS_PER_HOUR,
        }
    }
}
