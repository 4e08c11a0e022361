//! Tunable constants for the canvas engine.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings consumed by [`Canvas`](crate::Canvas).
///
/// Every field has a default, so a JSON document only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Multiplicative zoom factor applied per wheel notch.
    pub zoom_step: f64,
    /// Smallest allowed zoom level.
    pub min_zoom: f64,
    /// Largest allowed zoom level.
    pub max_zoom: f64,
    /// Display width given to freshly loaded images, in logical units.
    pub image_target_width: f64,
    /// Anchor used for loaded images when no pointer position is known.
    pub image_fallback_position: Point,
    /// Font size for new text elements.
    pub text_font_size: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            zoom_step: 1.1,
            min_zoom: 0.1,
            max_zoom: 10.0,
            image_target_width: 200.0,
            image_fallback_position: Point::new(50.0, 50.0),
            text_font_size: 20.0,
        }
    }
}

impl CanvasConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the zoom bounds keep the view transform invertible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.min_zoom) {
            return Err(ConfigError::Invalid(format!(
                "min_zoom must be positive, got {}",
                self.min_zoom
            )));
        }
        if !is_positive(self.max_zoom) || self.max_zoom < self.min_zoom {
            return Err(ConfigError::Invalid(format!(
                "max_zoom ({}) must be finite and >= min_zoom ({})",
                self.max_zoom, self.min_zoom
            )));
        }
        if !is_positive(self.zoom_step) || self.zoom_step <= 1.0 {
            return Err(ConfigError::Invalid(format!(
                "zoom_step must be greater than 1, got {}",
                self.zoom_step
            )));
        }
        if !is_positive(self.image_target_width) {
            return Err(ConfigError::Invalid(format!(
                "image_target_width must be positive, got {}",
                self.image_target_width
            )));
        }
        if !is_positive(self.text_font_size) {
            return Err(ConfigError::Invalid(format!(
                "text_font_size must be positive, got {}",
                self.text_font_size
            )));
        }
        Ok(())
    }
}

/// Finite and strictly greater than zero (rejects NaN).
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
