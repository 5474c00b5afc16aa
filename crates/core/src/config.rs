//! Scene configuration: chip labels, year override, starfield tuning.
//!
//! Everything defaults, so `{}` is a valid document and produces the
//! stock page. Renderers parse a config with [`SceneConfig::from_json`]
//! and hand it to [`crate::model::Scene::new`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::skills::DEFAULT_SKILLS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("starfield needs at least one layer")]
    NoLayers,
    #[error("opacity band is inverted: {min} > {max}")]
    OpacityBand { min: f64, max: f64 },
    #[error("radius range is inverted: {min} > {max}")]
    RadiusRange { min: f64, max: f64 },
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(f64),
    #[error("twinkle amplitude must be non-negative, got {0}")]
    NegativeTwinkle(f64),
    #[error("drift scale must be non-negative, got {0}")]
    NegativeDrift(f64),
}

/// Tuning knobs for the particle field.
///
/// The defaults reproduce the page's look: ~270 stars across three depth
/// layers, sub-2px radii, a gentle twinkle, slow parallax drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Particles seeded per depth layer.
    pub stars_per_layer: usize,
    /// Number of depth layers. Higher layers get larger, faster stars.
    pub layers: u8,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Opacity clamp band. The per-frame jitter never escapes it.
    pub opacity_min: f64,
    pub opacity_max: f64,
    /// Peak-to-peak opacity jitter per frame.
    pub twinkle: f64,
    /// Base leftward speed in pixels per frame, multiplied per layer.
    /// Zero freezes the field in place.
    pub drift_scale: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            stars_per_layer: 90,
            layers: 3,
            radius_min: 0.3,
            radius_max: 1.9,
            opacity_min: 0.15,
            opacity_max: 1.0,
            twinkle: 0.03,
            drift_scale: 0.08,
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layers == 0 {
            return Err(ConfigError::NoLayers);
        }
        if self.radius_min < 0.0 {
            return Err(ConfigError::NegativeRadius(self.radius_min));
        }
        if self.radius_min > self.radius_max {
            return Err(ConfigError::RadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        if self.opacity_min > self.opacity_max {
            return Err(ConfigError::OpacityBand {
                min: self.opacity_min,
                max: self.opacity_max,
            });
        }
        if self.twinkle < 0.0 {
            return Err(ConfigError::NegativeTwinkle(self.twinkle));
        }
        if self.drift_scale < 0.0 {
            return Err(ConfigError::NegativeDrift(self.drift_scale));
        }
        Ok(())
    }
}

/// Top-level scene configuration, deserialized from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Chip labels in display order. An explicit empty list disables
    /// chips; an omitted field gets the stock list.
    pub skills: Vec<String>,
    /// Pin the footer year instead of reading the clock.
    pub year: Option<i32>,
    pub starfield: StarfieldConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            skills: DEFAULT_SKILLS.iter().map(ToString::to_string).collect(),
            year: None,
            starfield: StarfieldConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.starfield.validate()
    }
}
