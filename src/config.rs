//! Card configuration.
//!
//! Defaults live in the embedded `assets/card.json`. A file named by
//! `VALENTINE_CARD_CONFIG` replaces it at startup; any field it omits
//! keeps its default.

use std::path::PathBuf;

use bevy::prelude::Resource;
use serde::Deserialize;

use crate::evade::{DetectionGeometry, Footprint};

const CARD_JSON: &str = include_str!("../assets/card.json");

/// Environment variable naming an override config file
pub const CONFIG_ENV: &str = "VALENTINE_CARD_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse card config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{field} must be positive")]
    NonPositive { field: &'static str },
    #[error("tap_labels must not be empty")]
    EmptyTapLabels,
    #[error("petal symbols must not be empty")]
    EmptySymbols,
}

/// Whether to use continuous pointer tracking or discrete taps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerMode {
    /// Ask the platform
    #[default]
    Auto,
    Fine,
    Coarse,
}

#[derive(Debug, Clone, Resource, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub detection_radius: f32,
    pub jump_distance: f32,
    pub viewport_padding: f32,
    pub footprint: Footprint,
    pub tap_labels: Vec<String>,
    pub pointer_mode: PointerMode,
    pub text: CardText,
    pub petals: PetalConfig,
    pub celebration: CelebrationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CardText {
    pub recipient: String,
    pub question: String,
    pub tagline: String,
    pub accept_label: String,
    pub accepted_title: String,
    pub accepted_subtitle: String,
    pub replay_label: String,
    /// Glyph between the lines above the heart
    pub ornament: String,
    /// Small caps line under the buttons
    pub footer: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PetalConfig {
    pub count: usize,
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    pub duration_secs: f32,
    pub burst_delay_secs: f32,
    pub dust_motes: usize,
    pub rising_hearts: usize,
    /// The bobbing row under the subtitle
    pub symbols: Vec<String>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            detection_radius: 80.0,
            jump_distance: 200.0,
            viewport_padding: 20.0,
            footprint: Footprint::default(),
            tap_labels: ["No", "You dare?", "Reconsider", "Futile", "So be it..."]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            pointer_mode: PointerMode::Auto,
            text: CardText::default(),
            petals: PetalConfig::default(),
            celebration: CelebrationConfig::default(),
        }
    }
}

impl Default for CardText {
    fn default() -> Self {
        Self {
            recipient: "My Dear".to_string(),
            question: "will you be my Valentine".to_string(),
            tagline: "doubt is not an option here".to_string(),
            accept_label: "Yes".to_string(),
            accepted_title: "Yes, Forever".to_string(),
            accepted_subtitle: "a pact sealed in eternity".to_string(),
            replay_label: "Once More".to_string(),
            ornament: "*".to_string(),
            footer: "eternally bound".to_string(),
        }
    }
}

impl Default for PetalConfig {
    fn default() -> Self {
        Self {
            count: 18,
            symbols: ["+", "*", "x", "o", "^", "~"].iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            duration_secs: 4.0,
            burst_delay_secs: 0.5,
            dust_motes: 15,
            rising_hearts: 6,
            symbols: ["x", "+", "*", "+", "x"].iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CardConfig {
    /// Load the embedded config, or the override file if one is named
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => Self::from_json(CARD_JSON),
        }
    }

    pub fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("detection_radius", self.detection_radius),
            ("jump_distance", self.jump_distance),
            ("footprint.width", self.footprint.width),
            ("footprint.height", self.footprint.height),
            ("celebration.duration_secs", self.celebration.duration_secs),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field });
            }
        }
        if self.viewport_padding < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "viewport_padding",
            });
        }
        if self.tap_labels.is_empty() {
            return Err(ConfigError::EmptyTapLabels);
        }
        if self.petals.count > 0 && self.petals.symbols.is_empty() {
            return Err(ConfigError::EmptySymbols);
        }
        Ok(())
    }

    pub fn detection_geometry(&self) -> DetectionGeometry {
        DetectionGeometry {
            detection_radius: self.detection_radius,
            jump_distance: self.jump_distance,
            viewport_padding: self.viewport_padding,
            footprint: self.footprint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = CardConfig::from_json(CARD_JSON).unwrap();

        assert_eq!(config.detection_radius, 80.0);
        assert_eq!(config.jump_distance, 200.0);
        assert_eq!(config.viewport_padding, 20.0);
        assert_eq!(config.footprint, Footprint::default());
        assert_eq!(config.tap_labels.len(), 5);
        assert_eq!(config.tap_labels[1], "You dare?");
        assert_eq!(config.text.footer, "eternally bound");
        assert_eq!(config.celebration.dust_motes, 15);
        assert_eq!(config.celebration.rising_hearts, 6);
        assert_eq!(config.celebration.symbols.len(), 5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = CardConfig::from_json(r#"{ "jump_distance": 150.0 }"#).unwrap();

        assert_eq!(config.jump_distance, 150.0);
        assert_eq!(config.detection_radius, 80.0);
        assert_eq!(config.pointer_mode, PointerMode::Auto);
        assert_eq!(config.petals.count, 18);
        assert_eq!(config.celebration.duration_secs, 4.0);
    }

    #[test]
    fn test_pointer_mode_parses_lowercase() {
        let config = CardConfig::from_json(r#"{ "pointer_mode": "coarse" }"#).unwrap();
        assert_eq!(config.pointer_mode, PointerMode::Coarse);
    }

    #[test]
    fn test_detection_geometry_mirrors_config() {
        let config = CardConfig::default();
        let geometry = config.detection_geometry();

        assert_eq!(geometry, DetectionGeometry::default());
        assert_eq!(geometry.fallback_threshold(), 56.0);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(matches!(
            CardConfig::from_json(r#"{ "detection_radius": 0.0 }"#),
            Err(ConfigError::NonPositive { field: "detection_radius" })
        ));
        assert!(matches!(
            CardConfig::from_json(r#"{ "tap_labels": [] }"#),
            Err(ConfigError::EmptyTapLabels)
        ));
        assert!(matches!(
            CardConfig::from_json(r#"{ "petals": { "count": 3, "symbols": [] } }"#),
            Err(ConfigError::EmptySymbols)
        ));
        assert!(matches!(
            CardConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_override_file_is_io_error() {
        let result = CardConfig::from_file(PathBuf::from("/nonexistent/card.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
