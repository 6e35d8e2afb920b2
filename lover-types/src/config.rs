//! Page configuration.
//!
//! Every field has a default, so a host page may override any subset by
//! embedding JSON, e.g. `{"hero_text": "Hi", "fade_delay_ms": 250}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gallery::DEFAULT_FADE_DELAY_MS;
use crate::geometry::DEFAULT_MARGIN_PX;
use crate::popup::DEFAULT_FOCUS_DELAY_MS;
use crate::typewriter::{DEFAULT_HERO_TEXT, DEFAULT_TYPING_STEP_MS};

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.12;
pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 720;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("drag_margin must be a finite non-negative number, got {0}")]
    InvalidMargin(f64),
    #[error("reveal_threshold must be within 0..=1, got {0}")]
    InvalidThreshold(f64),
    #[error("at least one thumbnail is required")]
    NoThumbnails,
    #[error("thumbnail {0} has an empty source")]
    EmptyThumbnail(usize),
    #[error("initial_image must not be empty")]
    EmptyInitialImage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub hero_text: String,
    pub typing_step_ms: u32,
    pub focus_delay_ms: u32,
    pub fade_delay_ms: u32,
    pub drag_margin: f64,
    pub reveal_threshold: f64,
    pub mobile_breakpoint: u32,
    /// Image shown in the popup and the hero before any selection.
    /// Falls back to the first thumbnail when unset.
    pub initial_image: Option<String>,
    pub thumbnails: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            hero_text: DEFAULT_HERO_TEXT.to_string(),
            typing_step_ms: DEFAULT_TYPING_STEP_MS,
            focus_delay_ms: DEFAULT_FOCUS_DELAY_MS,
            fade_delay_ms: DEFAULT_FADE_DELAY_MS,
            drag_margin: DEFAULT_MARGIN_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT_PX,
            initial_image: None,
            thumbnails: vec![
                "images/ovi-1.jpg".to_string(),
                "images/ovi-2.jpg".to_string(),
                "images/ovi-3.jpg".to_string(),
                "images/ovi-4.jpg".to_string(),
            ],
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.drag_margin.is_finite() || self.drag_margin < 0.0 {
            return Err(ConfigError::InvalidMargin(self.drag_margin));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::InvalidThreshold(self.reveal_threshold));
        }
        if self.thumbnails.is_empty() {
            return Err(ConfigError::NoThumbnails);
        }
        if let Some(index) = self.thumbnails.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::EmptyThumbnail(index));
        }
        if self
            .initial_image
            .as_deref()
            .is_some_and(|source| source.trim().is_empty())
        {
            return Err(ConfigError::EmptyInitialImage);
        }
        Ok(())
    }

    pub fn initial_image(&self) -> &str {
        self.initial_image
            .as_deref()
            .or_else(|| self.thumbnails.first().map(String::as_str))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_valid() {
        let config = PageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_image(), "images/ovi-1.jpg");
        assert_eq!(config.drag_margin, 8.0);
        assert_eq!(config.focus_delay_ms, 300);
        assert_eq!(config.fade_delay_ms, 180);
        assert_eq!(config.typing_step_ms, 90);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let raw = json!({
            "hero_text": "Hello",
            "thumbnails": ["a.jpg", "b.jpg"],
            "initial_image": "b.jpg"
        })
        .to_string();
        let config = PageConfig::from_json(&raw).expect("valid config");
        assert_eq!(config.hero_text, "Hello");
        assert_eq!(config.initial_image(), "b.jpg");
        assert_eq!(config.fade_delay_ms, DEFAULT_FADE_DELAY_MS);
    }

    #[test]
    fn rejects_bad_values() {
        let err = PageConfig::from_json(&json!({ "drag_margin": -1.0 }).to_string())
            .expect_err("negative margin");
        assert!(matches!(err, ConfigError::InvalidMargin(_)));

        let err = PageConfig::from_json(&json!({ "reveal_threshold": 2.0 }).to_string())
            .expect_err("threshold above one");
        assert!(matches!(err, ConfigError::InvalidThreshold(_)));

        let err = PageConfig::from_json(&json!({ "thumbnails": [] }).to_string())
            .expect_err("no thumbnails");
        assert!(matches!(err, ConfigError::NoThumbnails));

        let err = PageConfig::from_json(&json!({ "thumbnails": ["a.jpg", " "] }).to_string())
            .expect_err("blank source");
        assert!(matches!(err, ConfigError::EmptyThumbnail(1)));
    }

    #[test]
    fn blank_initial_image_is_rejected() {
        let err = PageConfig::from_json(&json!({ "initial_image": "" }).to_string())
            .expect_err("empty initial image");
        assert!(matches!(err, ConfigError::EmptyInitialImage));

        let err = PageConfig::from_json(&json!({ "initial_image": "  " }).to_string())
            .expect_err("whitespace initial image");
        assert!(matches!(err, ConfigError::EmptyInitialImage));

        // Null means unset and falls back to the first thumbnail.
        let config = PageConfig::from_json(&json!({ "initial_image": null }).to_string())
            .expect("null is unset");
        assert_eq!(config.initial_image(), "images/ovi-1.jpg");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PageConfig::from_json("{ not json").expect_err("must fail");
        assert!(err.to_string().starts_with("invalid page config JSON"));
    }
}
