//! Runtime settings loaded from an optional JSON file
//!
//! The demo runs fine without one; defaults mirror the classic example
//! (32 balls of radius 32 bouncing in an 800x600 window).

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Demo settings, overridable via `settings.json` in the working directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    /// Logical display width in pixels
    pub window_width: u32,
    /// Logical display height in pixels
    pub window_height: u32,
    /// Number of balls spawned at setup
    pub ball_count: usize,
    /// Shared ball radius; should match the sprite's half-width
    pub ball_radius: f32,
    /// Sprite shared by every ball, read from the working directory
    pub sprite_path: String,
    /// Fixed seed for reproducible runs; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Bouncing Balls".to_owned(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            ball_count: DEFAULT_BALL_COUNT,
            ball_radius: BALL_RADIUS,
            sprite_path: "ball.png".to_owned(),
            seed: None,
        }
    }
}

impl Settings {
    const FILE: &'static str = "settings.json";

    /// Load settings from `settings.json`, falling back to defaults when
    /// the file is missing or malformed. The demo can always run on
    /// defaults, so a bad file is a warning rather than an error.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", Self::FILE);
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {err}", Self::FILE);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_constants() {
        let settings = Settings::default();
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.window_height, 600);
        assert_eq!(settings.ball_count, 32);
        assert_eq!(settings.ball_radius, 32.0);
        assert_eq!(settings.sprite_path, "ball.png");
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_document_fills_from_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "ball_count": 4, "seed": 1234 }"#).unwrap();
        assert_eq!(settings.ball_count, 4);
        assert_eq!(settings.seed, Some(1234));
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.sprite_path, "ball.png");
    }

    #[test]
    fn test_full_document_overrides_everything() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "window_title": "demo",
                "window_width": 1024,
                "window_height": 768,
                "ball_count": 100,
                "ball_radius": 16.0,
                "sprite_path": "sprites/dot.png",
                "seed": 7
            }"#,
        )
        .unwrap();
        assert_eq!(settings.window_title, "demo");
        assert_eq!(settings.window_width, 1024);
        assert_eq!(settings.window_height, 768);
        assert_eq!(settings.ball_count, 100);
        assert_eq!(settings.ball_radius, 16.0);
        assert_eq!(settings.sprite_path, "sprites/dot.png");
        assert_eq!(settings.seed, Some(7));
    }
}
