//! Persistent game settings
//!
//! Loads the arena geometry, match tunables and file locations from
//! `config/game_settings.json`. Missing or unreadable files fall back to the
//! built-in defaults, which reproduce the classic 792x534 table.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::DEFAULT_FONT_FILE;

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/game_settings.json";

/// Default location of the match results log
pub const RESULTS_FILE: &str = "game_results.txt";

/// Immutable description of the table and the match rules.
///
/// Built once at startup and shared by reference with the simulator, the
/// renderer and the UI, so every component agrees on the same geometry.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Table width in screen units (also the window width)
    pub screen_width: f32,
    /// Table height in screen units (also the window height)
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle travel speed (units/sec)
    pub paddle_speed: f32,
    /// Initial speed on each ball axis (units/sec)
    pub ball_speed: f32,
    pub ball_radius: f32,
    /// Left edge of the opponent paddle, measured from the left wall
    pub opponent_paddle_x: f32,
    /// Left edge of the player paddle, measured back from the right wall
    pub player_paddle_inset: f32,
    /// Lives each side starts with
    pub max_lives: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            screen_width: 792.0,
            screen_height: 534.0,
            paddle_width: 20.0,
            paddle_height: 120.0,
            paddle_speed: 400.0,
            ball_speed: 350.0,
            ball_radius: 10.0,
            opponent_paddle_x: 50.0,
            player_paddle_inset: 70.0,
            max_lives: 5,
        }
    }
}

impl MatchConfig {
    /// Center of the table in screen coordinates
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Lowest top-edge y a paddle can reach without leaving the table
    pub fn paddle_max_y(&self) -> f32 {
        (self.screen_height - self.paddle_height).max(0.0)
    }

    /// Left edge of the player's (right-hand) paddle
    pub fn player_paddle_x(&self) -> f32 {
        self.screen_width - self.player_paddle_inset
    }

    /// Replace values that would break a match with their defaults.
    ///
    /// Sizes, ball speed and radius must be positive and finite, paddle speed
    /// non-negative, the paddle no taller than the table and each side needs at
    /// least one life.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut config = self;

        config.screen_width = checked(
            "screen_width",
            config.screen_width,
            defaults.screen_width,
            positive,
        );
        config.screen_height = checked(
            "screen_height",
            config.screen_height,
            defaults.screen_height,
            positive,
        );
        config.paddle_width = checked(
            "paddle_width",
            config.paddle_width,
            defaults.paddle_width,
            positive,
        );

        let screen_height = config.screen_height;
        config.paddle_height = checked(
            "paddle_height",
            config.paddle_height,
            defaults.paddle_height.min(screen_height),
            |h| positive(h) && h <= screen_height,
        );

        config.paddle_speed = checked(
            "paddle_speed",
            config.paddle_speed,
            defaults.paddle_speed,
            |v| v.is_finite() && v >= 0.0,
        );
        config.ball_speed = checked("ball_speed", config.ball_speed, defaults.ball_speed, positive);
        config.ball_radius = checked(
            "ball_radius",
            config.ball_radius,
            defaults.ball_radius,
            positive,
        );

        if config.max_lives == 0 {
            warn!("Invalid max_lives 0 in settings, using {}", defaults.max_lives);
            config.max_lives = defaults.max_lives;
        }

        config
    }

    /// Convert a screen-space point (origin top-left, y down) to Bevy world
    /// space (origin at window center, y up).
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x - self.screen_width / 2.0,
            self.screen_height / 2.0 - screen.y,
        )
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// `value` if it passes `valid`, otherwise `default` with a warning
fn checked(name: &str, value: f32, default: f32, valid: impl Fn(f32) -> bool) -> f32 {
    if valid(value) {
        value
    } else {
        warn!("Invalid {} {} in settings, using {}", name, value, default);
        default
    }
}

/// Everything read from the settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Table geometry and match rules
    pub match_config: MatchConfig,
    /// Simulation rate (steps per second)
    pub target_fps: f64,
    /// Text file that receives one line per finished match
    pub results_file: String,
    /// Font path relative to the assets directory (optional on disk)
    pub font_file: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            match_config: MatchConfig::default(),
            target_fps: 60.0,
            results_file: RESULTS_FILE.to_string(),
            font_file: DEFAULT_FONT_FILE.to_string(),
        }
    }
}

impl GameSettings {
    /// Load settings from the default file, or return defaults if it doesn't exist
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No {} found, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Self>(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {}", path.display());
                    settings.sanitized()
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Settings with every match value made playable
    pub fn sanitized(self) -> Self {
        Self {
            match_config: self.match_config.sanitized(),
            ..self
        }
    }

    /// Write the default file on first run. An existing file is left alone,
    /// even one that failed to parse.
    pub fn save_if_missing(&self) -> Result<bool, std::io::Error> {
        self.save_if_missing_to(Path::new(SETTINGS_FILE))
    }

    /// Write `path` only if nothing is there yet. Returns true if written.
    pub fn save_if_missing_to(&self, path: &Path) -> Result<bool, std::io::Error> {
        if path.exists() {
            return Ok(false);
        }
        self.save_to(path)?;
        Ok(true)
    }

    /// Save settings to `path`, creating its parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, json)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Simulation rate guarded against zero or negative values in the file
    pub fn step_hz(&self) -> f64 {
        if self.target_fps > 0.0 { self.target_fps } else { 60.0 }
    }
}

/// Resource holding the loaded settings for systems that need file paths
#[derive(Resource, Debug, Clone)]
pub struct CurrentSettings {
    pub settings: GameSettings,
}

impl Default for CurrentSettings {
    fn default() -> Self {
        Self {
            settings: GameSettings::load(),
        }
    }
}
