//! Fixed presentation constants for the pong game
//!
//! Gameplay tunables live in `MatchConfig` (see `settings`); this module only
//! holds values the settings file never changes: window title, colors, file
//! names and UI strings.

use bevy::prelude::*;

// =============================================================================
// WINDOW
// =============================================================================

pub const WINDOW_TITLE: &str = "Pong Game";

// =============================================================================
// COLORS
// =============================================================================

pub const CLEAR_COLOR: Color = Color::BLACK;
pub const ERROR_BACKGROUND: Color = Color::srgb(0.9, 0.16, 0.22); // Alarm red

pub const TEXT_PRIMARY: Color = Color::srgb(0.96, 0.96, 0.96); // Off-white
pub const TEXT_HOVER: Color = Color::srgb(1.0, 0.8, 0.0); // Gold
pub const TEXT_TITLE: Color = Color::srgb(0.99, 0.98, 0.0); // Yellow
pub const TEXT_WINNER: Color = Color::srgb(0.0, 0.89, 0.19); // Green

pub const PLAYER_COLOR: Color = Color::srgb(0.9, 0.16, 0.22); // Red (right paddle)
pub const OPPONENT_COLOR: Color = Color::srgb(0.0, 0.89, 0.19); // Green (left paddle)
pub const BALL_COLOR: Color = Color::WHITE;

// =============================================================================
// ASSET FILES (relative to the Bevy assets directory)
// =============================================================================

pub const BACKGROUND_IMAGE: &str = "background.png";
pub const BUTTON_IMAGE: &str = "button_image.png";
pub const DEFAULT_FONT_FILE: &str = "fonts/Roboto-Regular.ttf";

// =============================================================================
// MENU LAYOUT
// =============================================================================

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 60.0;
pub const MENU_FIRST_BUTTON_Y: f32 = 160.0;
pub const MENU_SECOND_BUTTON_Y: f32 = 240.0;
pub const TITLE_FONT_SIZE: f32 = 30.0;
pub const BUTTON_FONT_SIZE: f32 = 30.0;
pub const BODY_FONT_SIZE: f32 = 20.0;
pub const WINNER_FONT_SIZE: f32 = 40.0;

// =============================================================================
// PLAYER NAMES
// =============================================================================

/// Longest name the entry screen accepts
pub const MAX_NAME_LEN: usize = 49;
pub const DEFAULT_PLAYER_NAME: &str = "Player 1";
pub const AI_NAME: &str = "AI";

// =============================================================================
// UI STRINGS
// =============================================================================

pub const MENU_TITLE: &str = "Welcome to the Pong Game!";
pub const PLAY_AI_LABEL: &str = "Play with AI";
pub const MULTIPLAYER_LABEL: &str = "Multiplayer";
pub const MAIN_MENU_LABEL: &str = "Main Menu";
pub const MATCH_TITLE: &str = "Pong Game";
pub const CONFIRM_NAME_HINT: &str = "Press Enter to confirm name";
pub const GAME_OVER_HINT: &str = "Press Esc for Main Menu";
pub const ASSET_ERROR_HINT: &str = "Place the file in the assets directory!";
