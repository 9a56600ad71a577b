//! Pong Game - a two-player / player-vs-AI Pong built with Bevy
//!
//! This crate provides the match simulator, the screens around it and the
//! result log. `main.rs` wires them into the app schedules.

// Core modules
pub mod assets;
pub mod constants;
pub mod players;
pub mod results;
pub mod settings;
pub mod sim;
pub mod states;

// Game logic modules
pub mod game;
pub mod input;
pub mod ui;

// Re-export commonly used types for convenience
pub use assets::{GameAssets, MissingAsset};
pub use constants::*;
pub use game::{ActiveMatch, MatchSummary, SelectedMode};
pub use players::{NameBuffer, PlayerNames};
pub use results::{ResultLog, format_result_line};
pub use settings::{CurrentSettings, GameSettings, MatchConfig};
pub use sim::{
    Ball, MatchEvent, MatchInput, MatchMode, MatchState, Paddle, PaddleIntent, Side, StepResult,
    step,
};
pub use states::AppState;
