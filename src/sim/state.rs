//! Match state value types

use bevy::prelude::*;
use std::fmt;

use crate::constants::{AI_NAME, DEFAULT_PLAYER_NAME};
use crate::settings::MatchConfig;

/// One end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human on the right-hand paddle (W/S)
    Player,
    /// Left-hand paddle: second human (Up/Down) or the AI
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Who controls the opponent paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    #[default]
    VersusAi,
    Multiplayer,
}

impl MatchMode {
    /// Label written to the results log
    pub fn label(&self) -> &'static str {
        match self {
            MatchMode::VersusAi => "AI vs Player",
            MatchMode::Multiplayer => "Multiplayer",
        }
    }

    /// Name shown for the player side when nobody typed one in
    pub fn default_player_name(&self) -> &'static str {
        DEFAULT_PLAYER_NAME
    }

    /// Fixed opponent name, if the mode has one
    pub fn fixed_opponent_name(&self) -> Option<&'static str> {
        match self {
            MatchMode::VersusAi => Some(AI_NAME),
            MatchMode::Multiplayer => None,
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Axis-aligned paddle rectangle in screen space (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle at column `x`, centered vertically on the table
    pub fn centered(x: f32, config: &MatchConfig) -> Self {
        Self {
            x,
            y: config.screen_height / 2.0 - config.paddle_height / 2.0,
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.center_y())
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Same paddle shifted vertically by `dy`, kept within `[0, max_y]`
    pub fn shifted(self, dy: f32, max_y: f32) -> Self {
        Self {
            y: (self.y + dy).clamp(0.0, max_y),
            ..self
        }
    }
}

/// Ball position and velocity in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Ball {
    /// Ball at the table center heading diagonally toward the opponent
    pub fn serve(config: &MatchConfig) -> Self {
        Self {
            position: config.center(),
            velocity: Vec2::new(-config.ball_speed, config.ball_speed),
        }
    }

    /// Ball after flying for `dt` seconds
    pub fn advanced(self, dt: f32) -> Self {
        Self {
            position: self.position + self.velocity * dt,
            ..self
        }
    }
}

/// Per-side paddle, lives and points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideState {
    pub paddle: Paddle,
    pub lives: u32,
    pub score: u32,
}

/// Complete state of one match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchState {
    pub mode: MatchMode,
    pub player: SideState,
    pub opponent: SideState,
    pub ball: Ball,
}

impl MatchState {
    /// Fresh match: paddles centered, ball served from the center, full lives
    pub fn new(config: &MatchConfig, mode: MatchMode) -> Self {
        Self {
            mode,
            player: SideState {
                paddle: Paddle::centered(config.player_paddle_x(), config),
                lives: config.max_lives,
                score: 0,
            },
            opponent: SideState {
                paddle: Paddle::centered(config.opponent_paddle_x, config),
                lives: config.max_lives,
                score: 0,
            },
            ball: Ball::serve(config),
        }
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Side whose lives are still positive once the other side has none left
    pub fn winner(&self) -> Option<Side> {
        if self.opponent.lives == 0 {
            Some(Side::Player)
        } else if self.player.lives == 0 {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }
}
