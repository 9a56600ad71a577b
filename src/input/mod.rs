//! Input module - samples paddle keys into the MatchInput resource

use bevy::prelude::*;

use crate::sim::{MatchInput, PaddleIntent};

/// Keys driving the player (right-hand) paddle
pub const PLAYER_KEYS: (KeyCode, KeyCode) = (KeyCode::KeyW, KeyCode::KeyS);
/// Keys driving the opponent (left-hand) paddle in multiplayer
pub const OPPONENT_KEYS: (KeyCode, KeyCode) = (KeyCode::ArrowUp, KeyCode::ArrowDown);

fn intent(keyboard: &ButtonInput<KeyCode>, (up, down): (KeyCode, KeyCode)) -> PaddleIntent {
    PaddleIntent {
        up: keyboard.pressed(up),
        down: keyboard.pressed(down),
    }
}

/// Runs in Update, once per frame, so every fixed step of the frame sees the
/// same snapshot of held keys.
pub fn capture_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MatchInput>) {
    *input = MatchInput {
        player: intent(&keyboard, PLAYER_KEYS),
        opponent: intent(&keyboard, OPPONENT_KEYS),
    };
}

/// Drop held keys when a match ends so the next one starts still
pub fn clear_input(mut input: ResMut<MatchInput>) {
    *input = MatchInput::default();
}
