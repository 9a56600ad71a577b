//! Top-level screen flow

use bevy::prelude::*;

/// Which screen the game is on
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Waiting for the menu images to finish loading
    #[default]
    Loading,
    /// A required image failed to load; stays here until the window closes
    AssetError,
    Menu,
    /// Multiplayer name capture (player 1, then player 2)
    NameEntry,
    Playing,
    GameOver,
}

/// Log every screen change
pub fn log_state_transitions(mut transitions: MessageReader<StateTransitionEvent<AppState>>) {
    for transition in transitions.read() {
        info!("Screen: {:?} -> {:?}", transition.exited, transition.entered);
    }
}
