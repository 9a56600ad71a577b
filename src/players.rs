//! Player identities and the name-entry buffer

use bevy::prelude::*;

use crate::constants::MAX_NAME_LEN;
use crate::sim::{MatchMode, Side};

/// Display names for both sides of the current match
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    pub player: String,
    pub opponent: String,
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::for_ai_match()
    }
}

impl PlayerNames {
    /// Placeholder human name against the fixed "AI" name
    pub fn for_ai_match() -> Self {
        let mode = MatchMode::VersusAi;
        Self {
            player: mode.default_player_name().to_string(),
            opponent: mode.fixed_opponent_name().unwrap_or_default().to_string(),
        }
    }

    pub fn new(player: impl Into<String>, opponent: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            opponent: opponent.into(),
        }
    }

    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
}

/// Text typed on the name-entry screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameBuffer {
    text: String,
}

impl NameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters the entry screen accepts: space through `z`
    pub fn accepts(c: char) -> bool {
        (' '..='z').contains(&c)
    }

    /// Append `c` if it is accepted and the name has room. Returns true if added.
    pub fn push(&mut self, c: char) -> bool {
        if !Self::accepts(c) || self.text.len() >= MAX_NAME_LEN {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Append every accepted character of `s` until the buffer is full
    pub fn push_str(&mut self, s: &str) {
        for c in s.chars() {
            self.push(c);
        }
    }

    /// Remove the last character, if any
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Enter only confirms a non-empty name
    pub fn can_confirm(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Take the typed name, leaving the buffer empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}
