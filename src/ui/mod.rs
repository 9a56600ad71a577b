//! UI module - menu, name entry, match HUD, game over and the asset error screen

mod asset_error;
mod game_over;
mod hud;
mod menu;
mod name_entry;
mod widgets;

pub use asset_error::*;
pub use game_over::*;
pub use hud::*;
pub use menu::*;
pub use name_entry::*;
pub use widgets::*;

use bevy::prelude::*;

/// Despawn every entity tagged with screen marker `T` (used on state exit)
pub fn despawn_screen<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
