//! Menu images and font
//!
//! The background and button images are required: if either fails to load
//! the game switches to the error screen and stays there. The font is
//! optional: if it fails to load the screens use Bevy's built-in font.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::constants::{BACKGROUND_IMAGE, BUTTON_IMAGE};
use crate::settings::CurrentSettings;
use crate::states::AppState;

/// Handles shared by every screen
#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub background: Handle<Image>,
    pub button: Handle<Image>,
    pub font: Handle<Font>,
}

/// Name of the required image that failed to load
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct MissingAsset(pub &'static str);

/// Load progress of one asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Pending,
    Ready,
    Failed,
}

impl From<&LoadState> for AssetStatus {
    fn from(state: &LoadState) -> Self {
        match state {
            LoadState::Loaded => AssetStatus::Ready,
            LoadState::Failed(_) => AssetStatus::Failed,
            _ => AssetStatus::Pending,
        }
    }
}

/// Decide where loading goes next given the background, button and font status.
///
/// `Err` names the first failed image; `Ok(None)` means keep waiting. A failed
/// font does not block the menu.
pub fn resolve_loading(
    background: AssetStatus,
    button: AssetStatus,
    font: AssetStatus,
) -> Result<Option<AppState>, &'static str> {
    if background == AssetStatus::Failed {
        return Err(BACKGROUND_IMAGE);
    }
    if button == AssetStatus::Failed {
        return Err(BUTTON_IMAGE);
    }
    if background == AssetStatus::Ready
        && button == AssetStatus::Ready
        && font != AssetStatus::Pending
    {
        return Ok(Some(AppState::Menu));
    }
    Ok(None)
}

/// Startup: queue the images and the font
pub fn load_game_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    current_settings: Res<CurrentSettings>,
) {
    let font_file = &current_settings.settings.font_file;
    let font = if font_file.is_empty() {
        info!("No font configured, using the default font");
        Handle::default()
    } else {
        asset_server.load(font_file.clone())
    };

    commands.insert_resource(GameAssets {
        background: asset_server.load(BACKGROUND_IMAGE),
        button: asset_server.load(BUTTON_IMAGE),
        font,
    });
}

/// Wait for both required images and the font, then open the menu or the
/// error screen. A font that fails to load is swapped for the default one.
pub fn check_asset_loading(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut assets: ResMut<GameAssets>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let background = AssetStatus::from(&asset_server.load_state(assets.background.id()));
    let button = AssetStatus::from(&asset_server.load_state(assets.button.id()));

    let mut font = if assets.font == Handle::default() {
        AssetStatus::Ready
    } else {
        AssetStatus::from(&asset_server.load_state(assets.font.id()))
    };
    if font == AssetStatus::Failed {
        warn!("Font could not be loaded, using the default font");
        assets.font = Handle::default();
        font = AssetStatus::Ready;
    }

    match resolve_loading(background, button, font) {
        Ok(Some(state)) => {
            info!("Menu images loaded");
            next_state.set(state);
        }
        Ok(None) => {}
        Err(file) => {
            error!("Required image '{}' could not be loaded", file);
            commands.insert_resource(MissingAsset(file));
            next_state.set(AppState::AssetError);
        }
    }
}
