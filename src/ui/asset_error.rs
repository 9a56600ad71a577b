//! Error screen shown when a required image is missing

use bevy::prelude::*;

use crate::assets::MissingAsset;
use crate::constants::*;
use crate::settings::MatchConfig;

use super::widgets::label;

/// Marker for the error screen
#[derive(Component)]
pub struct AssetErrorScreen;

/// Headline naming the missing file
pub fn missing_asset_message(file: &str) -> String {
    format!("ERROR: '{}' not found!", file)
}

/// OnEnter(AssetError): red screen with instructions, shown until the window closes
pub fn spawn_asset_error(
    mut commands: Commands,
    missing: Res<MissingAsset>,
    config: Res<MatchConfig>,
) {
    let middle = config.screen_height / 2.0;

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(ERROR_BACKGROUND),
            AssetErrorScreen,
        ))
        .with_children(|parent| {
            for (top, text) in [
                (middle - 20.0, missing_asset_message(missing.0)),
                (middle + 20.0, ASSET_ERROR_HINT.to_string()),
            ] {
                parent.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(100.0),
                        top: Val::Px(top),
                        ..default()
                    },
                    children![label(text, Handle::default(), BODY_FONT_SIZE, TEXT_PRIMARY)],
                ));
            }
        });
}
