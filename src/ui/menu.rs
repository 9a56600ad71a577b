//! Main menu: background image, title and the two mode buttons

use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::constants::*;
use crate::settings::MatchConfig;

use super::widgets::{ButtonAction, centered_row, image_button, label};

/// Marker for everything on the menu screen
#[derive(Component)]
pub struct MenuScreen;

/// OnEnter(Menu)
pub fn spawn_menu(mut commands: Commands, assets: Res<GameAssets>, config: Res<MatchConfig>) {
    let button_left = config.screen_width / 2.0 - BUTTON_WIDTH / 2.0;

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            ImageNode::new(assets.background.clone()),
            MenuScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                centered_row(50.0),
                children![label(
                    MENU_TITLE,
                    assets.font.clone(),
                    TITLE_FONT_SIZE,
                    TEXT_PRIMARY
                )],
            ));
            parent.spawn(image_button(
                PLAY_AI_LABEL,
                ButtonAction::PlayAi,
                button_left,
                MENU_FIRST_BUTTON_Y,
                assets.button.clone(),
                assets.font.clone(),
            ));
            parent.spawn(image_button(
                MULTIPLAYER_LABEL,
                ButtonAction::Multiplayer,
                button_left,
                MENU_SECOND_BUTTON_Y,
                assets.button.clone(),
                assets.font.clone(),
            ));
        });
}
