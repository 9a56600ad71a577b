//! Match HUD: title and each side's hearts

use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::constants::*;
use crate::game::ActiveMatch;
use crate::players::PlayerNames;
use crate::settings::MatchConfig;
use crate::sim::Side;

use super::widgets::{centered_row, label};

/// Marker for the HUD root
#[derive(Component)]
pub struct HudScreen;

/// Hearts counter for one side
#[derive(Component)]
pub struct HeartsText(pub Side);

/// `<name>'s Hearts: <lives>`
pub fn hearts_label(name: &str, lives: u32) -> String {
    format!("{}'s Hearts: {}", name, lives)
}

/// OnEnter(Playing), after the match is created
pub fn spawn_hud(
    mut commands: Commands,
    assets: Res<GameAssets>,
    config: Res<MatchConfig>,
    names: Res<PlayerNames>,
    active: Res<ActiveMatch>,
) {
    let opponent_text = hearts_label(&names.opponent, active.0.opponent.lives);
    let player_text = hearts_label(&names.player, active.0.player.lives);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            HudScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                centered_row(20.0),
                children![label(
                    MATCH_TITLE,
                    assets.font.clone(),
                    TITLE_FONT_SIZE,
                    TEXT_TITLE
                )],
            ));
            // Opponent defends the left wall, player the right
            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(20.0),
                    top: Val::Px(20.0),
                    ..default()
                },
                label(opponent_text, assets.font.clone(), BODY_FONT_SIZE, OPPONENT_COLOR),
                HeartsText(Side::Opponent),
            ));
            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(config.screen_width - 200.0),
                    top: Val::Px(20.0),
                    ..default()
                },
                label(player_text, assets.font.clone(), BODY_FONT_SIZE, PLAYER_COLOR),
                HeartsText(Side::Player),
            ));
        });
}

/// Keep the hearts counters in step with the match
pub fn update_hud(
    active: Res<ActiveMatch>,
    names: Res<PlayerNames>,
    mut texts: Query<(&HeartsText, &mut Text)>,
) {
    if !active.is_changed() {
        return;
    }
    for (hearts, mut text) in &mut texts {
        let wanted = hearts_label(names.name(hearts.0), active.0.side(hearts.0).lives);
        if text.0 != wanted {
            text.0 = wanted;
        }
    }
}
