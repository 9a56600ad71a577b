//! Game-over screen: winner banner, "Main Menu" button and Esc shortcut

use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::constants::*;
use crate::game::MatchSummary;
use crate::settings::MatchConfig;
use crate::states::AppState;

use super::widgets::{ButtonAction, centered_row, image_button, label};

/// Marker for the game-over screen
#[derive(Component)]
pub struct GameOverScreen;

/// `<name> Wins!`
pub fn winner_banner(name: &str) -> String {
    format!("{} Wins!", name)
}

/// OnEnter(GameOver)
pub fn spawn_game_over(
    mut commands: Commands,
    assets: Res<GameAssets>,
    config: Res<MatchConfig>,
    summary: Res<MatchSummary>,
) {
    let middle = config.screen_height / 2.0;
    let banner = winner_banner(&summary.winner_name);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            GameOverScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                centered_row(middle - 30.0),
                children![label(
                    banner,
                    assets.font.clone(),
                    WINNER_FONT_SIZE,
                    TEXT_WINNER
                )],
            ));
            parent.spawn(image_button(
                MAIN_MENU_LABEL,
                ButtonAction::MainMenu,
                config.screen_width / 2.0 - BUTTON_WIDTH / 2.0,
                middle + 40.0,
                assets.button.clone(),
                assets.font.clone(),
            ));
            parent.spawn((
                centered_row(middle + 120.0),
                children![label(
                    GAME_OVER_HINT,
                    assets.font.clone(),
                    BODY_FONT_SIZE,
                    TEXT_PRIMARY
                )],
            ));
        });
}

/// Escape also returns to the main menu
pub fn escape_to_menu(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(AppState::Menu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_banner() {
        assert_eq!(winner_banner("Player 1"), "Player 1 Wins!");
    }
}
