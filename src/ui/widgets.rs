//! Shared widgets: image buttons with a hover highlight and their click actions

use bevy::prelude::*;

use crate::constants::*;
use crate::game::SelectedMode;
use crate::players::PlayerNames;
use crate::sim::MatchMode;
use crate::states::AppState;

/// What a button does when clicked
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    PlayAi,
    Multiplayer,
    MainMenu,
}

impl ButtonAction {
    /// Screen the click leads to
    pub fn target_state(&self) -> AppState {
        match self {
            ButtonAction::PlayAi => AppState::Playing,
            ButtonAction::Multiplayer => AppState::NameEntry,
            ButtonAction::MainMenu => AppState::Menu,
        }
    }

    /// Mode selected by the click, if it starts a new match
    pub fn mode(&self) -> Option<MatchMode> {
        match self {
            ButtonAction::PlayAi => Some(MatchMode::VersusAi),
            ButtonAction::Multiplayer => Some(MatchMode::Multiplayer),
            ButtonAction::MainMenu => None,
        }
    }
}

/// Text inside a button, recolored on hover
#[derive(Component)]
pub struct ButtonLabel;

/// Text node using the game font
pub fn label(text: impl Into<String>, font: Handle<Font>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font,
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

/// Full-width row at `top` with its content centered horizontally
pub fn centered_row(top: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        top: Val::Px(top),
        width: Val::Percent(100.0),
        justify_content: JustifyContent::Center,
        ..default()
    }
}

/// Image button with a centered caption, top-left corner at (`left`, `top`)
pub fn image_button(
    caption: impl Into<String>,
    action: ButtonAction,
    left: f32,
    top: f32,
    image: Handle<Image>,
    font: Handle<Font>,
) -> impl Bundle {
    (
        Button,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(left),
            top: Val::Px(top),
            width: Val::Px(BUTTON_WIDTH),
            height: Val::Px(BUTTON_HEIGHT),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        ImageNode::new(image),
        action,
        children![(
            label(caption, font, BUTTON_FONT_SIZE, TEXT_PRIMARY),
            ButtonLabel
        )],
    )
}

/// Gold caption while the pointer is over a button, white otherwise
pub fn highlight_hovered_buttons(
    buttons: Query<&Interaction, With<Button>>,
    mut labels: Query<(&ChildOf, &mut TextColor), With<ButtonLabel>>,
) {
    for (child_of, mut color) in &mut labels {
        let hovered = matches!(
            buttons.get(child_of.parent()),
            Ok(Interaction::Hovered | Interaction::Pressed)
        );
        let wanted = if hovered { TEXT_HOVER } else { TEXT_PRIMARY };
        if color.0 != wanted {
            color.0 = wanted;
        }
    }
}

/// Apply the action of a clicked button
pub fn handle_button_actions(
    mut commands: Commands,
    buttons: Query<(&Interaction, &ButtonAction), Changed<Interaction>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (interaction, action) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }

        if let Some(mode) = action.mode() {
            commands.insert_resource(SelectedMode(mode));
        }
        if *action == ButtonAction::PlayAi {
            commands.insert_resource(PlayerNames::for_ai_match());
        }

        info!("Button pressed: {:?}", action);
        next_state.set(action.target_state());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_actions() {
        assert_eq!(ButtonAction::PlayAi.target_state(), AppState::Playing);
        assert_eq!(ButtonAction::PlayAi.mode(), Some(MatchMode::VersusAi));
        assert_eq!(ButtonAction::Multiplayer.target_state(), AppState::NameEntry);
        assert_eq!(ButtonAction::Multiplayer.mode(), Some(MatchMode::Multiplayer));
    }

    #[test]
    fn test_main_menu_action_keeps_mode() {
        assert_eq!(ButtonAction::MainMenu.target_state(), AppState::Menu);
        assert_eq!(ButtonAction::MainMenu.mode(), None);
    }
}
