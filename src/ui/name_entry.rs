//! Multiplayer name capture: player 1, then player 2

use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::constants::*;
use crate::players::{NameBuffer, PlayerNames};
use crate::states::AppState;

use super::widgets::{centered_row, label};

/// Which name is being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameStage {
    #[default]
    First,
    Second,
}

impl NameStage {
    pub fn prompt(&self) -> &'static str {
        match self {
            NameStage::First => "Enter Player 1 Name: ",
            NameStage::Second => "Enter Player 2 Name: ",
        }
    }
}

/// Progress through the name-entry screen
#[derive(Resource, Debug, Clone, Default)]
pub struct NameEntry {
    pub stage: NameStage,
    pub buffer: NameBuffer,
    first_name: String,
}

impl NameEntry {
    /// Feed one key press. Returns both names once the second is confirmed.
    pub fn handle_key(&mut self, key: &Key) -> Option<PlayerNames> {
        match key {
            Key::Character(text) => self.buffer.push_str(text.as_str()),
            Key::Space => {
                self.buffer.push(' ');
            }
            Key::Backspace => self.buffer.backspace(),
            Key::Enter if self.buffer.can_confirm() => {
                let name = self.buffer.take();
                match self.stage {
                    NameStage::First => {
                        self.first_name = name;
                        self.stage = NameStage::Second;
                    }
                    NameStage::Second => {
                        return Some(PlayerNames::new(std::mem::take(&mut self.first_name), name));
                    }
                }
            }
            _ => {}
        }
        None
    }
}

/// Marker for the name-entry screen
#[derive(Component)]
pub struct NameEntryScreen;

#[derive(Component)]
pub struct NamePromptText;

#[derive(Component)]
pub struct NameValueText;

/// OnEnter(NameEntry)
pub fn spawn_name_entry(mut commands: Commands, assets: Res<GameAssets>) {
    commands.insert_resource(NameEntry::default());

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            NameEntryScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                centered_row(100.0),
                children![(
                    label(
                        NameStage::First.prompt(),
                        assets.font.clone(),
                        BODY_FONT_SIZE,
                        TEXT_PRIMARY
                    ),
                    NamePromptText
                )],
            ));
            parent.spawn((
                centered_row(130.0),
                children![(
                    label("", assets.font.clone(), BODY_FONT_SIZE, TEXT_PRIMARY),
                    NameValueText
                )],
            ));
            parent.spawn((
                centered_row(180.0),
                children![label(
                    CONFIRM_NAME_HINT,
                    assets.font.clone(),
                    BODY_FONT_SIZE,
                    TEXT_PRIMARY
                )],
            ));
        });
}

/// Read typed keys into the buffer; start the match after the second name
pub fn type_names(
    mut commands: Commands,
    mut keys: MessageReader<KeyboardInput>,
    mut entry: ResMut<NameEntry>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for key in keys.read() {
        if key.state != ButtonState::Pressed {
            continue;
        }
        if let Some(names) = entry.handle_key(&key.logical_key) {
            info!("Players: {} vs {}", names.player, names.opponent);
            commands.insert_resource(names);
            next_state.set(AppState::Playing);
            break;
        }
    }
}

/// Refresh the prompt and the typed name when the entry changes
pub fn update_name_texts(
    entry: Res<NameEntry>,
    mut prompts: Query<&mut Text, (With<NamePromptText>, Without<NameValueText>)>,
    mut values: Query<&mut Text, (With<NameValueText>, Without<NamePromptText>)>,
) {
    if !entry.is_changed() {
        return;
    }
    if let Ok(mut text) = prompts.single_mut() {
        text.0 = entry.stage.prompt().to_string();
    }
    if let Ok(mut text) = values.single_mut() {
        text.0 = entry.buffer.as_str().to_string();
    }
}

/// OnExit(NameEntry)
pub fn clear_name_entry(mut commands: Commands) {
    commands.remove_resource::<NameEntry>();
}
