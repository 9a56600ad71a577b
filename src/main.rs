//! Pong Game - main entry point: app setup and system registration.

use bevy::prelude::*;
use pong_game::{
    AppState, CurrentSettings, MatchInput, PlayerNames, ResultLog, SelectedMode, assets,
    constants::*, game, input, states, ui,
};

fn main() {
    // Load persistent settings (uses defaults if file doesn't exist)
    let current_settings = CurrentSettings::default();

    // Write the file on first run only, so a broken file is never overwritten
    if let Err(e) = current_settings.settings.save_if_missing() {
        warn!("Failed to save initial settings: {}", e);
    }

    let config = current_settings.settings.match_config;
    let step_hz = current_settings.settings.step_hz();
    let result_log = ResultLog::new(current_settings.settings.results_file.clone());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                // Fixed table size; scale factor pinned so UI pixels match table units
                resolution: bevy::window::WindowResolution::new(
                    config.screen_width as u32,
                    config.screen_height as u32,
                )
                .with_scale_factor_override(1.0),
                title: WINDOW_TITLE.into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(CLEAR_COLOR))
        .insert_resource(Time::<Fixed>::from_hz(step_hz))
        .insert_resource(config)
        .insert_resource(result_log)
        .insert_resource(current_settings)
        .init_state::<AppState>()
        .init_resource::<MatchInput>()
        .init_resource::<SelectedMode>()
        .init_resource::<PlayerNames>()
        .add_systems(Startup, (setup_camera, assets::load_game_assets))
        .add_systems(
            Update,
            (
                states::log_state_transitions,
                ui::highlight_hovered_buttons,
                ui::handle_button_actions,
            ),
        )
        // =========== LOADING / ERROR ===========
        .add_systems(
            Update,
            assets::check_asset_loading.run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::AssetError), ui::spawn_asset_error)
        // =========== MENU ===========
        .add_systems(OnEnter(AppState::Menu), ui::spawn_menu)
        .add_systems(OnExit(AppState::Menu), ui::despawn_screen::<ui::MenuScreen>)
        // =========== NAME ENTRY ===========
        .add_systems(OnEnter(AppState::NameEntry), ui::spawn_name_entry)
        .add_systems(
            Update,
            (ui::type_names, ui::update_name_texts)
                .chain()
                .run_if(in_state(AppState::NameEntry)),
        )
        .add_systems(
            OnExit(AppState::NameEntry),
            (
                ui::despawn_screen::<ui::NameEntryScreen>,
                ui::clear_name_entry,
            ),
        )
        // =========== MATCH ===========
        // Match state must exist before the arena and HUD read it
        .add_systems(
            OnEnter(AppState::Playing),
            (game::start_match, game::spawn_arena, ui::spawn_hud).chain(),
        )
        .add_systems(
            Update,
            (
                input::capture_input,
                game::check_match_over,
                game::sync_arena,
                ui::update_hud,
            )
                .chain()
                .run_if(in_state(AppState::Playing)),
        )
        .add_systems(
            FixedUpdate,
            game::advance_match.run_if(in_state(AppState::Playing)),
        )
        .add_systems(
            OnExit(AppState::Playing),
            (
                ui::despawn_screen::<game::ArenaEntity>,
                ui::despawn_screen::<ui::HudScreen>,
                game::finish_match,
                input::clear_input,
            ),
        )
        // =========== GAME OVER ===========
        .add_systems(
            OnEnter(AppState::GameOver),
            (game::record_result, ui::spawn_game_over),
        )
        .add_systems(
            Update,
            ui::escape_to_menu.run_if(in_state(AppState::GameOver)),
        )
        .add_systems(
            OnExit(AppState::GameOver),
            ui::despawn_screen::<ui::GameOverScreen>,
        )
        .run();
}

/// 2D camera centered on the table
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
