//! Match glue between the simulator and the ECS world
//!
//! Owns the `ActiveMatch` resource for the lifetime of one match, steps it at
//! the fixed simulation rate, and hands the result to the game-over screen.

mod render;

pub use render::*;

use bevy::prelude::*;

use crate::players::PlayerNames;
use crate::results::ResultLog;
use crate::settings::MatchConfig;
use crate::sim::{MatchEvent, MatchInput, MatchMode, MatchState, Side, step};
use crate::states::AppState;

/// Mode picked on the main menu for the next match
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedMode(pub MatchMode);

/// State of the match being played
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ActiveMatch(pub MatchState);

/// Final outcome shown on the game-over screen and written to the log
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub mode: MatchMode,
    pub winner: Side,
    pub winner_name: String,
    pub player_lives: u32,
    pub opponent_lives: u32,
}

impl MatchSummary {
    /// Summary of a finished match, `None` while both sides have lives left
    pub fn from_state(state: &MatchState, names: &PlayerNames) -> Option<Self> {
        let winner = state.winner()?;
        Some(Self {
            mode: state.mode,
            winner,
            winner_name: names.name(winner).to_string(),
            player_lives: state.player.lives,
            opponent_lives: state.opponent.lives,
        })
    }
}

/// OnEnter(Playing): fresh match for the selected mode
pub fn start_match(
    mut commands: Commands,
    config: Res<MatchConfig>,
    mode: Res<SelectedMode>,
    names: Res<PlayerNames>,
) {
    info!(
        "Match start ({}): {} vs {}, {} lives each",
        mode.0, names.player, names.opponent, config.max_lives
    );
    commands.insert_resource(ActiveMatch(MatchState::new(&config, mode.0)));
    commands.remove_resource::<MatchSummary>();
}

/// FixedUpdate: advance the match by one simulation step
pub fn advance_match(
    time: Res<Time>,
    config: Res<MatchConfig>,
    input: Res<MatchInput>,
    names: Res<PlayerNames>,
    mut active: ResMut<ActiveMatch>,
) {
    let result = step(&active.0, &config, time.delta_secs(), &input);

    for event in &result.events {
        if let MatchEvent::PointScored { scorer, lives_left } = event {
            info!(
                "POINT {}! {} has {} lives left",
                names.name(*scorer),
                names.name(scorer.other()),
                lives_left
            );
        }
    }

    active.0 = result.state;
}

/// Switch to the game-over screen once a side is out of lives
pub fn check_match_over(
    mut commands: Commands,
    active: Res<ActiveMatch>,
    names: Res<PlayerNames>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(summary) = MatchSummary::from_state(&active.0, &names) else {
        return;
    };

    info!(
        "Match over: {} wins (lives {} - {})",
        summary.winner_name, summary.player_lives, summary.opponent_lives
    );
    commands.insert_resource(summary);
    next_state.set(AppState::GameOver);
}

/// OnExit(Playing): the finished match state is no longer needed
pub fn finish_match(mut commands: Commands) {
    commands.remove_resource::<ActiveMatch>();
}

/// OnEnter(GameOver): append the result to the log file
pub fn record_result(summary: Res<MatchSummary>, log: Res<ResultLog>) {
    match log.append(summary.mode, &summary.winner_name) {
        Ok(true) => info!("Result logged to {}", log.path().display()),
        Ok(false) => warn!("Winner has no name, result not logged"),
        Err(e) => error!("Could not open {} to log results: {}", log.path().display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn finished_state() -> MatchState {
        let mut state = MatchState::new(&MatchConfig::default(), MatchMode::VersusAi);
        state.opponent.lives = 0;
        state.player.lives = 3;
        state
    }

    #[test]
    fn test_summary_names_winner() {
        let summary =
            MatchSummary::from_state(&finished_state(), &PlayerNames::for_ai_match()).unwrap();
        assert_eq!(summary.winner, Side::Player);
        assert_eq!(summary.winner_name, "Player 1");
        assert_eq!(summary.mode, MatchMode::VersusAi);
        assert_eq!(summary.player_lives, 3);
    }

    #[test]
    fn test_no_summary_mid_match() {
        let state = MatchState::new(&MatchConfig::default(), MatchMode::Multiplayer);
        assert!(MatchSummary::from_state(&state, &PlayerNames::new("A", "B")).is_none());
    }

    #[test]
    fn test_opponent_win_uses_opponent_name() {
        let mut state = MatchState::new(&MatchConfig::default(), MatchMode::Multiplayer);
        state.player.lives = 0;
        let summary = MatchSummary::from_state(&state, &PlayerNames::new("Ada", "Lin")).unwrap();
        assert_eq!(summary.winner_name, "Lin");
    }

    #[test]
    fn test_finished_match_moves_to_game_over() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin);
        app.insert_state(AppState::Playing);
        app.insert_resource(ActiveMatch(finished_state()));
        app.insert_resource(PlayerNames::for_ai_match());
        app.add_systems(Update, check_match_over.run_if(in_state(AppState::Playing)));

        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::GameOver
        );
        let summary = app.world().resource::<MatchSummary>();
        assert_eq!(summary.winner_name, "Player 1");
    }

    #[test]
    fn test_running_match_stays_in_play() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin);
        app.insert_state(AppState::Playing);
        app.insert_resource(ActiveMatch(MatchState::new(
            &MatchConfig::default(),
            MatchMode::VersusAi,
        )));
        app.insert_resource(PlayerNames::for_ai_match());
        app.add_systems(Update, check_match_over.run_if(in_state(AppState::Playing)));

        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Playing
        );
        assert!(!app.world().contains_resource::<MatchSummary>());
    }
}
