//! Single simulation step

use bevy::prelude::*;

use super::ai::track_ball;
use super::collision::circle_overlaps_paddle;
use super::state::{MatchMode, MatchState, Paddle, Side};
use crate::settings::MatchConfig;

/// Held movement keys for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub const IDLE: Self = Self {
        up: false,
        down: false,
    };
    pub const UP: Self = Self {
        up: true,
        down: false,
    };
    pub const DOWN: Self = Self {
        up: false,
        down: true,
    };

    /// -1 for up, +1 for down (screen y grows downward), 0 if both or neither
    pub fn direction(&self) -> f32 {
        match (self.up, self.down) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Input snapshot sampled once per frame
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchInput {
    pub player: PaddleIntent,
    /// Ignored in versus-AI matches
    pub opponent: PaddleIntent,
}

/// Something that happened during a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchEvent {
    /// Ball touched the top or bottom wall
    WallBounce,
    /// Ball overlapped this side's paddle and reversed horizontally
    PaddleHit(Side),
    /// `scorer` won the rally; the other side is down to `lives_left`
    PointScored { scorer: Side, lives_left: u32 },
}

/// Outcome of [`step`]
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub state: MatchState,
    pub events: Vec<MatchEvent>,
    /// Set once either side has run out of lives
    pub winner: Option<Side>,
}

impl StepResult {
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}

/// Advance the match by `dt` seconds.
///
/// Order: player paddle, opponent paddle (keys or AI), ball flight, wall
/// reflection, paddle reflection, scoring, terminal check. A finished match
/// is returned unchanged.
pub fn step(state: &MatchState, config: &MatchConfig, dt: f32, input: &MatchInput) -> StepResult {
    if let Some(winner) = state.winner() {
        return StepResult {
            state: *state,
            events: Vec::new(),
            winner: Some(winner),
        };
    }

    let mut next = *state;
    let mut events = Vec::new();
    let max_y = config.paddle_max_y();
    let travel = config.paddle_speed * dt;

    next.player.paddle = drive(state.player.paddle, input.player, travel, max_y);

    // AI reads the ball where it was at the start of the step
    let opponent_intent = match state.mode {
        MatchMode::Multiplayer => input.opponent,
        MatchMode::VersusAi => track_ball(&state.opponent.paddle, state.ball.position.y, max_y),
    };
    next.opponent.paddle = drive(state.opponent.paddle, opponent_intent, travel, max_y);

    next.ball = state.ball.advanced(dt);

    // Reflect only; the ball may sit past the wall for a frame
    if next.ball.position.y <= 0.0 || next.ball.position.y >= config.screen_height {
        next.ball.velocity.y = -next.ball.velocity.y;
        events.push(MatchEvent::WallBounce);
    }

    // No push-out after reflection: a ball still overlapping next step flips again
    for side in [Side::Player, Side::Opponent] {
        if circle_overlaps_paddle(next.ball.position, config.ball_radius, &next.side(side).paddle) {
            next.ball.velocity.x = -next.ball.velocity.x;
            events.push(MatchEvent::PaddleHit(side));
        }
    }

    if next.ball.position.x <= 0.0 {
        events.push(award_point(&mut next, Side::Player, config));
    }
    if next.ball.position.x >= config.screen_width {
        events.push(award_point(&mut next, Side::Opponent, config));
    }

    StepResult {
        winner: next.winner(),
        state: next,
        events,
    }
}

fn drive(paddle: Paddle, intent: PaddleIntent, travel: f32, max_y: f32) -> Paddle {
    let direction = intent.direction();
    if direction == 0.0 {
        return paddle;
    }
    paddle.shifted(direction * travel, max_y)
}

/// Score for `scorer`, take a life from the other side and re-serve from the center
fn award_point(state: &mut MatchState, scorer: Side, config: &MatchConfig) -> MatchEvent {
    state.side_mut(scorer).score += 1;

    let loser = state.side_mut(scorer.other());
    loser.lives = loser.lives.saturating_sub(1);
    let lives_left = loser.lives;

    state.ball.position = config.center();
    state.ball.velocity.x = -state.ball.velocity.x;

    MatchEvent::PointScored { scorer, lives_left }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ball;

    const DT: f32 = 1.0 / 60.0;

    fn new_match(mode: MatchMode) -> (MatchConfig, MatchState) {
        let config = MatchConfig::default();
        let state = MatchState::new(&config, mode);
        (config, state)
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let (config, state) = new_match(MatchMode::VersusAi);
        let input = MatchInput {
            player: PaddleIntent::UP,
            opponent: PaddleIntent::DOWN,
        };

        let result = step(&state, &config, 0.0, &input);
        assert_eq!(result.state, state);
        assert!(result.events.is_empty());
        assert!(!result.is_over());
    }

    #[test]
    fn test_zero_dt_still_reflects_overlapping_ball() {
        let (config, mut state) = new_match(MatchMode::Multiplayer);
        state.ball.position = state.opponent.paddle.center();

        let result = step(&state, &config, 0.0, &MatchInput::default());
        assert_eq!(result.state.ball.position, state.ball.position);
        assert_eq!(result.state.ball.velocity.x, -state.ball.velocity.x);
        assert_eq!(result.events, vec![MatchEvent::PaddleHit(Side::Opponent)]);
    }

    #[test]
    fn test_player_paddle_moves_with_keys() {
        let (config, state) = new_match(MatchMode::Multiplayer);
        let input = MatchInput {
            player: PaddleIntent::DOWN,
            opponent: PaddleIntent::UP,
        };

        let result = step(&state, &config, 0.5, &input);
        assert_eq!(result.state.player.paddle.y, 407.0);
        assert_eq!(result.state.opponent.paddle.y, 7.0);
    }

    #[test]
    fn test_paddle_at_top_stays_at_top() {
        let (config, mut state) = new_match(MatchMode::Multiplayer);
        state.player.paddle.y = 0.0;
        let input = MatchInput {
            player: PaddleIntent::UP,
            opponent: PaddleIntent::IDLE,
        };

        for _ in 0..10 {
            state = step(&state, &config, DT, &input).state;
            assert_eq!(state.player.paddle.y, 0.0);
        }
    }

    #[test]
    fn test_paddle_never_passes_bottom() {
        let (config, mut state) = new_match(MatchMode::Multiplayer);
        let input = MatchInput {
            player: PaddleIntent::DOWN,
            opponent: PaddleIntent::DOWN,
        };

        for _ in 0..120 {
            state = step(&state, &config, DT, &input).state;
        }
        assert_eq!(state.player.paddle.y, config.paddle_max_y());
        assert_eq!(state.opponent.paddle.bottom(), config.screen_height);
    }

    #[test]
    fn test_opponent_keys_ignored_against_ai() {
        let (config, state) = new_match(MatchMode::VersusAi);
        // Ball level with the AI paddle center, so the AI holds still
        let input = MatchInput {
            player: PaddleIntent::IDLE,
            opponent: PaddleIntent::UP,
        };

        let result = step(&state, &config, DT, &input);
        assert_eq!(result.state.opponent.paddle, state.opponent.paddle);
    }

    #[test]
    fn test_ai_moves_toward_ball_above() {
        let (config, mut state) = new_match(MatchMode::VersusAi);
        state.ball.position = Vec2::new(400.0, 50.0);
        assert!(state.ball.position.y < state.opponent.paddle.y);

        let result = step(&state, &config, DT, &MatchInput::default());
        assert!(result.state.opponent.paddle.y < state.opponent.paddle.y);
    }

    #[test]
    fn test_ai_moves_toward_ball_below() {
        let (config, mut state) = new_match(MatchMode::VersusAi);
        state.ball.position = Vec2::new(400.0, 500.0);

        let result = step(&state, &config, DT, &MatchInput::default());
        assert!(result.state.opponent.paddle.y > state.opponent.paddle.y);
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let (config, state) = new_match(MatchMode::Multiplayer);

        let result = step(&state, &config, 0.5, &MatchInput::default());
        assert_eq!(result.state.ball.position, Vec2::new(221.0, 442.0));
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_wall_reflects_without_clamping() {
        let (config, mut state) = new_match(MatchMode::Multiplayer);
        state.ball = Ball {
            position: Vec2::new(400.0, 2.0),
            velocity: Vec2::new(350.0, -350.0),
        };

        let result = step(&state, &config, DT, &MatchInput::default());
        assert!(result.state.ball.position.y < 0.0);
        assert_eq!(result.state.ball.velocity.y, 350.0);
        assert_eq!(result.events, vec![MatchEvent::WallBounce]);
    }

    #[test]
    fn test_bottom_wall_reflects() {
        let (config, mut state) = new_match(MatchMode::Multiplayer);
        state.ball = Ball {
            position: Vec2::new(400.0, 530.0),
            velocity: Vec2::new(350.0, 350.0),
        };

        let result = step(&state, &config, DT, &MatchInput::default());
        assert_eq!(result.state.ball.velocity.y, -350.0);
    }

    #[test]
    fn test_paddle_reflects_ball() {
        let (config, mut state) = new_match(MatchMode::Multiplayer);
        // Just short of the player paddle's front face (x = 722)
        state.ball = Ball {
            position: Vec2::new(708.0, 267.0),
            velocity: Vec2::new(350.0, 0.0),
        };

        let result = step(&state, &config, DT, &MatchInput::default());
        assert_eq!(result.state.ball.velocity.x, -350.0);
        assert_eq!(result.events, vec![MatchEvent::PaddleHit(Side::Player)]);
    }

    #[test]
    fn test_slow_ball_inside_paddle_reflects_again() {
        let (config, mut state) = new_match(MatchMode::Multiplayer);
        state.ball = Ball {
            position: Vec2::new(730.0, 267.0),
            velocity: Vec2::new(30.0, 0.0),
        };

        let first = step(&state, &config, DT, &MatchInput::default());
        assert_eq!(first.state.ball.velocity.x, -30.0);

        let second = step(&first.state, &config, DT, &MatchInput::default());
        assert_eq!(second.state.ball.velocity.x, 30.0);
        assert_eq!(second.events, vec![MatchEvent::PaddleHit(Side::Player)]);
    }

    #[test]
    fn test_left_exit_scores_for_player() {
        let (config, mut state) = new_match(MatchMode::Multiplayer);
        state.ball = Ball {
            position: Vec2::new(2.0, 100.0),
            velocity: Vec2::new(-350.0, 350.0),
        };

        let result = step(&state, &config, DT, &MatchInput::default());
        assert_eq!(result.state.player.score, 1);
        assert_eq!(result.state.opponent.lives, 4);
        assert_eq!(result.state.player.lives, 5);
        assert_eq!(result.state.ball.position, config.center());
        assert_eq!(result.state.ball.velocity, Vec2::new(350.0, 350.0));
        assert_eq!(
            result.events,
            vec![MatchEvent::PointScored {
                scorer: Side::Player,
                lives_left: 4
            }]
        );
    }

    #[test]
    fn test_right_exit_scores_for_opponent() {
        let (config, mut state) = new_match(MatchMode::Multiplayer);
        state.ball = Ball {
            position: Vec2::new(790.0, 100.0),
            velocity: Vec2::new(350.0, 350.0),
        };

        let result = step(&state, &config, DT, &MatchInput::default());
        assert_eq!(result.state.opponent.score, 1);
        assert_eq!(result.state.player.lives, 4);
        assert_eq!(result.state.ball.position, config.center());
        assert_eq!(result.state.ball.velocity.x, -350.0);
    }

    #[test]
    fn test_five_misses_end_match_for_player() {
        let (config, mut state) = new_match(MatchMode::Multiplayer);
        let mut last = None;

        for _ in 0..5 {
            state.ball = Ball {
                position: Vec2::new(1.0, 267.0),
                velocity: Vec2::new(-350.0, 350.0),
            };
            let result = step(&state, &config, DT, &MatchInput::default());
            state = result.state;
            last = Some(result);
        }

        let last = last.unwrap();
        assert_eq!(state.opponent.lives, 0);
        assert_eq!(state.player.lives, 5);
        assert!(last.is_over());
        assert_eq!(last.winner, Some(Side::Player));
    }

    #[test]
    fn test_finished_match_is_frozen() {
        let (config, mut state) = new_match(MatchMode::Multiplayer);
        state.player.lives = 0;

        let input = MatchInput {
            player: PaddleIntent::UP,
            opponent: PaddleIntent::UP,
        };
        let result = step(&state, &config, DT, &input);
        assert_eq!(result.state, state);
        assert_eq!(result.winner, Some(Side::Opponent));
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_lives_never_increase_over_long_match() {
        let (config, mut state) = new_match(MatchMode::VersusAi);
        let input = MatchInput::default();
        let center = config.center();

        for _ in 0..60 * 600 {
            let result = step(&state, &config, DT, &input);
            assert!(result.state.player.lives <= state.player.lives);
            assert!(result.state.opponent.lives <= state.opponent.lives);
            assert_ne!(result.state.ball.velocity.x, 0.0);

            for event in &result.events {
                if let MatchEvent::PointScored { .. } = event {
                    assert_eq!(result.state.ball.position, center);
                }
            }

            state = result.state;
            if result.is_over() {
                break;
            }
        }
    }
}
