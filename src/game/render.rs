//! Draws the table from a read-only match snapshot

use bevy::prelude::*;

use crate::constants::{BALL_COLOR, OPPONENT_COLOR, PLAYER_COLOR};
use crate::settings::MatchConfig;
use crate::sim::{MatchState, Side};

use super::ActiveMatch;

/// Anything spawned for the match screen, removed when the match ends
#[derive(Component)]
pub struct ArenaEntity;

#[derive(Component)]
pub struct PaddleSprite(pub Side);

#[derive(Component)]
pub struct BallSprite;

fn paddle_color(side: Side) -> Color {
    match side {
        Side::Player => PLAYER_COLOR,
        Side::Opponent => OPPONENT_COLOR,
    }
}

/// World translation of a side's paddle center
pub fn paddle_translation(config: &MatchConfig, state: &MatchState, side: Side) -> Vec3 {
    config
        .to_world(state.side(side).paddle.center())
        .extend(0.0)
}

/// World translation of the ball, drawn above the paddles
pub fn ball_translation(config: &MatchConfig, state: &MatchState) -> Vec3 {
    config.to_world(state.ball.position).extend(1.0)
}

/// OnEnter(Playing): paddles as sprites, ball as a circle mesh
pub fn spawn_arena(
    mut commands: Commands,
    config: Res<MatchConfig>,
    active: Res<ActiveMatch>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let state = &active.0;

    for side in [Side::Player, Side::Opponent] {
        commands.spawn((
            Sprite::from_color(paddle_color(side), state.side(side).paddle.size()),
            Transform::from_translation(paddle_translation(&config, state, side)),
            PaddleSprite(side),
            ArenaEntity,
        ));
    }

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(config.ball_radius))),
        MeshMaterial2d(materials.add(BALL_COLOR)),
        Transform::from_translation(ball_translation(&config, state)),
        BallSprite,
        ArenaEntity,
    ));
}

/// Copy the latest match state onto the sprites
pub fn sync_arena(
    config: Res<MatchConfig>,
    active: Res<ActiveMatch>,
    mut paddles: Query<(&PaddleSprite, &mut Transform), Without<BallSprite>>,
    mut balls: Query<&mut Transform, (With<BallSprite>, Without<PaddleSprite>)>,
) {
    let state = &active.0;

    for (paddle, mut transform) in &mut paddles {
        transform.translation = paddle_translation(&config, state, paddle.0);
    }
    for mut transform in &mut balls {
        transform.translation = ball_translation(&config, state);
    }
}
