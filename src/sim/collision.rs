//! Ball/paddle overlap test

use bevy::prelude::*;

use super::state::Paddle;

/// True when a circle at `center` with `radius` touches or overlaps the paddle.
///
/// Uses the closest point on the rectangle to the circle center, so edge and
/// corner contacts are both inclusive.
pub fn circle_overlaps_paddle(center: Vec2, radius: f32, paddle: &Paddle) -> bool {
    let closest = Vec2::new(
        center.x.clamp(paddle.x, paddle.x + paddle.width),
        center.y.clamp(paddle.y, paddle.bottom()),
    );
    center.distance_squared(closest) <= radius * radius
}
