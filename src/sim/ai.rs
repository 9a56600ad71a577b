//! Opponent AI: chase the ball's current height

use super::state::Paddle;
use super::step::PaddleIntent;

/// Pick a movement for `paddle` that follows the ball vertically.
///
/// Moves up while the ball is above the paddle center and the paddle is below
/// the top bound, down while the ball is below the center and the paddle is
/// above `max_y`. No prediction of where the ball will arrive.
pub fn track_ball(paddle: &Paddle, ball_y: f32, max_y: f32) -> PaddleIntent {
    let center = paddle.center_y();
    PaddleIntent {
        up: ball_y < center && paddle.y > 0.0,
        down: ball_y > center && paddle.y < max_y,
    }
}
