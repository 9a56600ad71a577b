//! Match simulator
//!
//! Pure gameplay rules for one match: paddle movement, ball flight, wall and
//! paddle reflection, scoring and the terminal check. Nothing in here touches
//! the ECS world, the renderer or the filesystem, so every rule can be driven
//! headless from tests.

pub mod ai;
pub mod collision;
pub mod state;
pub mod step;

pub use ai::track_ball;
pub use collision::circle_overlaps_paddle;
pub use state::{Ball, MatchMode, MatchState, Paddle, Side, SideState};
pub use step::{MatchEvent, MatchInput, PaddleIntent, StepResult, step};
