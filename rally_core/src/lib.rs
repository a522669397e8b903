pub mod audio;
pub mod components;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod fsm;
pub mod params;
pub mod resources;
pub mod round;
pub mod snapshot;
pub mod state;
pub mod systems;
pub mod timers;

pub use audio::*;
pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use error::{Error, Result};
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use round::*;
pub use snapshot::*;
pub use state::*;
pub use systems::PointOutcome;
pub use timers::*;

use hecs::World;
use systems::*;

/// Run one playing tick of the simulation.
///
/// One tick moves the ball by exactly one velocity unit; there is no
/// delta-time scaling, so apparent speed follows the host's frame rate.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    opponent_speed: f32,
) -> Option<PointOutcome> {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Check collisions (walls, then each paddle)
    check_collisions(world, config, events);

    // 3. Check exit (ball left the surface)
    check_exit(world, config, events);

    // 4. Opponent tracks the ball
    move_opponent(world, config, opponent_speed);

    // 5. Count the point, if any
    award_point(score, events)
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
