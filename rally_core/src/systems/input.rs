use crate::{Config, Paddle, Side};
use hecs::World;

/// Center the player paddle on the pointer, clamped to the surface.
/// Non-finite positions are dropped.
pub fn apply_pointer(world: &mut World, config: &Config, center_y: f32) {
    if !center_y.is_finite() {
        return;
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = config.clamp_paddle_y(center_y - config.paddle_height / 2.0);
        }
    }
}
