use crate::{Ball, Config, Events, Paddle, Params, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
///
/// Walls flip `vy`. A paddle flips `vx` and replaces `vy` with the
/// off-center distance times the spin factor. Positions are never corrected,
/// so a ball may overlap a wall or paddle for a tick.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let r = config.ball_radius;

        // Top/bottom walls
        if ball.pos.y + r > config.surface_height || ball.pos.y - r < 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        // Paddles are checked independently
        for paddle in &paddles {
            let crossed_face = match paddle.side {
                Side::Player => ball.pos.x - r < config.paddle_width,
                Side::Opponent => ball.pos.x + r > config.paddle_x(Side::Opponent),
            };
            let within_span =
                ball.pos.y > paddle.y && ball.pos.y < paddle.y + config.paddle_height;

            if crossed_face && within_span {
                ball.vel.x = -ball.vel.x;
                let offset = ball.pos.y - paddle.center(config.paddle_height);
                ball.vel.y = offset * Params::PADDLE_SPIN_FACTOR;
                events.ball_hit_paddle = true;
            }
        }
    }
}
