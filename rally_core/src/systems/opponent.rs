use crate::{Ball, Config, Paddle, Params, Side};
use hecs::World;

/// Move the opponent paddle toward the ball.
///
/// Holds still while the paddle center is within the dead zone of the ball's
/// y, otherwise moves `speed` units toward it. The dead zone keeps tracking
/// imperfect so angled shots can beat it.
pub fn move_opponent(world: &mut World, config: &Config, speed: f32) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }

        let center = paddle.center(config.paddle_height);
        if center < ball_y - Params::OPPONENT_DEAD_ZONE {
            paddle.y += speed;
        } else if center > ball_y + Params::OPPONENT_DEAD_ZONE {
            paddle.y -= speed;
        }

        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
