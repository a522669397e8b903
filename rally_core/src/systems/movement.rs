use crate::Ball;
use hecs::World;

/// Move ball by one velocity unit
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_ball_moves_one_velocity_unit() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(-6.0, 0.0));

        move_ball(&mut world);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(394.0, 300.0));
            assert_eq!(ball.vel, Vec2::new(-6.0, 0.0), "Velocity unchanged");
        }
    }
}
