use glam::Vec2;
use hecs::World;

use crate::systems::{self, PointOutcome};
use crate::{
    create_ball, create_paddle, Ball, Config, DifficultyProfile, Events, GameRng, Paddle, Score,
    Side,
};

/// Ball, paddles and score for one running game.
///
/// Created once and mutated in place; every system borrows it explicitly.
pub struct SimulationState {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
}

impl SimulationState {
    /// Spawn centered paddles and a freshly served ball
    pub fn new(config: Config, profile: DifficultyProfile) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(config.seed);

        let paddle_y = config.centered_paddle_y();
        create_paddle(&mut world, Side::Player, paddle_y);
        create_paddle(&mut world, Side::Opponent, paddle_y);

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.serve(surface_center(&config), profile.ball_initial_speed, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
        }
    }

    /// Re-center and re-launch the ball
    pub fn reset_ball(&mut self, profile: DifficultyProfile) {
        let center = surface_center(&self.config);
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(center, profile.ball_initial_speed, &mut self.rng);
        }
    }

    /// Zero scores, center paddles, serve
    pub fn reset_round(&mut self, profile: DifficultyProfile) {
        self.score.reset();
        let y = self.config.centered_paddle_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = y;
        }
        self.reset_ball(profile);
    }

    /// One playing tick: ball physics, opponent, then scoring
    pub fn step(&mut self, profile: DifficultyProfile) -> Option<PointOutcome> {
        crate::step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            profile.opponent_paddle_speed,
        )
    }

    pub fn move_player(&mut self, center_y: f32) {
        systems::apply_pointer(&mut self.world, &self.config, center_y);
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    /// Overwrite ball kinematics (tests, replays)
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Overwrite a paddle's top edge, clamped
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }
}

fn surface_center(config: &Config) -> Vec2 {
    Vec2::new(config.surface_width / 2.0, config.surface_height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, PointOutcome};

    fn medium() -> DifficultyProfile {
        Difficulty::Medium.profile()
    }

    fn sim() -> SimulationState {
        SimulationState::new(Config::new(), medium())
    }

    #[test]
    fn test_new_state_is_centered() {
        let sim = sim();
        let ball = sim.ball().expect("ball");
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel.x.abs(), 6.0);
        assert_eq!(sim.paddle(Side::Player).map(|p| p.y), Some(250.0));
        assert_eq!(sim.paddle(Side::Opponent).map(|p| p.y), Some(250.0));
    }

    #[test]
    fn test_reset_round_zeroes_scores_and_recenters() {
        let mut sim = sim();
        sim.score.player = 2;
        sim.score.opponent = 1;
        sim.set_paddle_y(Side::Player, 0.0);
        sim.set_paddle_y(Side::Opponent, 500.0);
        sim.set_ball(Vec2::new(12.0, 40.0), Vec2::new(-5.0, 1.0));

        sim.reset_round(Difficulty::Hard.profile());

        assert_eq!(sim.score, Score::new());
        assert_eq!(sim.paddle(Side::Player).map(|p| p.y), Some(250.0));
        assert_eq!(sim.paddle(Side::Opponent).map(|p| p.y), Some(250.0));
        let ball = sim.ball().expect("ball");
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel.x.abs(), 7.0, "Served at the new tier's speed");
    }

    #[test]
    fn test_reset_ball_keeps_score() {
        let mut sim = sim();
        sim.score.player = 2;
        sim.reset_ball(medium());
        assert_eq!(sim.score.player, 2);
    }

    #[test]
    fn test_step_moves_ball_one_unit() {
        let mut sim = sim();
        sim.set_ball(Vec2::new(400.0, 300.0), Vec2::new(-6.0, 0.0));

        assert_eq!(sim.step(medium()), None);

        let ball = sim.ball().expect("ball");
        assert_eq!(ball.pos, Vec2::new(394.0, 300.0));
    }

    #[test]
    fn test_step_reports_exit() {
        let mut sim = sim();
        sim.score.opponent = 2;
        sim.set_ball(Vec2::new(3.0, 40.0), Vec2::new(-6.0, 0.0));

        let outcome = sim.step(medium());

        assert_eq!(
            outcome,
            Some(PointOutcome::RoundOver {
                winner: Side::Opponent
            })
        );
        assert_eq!(sim.score.opponent, 3);
        assert_eq!(sim.events.point_for, Some(Side::Opponent));
    }

    #[test]
    fn test_paddles_stay_in_bounds() {
        let mut sim = sim();
        let max = sim.config.max_paddle_y();
        for tick in 0..2_000 {
            sim.move_player((tick as f32 * 37.0) % 900.0 - 150.0);
            if sim.step(medium()).is_some() {
                sim.reset_ball(medium());
            }
            for side in [Side::Player, Side::Opponent] {
                let y = sim.paddle(side).expect("paddle").y;
                assert!((0.0..=max).contains(&y), "{side:?} paddle out of bounds: {y}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = sim().ball().expect("ball");
        let b = sim().ball().expect("ball");
        assert_eq!(a.vel, b.vel);
    }
}
