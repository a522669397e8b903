use crate::{Ball, Config, Events, Params, Score, Side};
use hecs::World;

/// What a scoring event means for the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOutcome {
    /// Point counted, no winner yet
    ServeAgain { scorer: Side },
    /// Point counted and it decided the round
    RoundOver { winner: Side },
}

/// Check if the ball left the surface. Records the side that wins the point.
pub fn check_exit(world: &World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query::<&Ball>().iter() {
        if ball.pos.x < 0.0 {
            events.point_for = Some(Side::Opponent);
        } else if ball.pos.x > config.surface_width {
            events.point_for = Some(Side::Player);
        }
    }
}

/// Apply this tick's point, if any, and evaluate the win-by-two rule
pub fn award_point(score: &mut Score, events: &Events) -> Option<PointOutcome> {
    let scorer = events.point_for?;
    score.increment(scorer);

    if score.is_win(scorer, Params::MIN_WINNING_SCORE, Params::WIN_MARGIN) {
        Some(PointOutcome::RoundOver { winner: scorer })
    } else {
        Some(PointOutcome::ServeAgain { scorer })
    }
}
