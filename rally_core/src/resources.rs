use std::time::Duration;

use crate::components::Side;

/// Virtual real-time clock. Only advanced by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    pub now: Duration, // Total elapsed real time
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.now += elapsed;
    }
}

/// Score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when `side` has reached the minimum score and leads by the margin
    pub fn is_win(&self, side: Side, min_score: u32, margin: u32) -> bool {
        let mine = self.get(side);
        let theirs = self.get(side.other());
        mine >= min_score && mine >= theirs + margin
    }

    pub fn has_winner(&self, min_score: u32, margin: u32) -> Option<Side> {
        [Side::Player, Side::Opponent]
            .into_iter()
            .find(|&side| self.is_win(side, min_score, margin))
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Motion events recorded during one physics step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    /// Side that won the point when the ball left the surface
    pub point_for: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.point_for = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;

    fn score(player: u32, opponent: u32) -> Score {
        Score { player, opponent }
    }

    #[test]
    fn test_score_increment() {
        let mut s = Score::new();
        s.increment(Side::Player);
        s.increment(Side::Opponent);
        s.increment(Side::Opponent);
        assert_eq!(s.player, 1);
        assert_eq!(s.opponent, 2);
    }

    #[test]
    fn test_win_by_two_with_minimum() {
        let (min, margin) = (Params::MIN_WINNING_SCORE, Params::WIN_MARGIN);
        for (leader, trailer) in [(3, 0), (3, 1), (4, 2), (5, 3)] {
            assert!(
                score(leader, trailer).is_win(Side::Player, min, margin),
                "{leader}-{trailer} should be a win"
            );
            assert_eq!(
                score(trailer, leader).has_winner(min, margin),
                Some(Side::Opponent)
            );
        }
        for (leader, trailer) in [(2, 0), (3, 2), (4, 3), (0, 0)] {
            assert_eq!(
                score(leader, trailer).has_winner(min, margin),
                None,
                "{leader}-{trailer} should not be a win"
            );
        }
    }

    #[test]
    fn test_trailing_side_never_wins() {
        assert!(!score(1, 4).is_win(Side::Player, 3, 2));
    }

    #[test]
    fn test_score_reset() {
        let mut s = score(4, 2);
        s.reset();
        assert_eq!(s, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            ball_hit_wall: true,
            ball_hit_paddle: true,
            point_for: Some(Side::Player),
        };
        events.clear();
        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_time_advance() {
        let mut time = Time::new();
        time.advance(Duration::from_millis(16));
        time.advance(Duration::from_millis(17));
        assert_eq!(time.now, Duration::from_millis(33));
    }
}
