use std::time::Duration;

/// Game tuning parameters for the rally core
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const PADDLE_SPIN_FACTOR: f32 = 0.35; // vy per unit of off-center hit

    // Opponent
    pub const OPPONENT_DEAD_ZONE: f32 = 35.0;

    // Score
    pub const MIN_WINNING_SCORE: u32 = 3;
    pub const WIN_MARGIN: u32 = 2;

    // Countdown
    pub const COUNTDOWN_START: u8 = 3;
    pub const COUNTDOWN_BEAT: Duration = Duration::from_millis(1000);
    pub const COUNTDOWN_DURATION: Duration = Duration::from_millis(3000);
    pub const GAME_OVER_REVEAL_DELAY: Duration = Duration::from_millis(500);

    // Names
    pub const DEFAULT_PLAYER_NAME: &'static str = "Player";
    pub const OPPONENT_NAME: &'static str = "AI";
}
