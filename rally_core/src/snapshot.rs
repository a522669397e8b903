//! Read-only view of the game for the renderer

use serde::{Deserialize, Serialize};

use crate::{Difficulty, RoundState};

/// What the countdown overlay should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownDisplay {
    Number(u8),
    Go,
}

impl CountdownDisplay {
    pub fn from_value(value: u8) -> Self {
        if value == 0 {
            CountdownDisplay::Go
        } else {
            CountdownDisplay::Number(value)
        }
    }
}

impl std::fmt::Display for CountdownDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountdownDisplay::Number(n) => write!(f, "{n}"),
            CountdownDisplay::Go => f.write_str("GO!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_radius: f32,
    pub player_paddle: PaddleView,
    pub opponent_paddle: PaddleView,
    pub score_player: u32,
    pub score_opponent: u32,
    pub player_label: String,
    pub opponent_label: String,
    pub state: RoundState,
    pub countdown: Option<CountdownDisplay>,
    /// Winner text, once the game-over screen should be visible
    pub banner: Option<String>,
    pub difficulty: Difficulty,
    pub player_name: String,
}
