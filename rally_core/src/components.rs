use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which paddle a component belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled, left edge
    Player,
    /// Computer-controlled, right edge
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to the surface
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // Units per tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve from `center`: random horizontal direction at full speed,
    /// vertical speed anywhere in `[-speed, speed]`.
    pub fn serve(&mut self, center: Vec2, speed: f32, rng: &mut crate::GameRng) {
        self.pos = center;
        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vy = if speed > 0.0 {
            rng.0.gen_range(-speed..=speed)
        } else {
            0.0
        };
        self.vel = Vec2::new(dir * speed, vy);
    }
}
