use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::difficulty::Difficulty;
use crate::error::{Error, Result};
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub difficulty: Difficulty,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            difficulty: Difficulty::default(),
            seed: 12345,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Check that the surface exists and everything fits on it.
    pub fn validate(&self) -> Result<()> {
        let (w, h) = (self.surface_width, self.surface_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(Error::MissingSurface {
                width: w,
                height: h,
            });
        }

        for (what, value) in [
            ("paddle width", self.paddle_width),
            ("paddle height", self.paddle_height),
            ("ball radius", self.ball_radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidDimension { what, value });
            }
        }

        if self.paddle_height > h {
            return Err(Error::DoesNotFit {
                what: "paddle height",
                size: self.paddle_height,
                limit: h,
            });
        }
        let diameter = self.ball_radius * 2.0;
        if diameter > h || diameter > w {
            return Err(Error::DoesNotFit {
                what: "ball diameter",
                size: diameter,
                limit: w.min(h),
            });
        }
        if self.paddle_width * 2.0 >= w {
            return Err(Error::DoesNotFit {
                what: "paddle widths",
                size: self.paddle_width * 2.0,
                limit: w,
            });
        }
        Ok(())
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => 0.0,
            Side::Opponent => self.surface_width - self.paddle_width,
        }
    }

    /// Largest allowed paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        self.surface_height - self.paddle_height
    }

    /// Clamp paddle top edge to surface bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Top edge that vertically centers a paddle
    pub fn centered_paddle_y(&self) -> f32 {
        self.max_paddle_y() / 2.0
    }
}
