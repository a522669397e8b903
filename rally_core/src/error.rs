use thiserror::Error;

/// Errors raised while setting up the game core.
///
/// Nothing during play returns an error: pointer positions and difficulty
/// choices are clamped or defaulted instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("render surface missing or empty: {width}x{height}")]
    MissingSurface { width: f32, height: f32 },
    #[error("{what} must be positive and finite, got {value}")]
    InvalidDimension { what: &'static str, value: f32 },
    #[error("{what} ({size}) does not fit the surface ({limit})")]
    DoesNotFit {
        what: &'static str,
        size: f32,
        limit: f32,
    },
    #[error("invalid config: {0}")]
    Config(String),
}

/// Result type for game core operations.
pub type Result<T> = std::result::Result<T, Error>;
