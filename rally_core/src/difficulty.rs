use serde::{Deserialize, Serialize};

/// Difficulty tier selected by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Speeds that depend on the selected tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub ball_initial_speed: f32,
    pub opponent_paddle_speed: f32,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                ball_initial_speed: 5.0,
                opponent_paddle_speed: 3.0,
            },
            Difficulty::Medium => DifficultyProfile {
                ball_initial_speed: 6.0,
                opponent_paddle_speed: 5.0,
            },
            Difficulty::Hard => DifficultyProfile {
                ball_initial_speed: 7.0,
                opponent_paddle_speed: 7.0,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a tier name from a UI selector. Unknown names fall back to medium.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            "medium" | "med" => Difficulty::Medium,
            other => {
                log::debug!("unknown difficulty {other:?}, using medium");
                Difficulty::Medium
            }
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_match_tiers() {
        assert_eq!(Difficulty::Easy.profile().ball_initial_speed, 5.0);
        assert_eq!(Difficulty::Easy.profile().opponent_paddle_speed, 3.0);
        assert_eq!(Difficulty::Medium.profile().ball_initial_speed, 6.0);
        assert_eq!(Difficulty::Medium.profile().opponent_paddle_speed, 5.0);
        assert_eq!(Difficulty::Hard.profile().ball_initial_speed, 7.0);
        assert_eq!(Difficulty::Hard.profile().opponent_paddle_speed, 7.0);
    }

    #[test]
    fn test_harder_tiers_are_faster() {
        for pair in Difficulty::ALL.windows(2) {
            let (lo, hi) = (pair[0].profile(), pair[1].profile());
            assert!(hi.ball_initial_speed > lo.ball_initial_speed);
            assert!(hi.opponent_paddle_speed > lo.opponent_paddle_speed);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name(" HARD "), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("medium"), Difficulty::Medium);
        assert_eq!(
            Difficulty::from_name("nightmare"),
            Difficulty::Medium,
            "Unknown tiers default to medium"
        );
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
