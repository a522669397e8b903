//! Round State Machine
//!
//! The single transition table for the round lifecycle. Side effects of each
//! transition live in `round.rs`; this module only decides what is allowed.

use serde::{Deserialize, Serialize};

/// Round states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    Welcome,
    Countdown,
    Playing,
    Paused,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    Start,
    CountdownDone,
    PointScored,
    RoundWon,
    TogglePause,
    DifficultyChanged,
    PlayAgain,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: RoundState,
    pub to_state: RoundState,
    pub action: RoundAction,
}

/// Round Finite State Machine
#[derive(Debug, Clone)]
pub struct RoundFsm {
    state: RoundState,
}

impl RoundFsm {
    pub fn new() -> Self {
        Self {
            state: RoundState::Welcome,
        }
    }

    /// Get current state
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: RoundAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: RoundAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                log::debug!("round: {from_state:?} --{action:?}--> {next_state:?}");
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => {
                log::debug!("round: {action:?} ignored in {from_state:?}");
                TransitionResult {
                    success: false,
                    from_state,
                    to_state: from_state,
                    action,
                }
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: RoundAction) -> Option<RoundState> {
        use RoundAction as A;
        use RoundState as S;

        match (self.state, action) {
            // From Welcome
            (S::Welcome, A::Start) => Some(S::Countdown),
            (S::Welcome, A::DifficultyChanged) => Some(S::Welcome),

            // From Countdown
            (S::Countdown, A::CountdownDone) => Some(S::Playing),
            (S::Countdown, A::DifficultyChanged) => Some(S::Countdown),

            // From Playing
            (S::Playing, A::PointScored) => Some(S::Countdown),
            (S::Playing, A::RoundWon) => Some(S::GameOver),
            (S::Playing, A::TogglePause) => Some(S::Paused),
            (S::Playing, A::DifficultyChanged) => Some(S::Countdown),

            // From Paused: every resume re-runs the countdown
            (S::Paused, A::TogglePause) => Some(S::Countdown),
            (S::Paused, A::DifficultyChanged) => Some(S::Countdown),

            // From GameOver
            (S::GameOver, A::PlayAgain) => Some(S::Countdown),
            (S::GameOver, A::DifficultyChanged) => Some(S::GameOver),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if physics and the opponent should run
    pub fn is_playing(&self) -> bool {
        self.state == RoundState::Playing
    }

    pub fn is_counting_down(&self) -> bool {
        self.state == RoundState::Countdown
    }

    pub fn is_game_over(&self) -> bool {
        self.state == RoundState::GameOver
    }
}

impl Default for RoundFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = RoundFsm::new();
        assert_eq!(fsm.state(), RoundState::Welcome);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = RoundFsm::new();
        let result = fsm.transition(RoundAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, RoundState::Welcome);
        assert_eq!(fsm.state(), RoundState::Countdown);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = RoundFsm::new();
        let result = fsm.transition(RoundAction::RoundWon);
        assert!(!result.success);
        assert_eq!(result.to_state, RoundState::Welcome);
        assert_eq!(fsm.state(), RoundState::Welcome);
    }

    #[test]
    fn test_round_flow() {
        let mut fsm = RoundFsm::new();
        fsm.transition(RoundAction::Start);
        fsm.transition(RoundAction::CountdownDone);
        assert!(fsm.is_playing());
        fsm.transition(RoundAction::PointScored);
        assert!(fsm.is_counting_down());
        fsm.transition(RoundAction::CountdownDone);
        fsm.transition(RoundAction::RoundWon);
        assert!(fsm.is_game_over());
        fsm.transition(RoundAction::PlayAgain);
        assert_eq!(fsm.state(), RoundState::Countdown);
    }

    #[test]
    fn test_pause_resume_goes_through_countdown() {
        let mut fsm = RoundFsm::new();
        fsm.transition(RoundAction::Start);
        fsm.transition(RoundAction::CountdownDone);
        fsm.transition(RoundAction::TogglePause);
        assert_eq!(fsm.state(), RoundState::Paused);
        fsm.transition(RoundAction::TogglePause);
        assert_eq!(fsm.state(), RoundState::Countdown);
    }

    #[test]
    fn test_pause_ignored_during_countdown() {
        let mut fsm = RoundFsm::new();
        fsm.transition(RoundAction::Start);
        assert!(!fsm.can_transition(RoundAction::TogglePause));
    }

    #[test]
    fn test_game_over_only_leaves_on_play_again() {
        let mut fsm = RoundFsm::new();
        fsm.transition(RoundAction::Start);
        fsm.transition(RoundAction::CountdownDone);
        fsm.transition(RoundAction::RoundWon);
        for action in [
            RoundAction::Start,
            RoundAction::CountdownDone,
            RoundAction::PointScored,
            RoundAction::TogglePause,
            RoundAction::DifficultyChanged,
        ] {
            fsm.transition(action);
            assert_eq!(fsm.state(), RoundState::GameOver, "{action:?}");
        }
    }

    #[test]
    fn test_difficulty_change_restarts_active_rounds() {
        let mut fsm = RoundFsm::new();
        assert_eq!(
            fsm.transition(RoundAction::DifficultyChanged).to_state,
            RoundState::Welcome
        );
        fsm.transition(RoundAction::Start);
        fsm.transition(RoundAction::CountdownDone);
        assert_eq!(
            fsm.transition(RoundAction::DifficultyChanged).to_state,
            RoundState::Countdown
        );
    }
}
