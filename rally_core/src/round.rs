//! Round driver
//!
//! Owns the simulation, the transition table and the timers. The host calls
//! [`RoundStateMachine::tick`] once per display frame and
//! [`RoundStateMachine::advance_clock`] with real elapsed time; countdown
//! timers only fire from the latter.

use std::time::Duration;

use crate::error::Result;
use crate::snapshot::{CountdownDisplay, PaddleView, Snapshot};
use crate::timers::{Fired, TimerId, TimerKind, TimerQueue};
use crate::{
    AudioCue, AudioSink, Config, Difficulty, Params, PointOutcome, RoundAction, RoundFsm,
    RoundState, Score, SilentAudio, SimulationState, Side, Time, TransitionResult,
};

/// Commands from the control surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start(String),
    PlayAgain,
    TogglePause,
    SetDifficulty(Difficulty),
}

#[derive(Debug, Clone, Copy)]
struct CountdownTimers {
    beat: TimerId,
    end: TimerId,
}

pub struct RoundStateMachine<A: AudioSink = SilentAudio> {
    sim: SimulationState,
    fsm: RoundFsm,
    time: Time,
    timers: TimerQueue,
    countdown: Option<CountdownTimers>,
    countdown_value: u8,
    /// Countdown just ended and no playing tick has run yet
    go_showing: bool,
    reveal: Option<TimerId>,
    banner_visible: bool,
    winner: Option<Side>,
    difficulty: Difficulty,
    player_name: String,
    audio: A,
    ticks: u64,
}

impl RoundStateMachine<SilentAudio> {
    pub fn silent(config: Config) -> Result<Self> {
        Self::new(config, SilentAudio)
    }
}

impl<A: AudioSink> RoundStateMachine<A> {
    /// Validate the surface and build the game in the Welcome state
    pub fn new(config: Config, audio: A) -> Result<Self> {
        config.validate()?;

        let difficulty = config.difficulty;
        log::info!(
            "rally: {}x{} surface, {difficulty} difficulty",
            config.surface_width,
            config.surface_height
        );
        let sim = SimulationState::new(config, difficulty.profile());

        Ok(Self {
            sim,
            fsm: RoundFsm::new(),
            time: Time::new(),
            timers: TimerQueue::new(),
            countdown: None,
            countdown_value: Params::COUNTDOWN_START,
            go_showing: false,
            reveal: None,
            banner_visible: false,
            winner: None,
            difficulty,
            player_name: Params::DEFAULT_PLAYER_NAME.to_string(),
            audio,
            ticks: 0,
        })
    }

    pub fn handle(&mut self, command: Command) -> TransitionResult {
        match command {
            Command::Start(name) => self.start(&name),
            Command::PlayAgain => self.play_again(),
            Command::TogglePause => self.toggle_pause(),
            Command::SetDifficulty(difficulty) => self.set_difficulty(difficulty),
        }
    }

    /// Leave the welcome screen and begin a round
    pub fn start(&mut self, name: &str) -> TransitionResult {
        let result = self.fsm.transition(RoundAction::Start);
        if result.success {
            let name = name.trim();
            self.player_name = if name.is_empty() {
                Params::DEFAULT_PLAYER_NAME.to_string()
            } else {
                name.to_string()
            };
            self.begin_round();
        }
        result
    }

    pub fn play_again(&mut self) -> TransitionResult {
        let result = self.fsm.transition(RoundAction::PlayAgain);
        if result.success {
            self.begin_round();
        }
        result
    }

    /// Pause while playing, or resume through a fresh countdown.
    /// Ignored during a countdown.
    pub fn toggle_pause(&mut self) -> TransitionResult {
        let result = self.fsm.transition(RoundAction::TogglePause);
        if result.success {
            match result.to_state {
                RoundState::Paused => {
                    self.cancel_countdown();
                    self.audio.stop_loop();
                }
                RoundState::Countdown => self.start_countdown(),
                _ => {}
            }
        }
        result
    }

    /// Switch tier. Active rounds restart from a countdown; otherwise only
    /// the board is reset.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> TransitionResult {
        let result = self.fsm.transition(RoundAction::DifficultyChanged);
        if result.success {
            log::info!("rally: difficulty {} -> {difficulty}", self.difficulty);
            self.difficulty = difficulty;
            self.sim.reset_round(difficulty.profile());
            if result.to_state == RoundState::Countdown {
                self.start_countdown();
            }
        }
        result
    }

    /// Pointer moved to `center_y` in surface coordinates
    pub fn pointer_moved(&mut self, center_y: f32) {
        if self.fsm.is_playing() {
            self.sim.move_player(center_y);
        }
    }

    /// One display frame. Only does work while playing.
    pub fn tick(&mut self) -> Option<PointOutcome> {
        if !self.fsm.is_playing() {
            return None;
        }
        self.ticks += 1;
        self.go_showing = false;

        let outcome = self.sim.step(self.difficulty.profile());

        if self.sim.events.ball_hit_wall {
            self.audio.play(AudioCue::WallHit);
        }
        if self.sim.events.ball_hit_paddle {
            self.audio.play(AudioCue::PaddleHit);
        }

        match outcome {
            Some(PointOutcome::ServeAgain { scorer }) => {
                self.audio.play(AudioCue::PointScored);
                log::debug!("rally: point {scorer:?}, score {:?}", self.sim.score);
                if self.fsm.transition(RoundAction::PointScored).success {
                    self.sim.reset_ball(self.difficulty.profile());
                    self.start_countdown();
                }
            }
            Some(PointOutcome::RoundOver { winner }) => {
                self.audio.play(AudioCue::PointScored);
                if self.fsm.transition(RoundAction::RoundWon).success {
                    self.finish_round(winner);
                }
            }
            None => {}
        }

        outcome
    }

    /// Advance real time, firing due timers in order. Each timer runs with
    /// the clock at its own deadline.
    ///
    /// Returns the countdown values shown along the way, so a host that
    /// steps in large increments still sees the final "GO".
    pub fn advance_clock(&mut self, elapsed: Duration) -> Vec<CountdownDisplay> {
        let target = self.time.now.saturating_add(elapsed);
        let mut shown = Vec::new();
        while let Some(fired) = self.timers.pop_due(target) {
            self.time.now = self.time.now.max(fired.deadline);
            shown.extend(self.on_timer(fired));
        }
        self.time.now = target;
        shown
    }

    /// Advance the clock, then run one tick
    pub fn frame(&mut self, elapsed: Duration) -> Option<PointOutcome> {
        self.advance_clock(elapsed);
        self.tick()
    }

    fn on_timer(&mut self, fired: Fired) -> Option<CountdownDisplay> {
        match fired.kind {
            TimerKind::CountdownBeat => {
                self.countdown_value = self.countdown_value.saturating_sub(1);
                log::debug!("rally: countdown {}", self.countdown_value);
                self.audio.play(AudioCue::CountdownBeep);
                return Some(CountdownDisplay::from_value(self.countdown_value));
            }
            TimerKind::CountdownEnd => {
                self.cancel_countdown();
                if self.fsm.transition(RoundAction::CountdownDone).success {
                    self.go_showing = self.countdown_value == 0;
                    self.audio.start_loop();
                }
            }
            TimerKind::RevealGameOver => {
                self.reveal = None;
                self.banner_visible = true;
            }
        }
        None
    }

    fn begin_round(&mut self) {
        self.winner = None;
        self.banner_visible = false;
        if let Some(id) = self.reveal.take() {
            self.timers.cancel(id);
        }
        self.sim.reset_round(self.difficulty.profile());
        log::info!(
            "rally: round starts for {} on {}",
            self.player_name,
            self.difficulty
        );
        self.audio.start_loop();
        self.start_countdown();
    }

    fn finish_round(&mut self, winner: Side) {
        self.cancel_countdown();
        self.winner = Some(winner);
        self.audio.stop_loop();
        self.audio.play(AudioCue::RoundWon(winner));
        self.reveal = Some(self.timers.schedule_once(
            self.time.now,
            Params::GAME_OVER_REVEAL_DELAY,
            TimerKind::RevealGameOver,
        ));
        log::info!(
            "rally: {} after {} ticks, {}-{}",
            self.winner_message().unwrap_or_default(),
            self.ticks,
            self.sim.score.player,
            self.sim.score.opponent
        );
    }

    /// Cancel any countdown in flight, then schedule a new one
    fn start_countdown(&mut self) {
        self.cancel_countdown();
        let now = self.time.now;
        let beat = self
            .timers
            .schedule_every(now, Params::COUNTDOWN_BEAT, TimerKind::CountdownBeat);
        let end = self
            .timers
            .schedule_once(now, Params::COUNTDOWN_DURATION, TimerKind::CountdownEnd);
        self.countdown = Some(CountdownTimers { beat, end });
        self.countdown_value = Params::COUNTDOWN_START;
        self.audio.play(AudioCue::CountdownBeep);
    }

    fn cancel_countdown(&mut self) {
        if let Some(timers) = self.countdown.take() {
            self.timers.cancel(timers.beat);
            self.timers.cancel(timers.end);
        }
    }

    pub fn state(&self) -> RoundState {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.sim.score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn winner_message(&self) -> Option<String> {
        self.winner.map(|side| match side {
            Side::Player => format!("{} Wins!", self.player_name),
            Side::Opponent => format!("{} Wins!", Params::OPPONENT_NAME),
        })
    }

    /// Countdown value, only while counting down
    pub fn countdown_value(&self) -> Option<u8> {
        self.fsm.is_counting_down().then_some(self.countdown_value)
    }

    /// What the countdown overlay shows. "GO" stays up from the end of the
    /// countdown until the first playing tick.
    pub fn countdown_display(&self) -> Option<CountdownDisplay> {
        if self.go_showing && self.fsm.is_playing() {
            return Some(CountdownDisplay::Go);
        }
        self.countdown_value().map(CountdownDisplay::from_value)
    }

    pub fn now(&self) -> Duration {
        self.time.now
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn simulation(&self) -> &SimulationState {
        &self.sim
    }

    /// Direct access for hosts that stage positions (tests, replays)
    pub fn simulation_mut(&mut self) -> &mut SimulationState {
        &mut self.sim
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn snapshot(&self) -> Snapshot {
        let config = &self.sim.config;
        let paddle_view = |side: Side| PaddleView {
            x: config.paddle_x(side),
            y: self
                .sim
                .paddle(side)
                .map_or_else(|| config.centered_paddle_y(), |p| p.y),
            width: config.paddle_width,
            height: config.paddle_height,
        };
        let (ball_x, ball_y) = self
            .sim
            .ball()
            .map_or((config.surface_width / 2.0, config.surface_height / 2.0), |b| {
                (b.pos.x, b.pos.y)
            });
        let score = self.sim.score;

        Snapshot {
            ball_x,
            ball_y,
            ball_radius: config.ball_radius,
            player_paddle: paddle_view(Side::Player),
            opponent_paddle: paddle_view(Side::Opponent),
            score_player: score.player,
            score_opponent: score.opponent,
            player_label: format!("{}: {}", self.player_name, score.player),
            opponent_label: format!("{}: {}", Params::OPPONENT_NAME, score.opponent),
            state: self.state(),
            countdown: self.countdown_display(),
            banner: if self.banner_visible {
                self.winner_message()
            } else {
                None
            },
            difficulty: self.difficulty,
            player_name: self.player_name.clone(),
        }
    }
}
