//! Audio collaborator interface
//!
//! The core only announces cues. Playback belongs to the host and may fail
//! silently; nothing here reports back into the simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Side;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    /// Ball hits top or bottom wall
    WallHit,
    /// Ball hits a paddle
    PaddleHit,
    /// Ball left the surface
    PointScored,
    /// Round decided; hosts usually pick a victory or defeat sound by side
    RoundWon(Side),
    /// Countdown shows a new value
    CountdownBeep,
}

/// Fire-and-forget sink for cues and background music
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);

    /// Start background music. No-op if a track is already playing.
    fn start_loop(&mut self);

    /// Pause background music and rewind it. Idempotent.
    fn stop_loop(&mut self);
}

/// Sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: AudioCue) {}
    fn start_loop(&mut self) {}
    fn stop_loop(&mut self) {}
}

impl<T: AudioSink + ?Sized> AudioSink for Box<T> {
    fn play(&mut self, cue: AudioCue) {
        (**self).play(cue)
    }

    fn start_loop(&mut self) {
        (**self).start_loop()
    }

    fn stop_loop(&mut self) {
        (**self).stop_loop()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("no such track: {0}")]
    UnknownTrack(usize),
}

/// Backend that can loop one track of a fixed playlist at a time
pub trait TrackPlayer {
    fn is_playing(&self, track: usize) -> bool;
    fn play_looping(&mut self, track: usize) -> Result<(), AudioError>;
    /// Pause and rewind to the start
    fn stop(&mut self, track: usize) -> Result<(), AudioError>;
}

/// Round-robin background music over a fixed playlist.
///
/// The playlist only advances on a fresh start, never on a no-op start.
#[derive(Debug)]
pub struct MusicRotation<P> {
    player: P,
    track_count: usize,
    next_track: usize,
    current: Option<usize>,
}

impl<P: TrackPlayer> MusicRotation<P> {
    pub fn new(player: P, track_count: usize) -> Self {
        Self {
            player,
            track_count,
            next_track: 0,
            current: None,
        }
    }

    pub fn current_track(&self) -> Option<usize> {
        self.current
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn start_loop(&mut self) {
        if self.track_count == 0 {
            return;
        }
        if let Some(track) = self.current {
            if self.player.is_playing(track) {
                return;
            }
            if let Err(e) = self.player.stop(track) {
                log::debug!("music: failed to rewind track {track}: {e}");
            }
        }

        let track = self.next_track;
        self.current = Some(track);
        if let Err(e) = self.player.play_looping(track) {
            log::debug!("music: failed to start track {track}: {e}");
        }
        self.next_track = (track + 1) % self.track_count;
    }

    pub fn stop_loop(&mut self) {
        if let Some(track) = self.current {
            if let Err(e) = self.player.stop(track) {
                log::debug!("music: failed to stop track {track}: {e}");
            }
        }
    }
}

/// Full sink for a host: cues go to `cues`, background music to a
/// [`MusicRotation`]
pub struct GameAudio<C, P> {
    cues: C,
    music: MusicRotation<P>,
}

impl<C, P> GameAudio<C, P>
where
    C: FnMut(AudioCue),
    P: TrackPlayer,
{
    pub fn new(cues: C, music: MusicRotation<P>) -> Self {
        Self { cues, music }
    }

    pub fn music(&self) -> &MusicRotation<P> {
        &self.music
    }
}

impl<C, P> AudioSink for GameAudio<C, P>
where
    C: FnMut(AudioCue),
    P: TrackPlayer,
{
    fn play(&mut self, cue: AudioCue) {
        (self.cues)(cue)
    }

    fn start_loop(&mut self) {
        self.music.start_loop()
    }

    fn stop_loop(&mut self) {
        self.music.stop_loop()
    }
}
