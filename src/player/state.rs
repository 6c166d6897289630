//! Playback state machine
//!
//! ```text
//!            start(v)              pause()
//! STOPPED ------------> PLAYING ------------> PAUSED
//!    ^                   ^   |                 |  |
//!    |      stop()       |   +--- resume() ----+  |
//!    +-------------------+------------------------+
//! ```
//!
//! `start` from PLAYING or PAUSED replaces the current video.

use super::error::{PlayerError, Result};
use crate::model::Video;

/// Observable playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Stopped,
    Playing,
    Paused,
}

/// Current video and its play/pause flag
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    current: Option<Video>,
    is_playing: bool,
}

impl PlaybackState {
    /// A stopped player
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PlaybackStatus {
        match (&self.current, self.is_playing) {
            (None, _) => PlaybackStatus::Stopped,
            (Some(_), true) => PlaybackStatus::Playing,
            (Some(_), false) => PlaybackStatus::Paused,
        }
    }

    pub fn current(&self) -> Option<&Video> {
        self.current.as_ref()
    }

    /// Make `video` current and playing
    ///
    /// Returns the video that was current before, if any.
    pub fn start(&mut self, video: Video) -> Option<Video> {
        self.is_playing = true;
        self.current.replace(video)
    }

    /// Clear the current video, returning it
    pub fn stop(&mut self) -> Result<Video> {
        self.is_playing = false;
        self.current.take().ok_or(PlayerError::NothingToStop)
    }

    pub fn pause(&mut self) -> Result<&Video> {
        match self.current {
            None => Err(PlayerError::NoVideoPlaying),
            Some(ref video) if !self.is_playing => Err(PlayerError::AlreadyPaused(video.title.clone())),
            Some(ref video) => {
                self.is_playing = false;
                Ok(video)
            }
        }
    }

    pub fn resume(&mut self) -> Result<&Video> {
        match self.current {
            None => Err(PlayerError::NoVideoPlaying),
            Some(_) if self.is_playing => Err(PlayerError::NotPaused),
            Some(ref video) => {
                self.is_playing = true;
                Ok(video)
            }
        }
    }
}
