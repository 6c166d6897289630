//! Video Player - in-memory video catalog with playback and playlists
//!
//! A command-driven player: one current video that can be played, paused,
//! resumed and stopped, plus case-insensitive named playlists built from a
//! read-only catalog.

pub mod catalog;
pub mod command;
pub mod config;
pub mod model;
pub mod player;

pub use command::{Command, Session};
pub use config::PlayerConfig;
pub use player::{Output, PlayerError, VideoPlayer};
