//! Playback and playlist control
//!
//! [`VideoPlayer`] owns the playback state and the playlist registry; both
//! are only ever changed through its operations.

mod controller;
mod error;
mod output;
mod registry;
mod state;

pub use controller::VideoPlayer;
pub use error::{ErrorKind, PlayerError, PlaylistAction, Result};
pub use output::Output;
pub use registry::PlaylistRegistry;
pub use state::{PlaybackState, PlaybackStatus};
