//! Data model for the video catalog
//!
//! Videos are immutable once loaded; playlists only ever hold copies
//! of catalog videos.

mod library;
mod playlist;
mod video;

pub use library::VideoLibrary;
pub use playlist::Playlist;
pub use video::Video;
