use super::Video;
use serde::{Deserialize, Serialize};

/// Represents a named playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, with the casing given at creation
    pub name: String,

    /// Videos in insertion order, never twice the same id
    videos: Vec<Video>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            videos: Vec::new(),
        }
    }

    /// Registry key for a playlist name
    pub fn key_for(name: &str) -> String {
        name.to_lowercase()
    }

    /// Registry key of this playlist
    pub fn key(&self) -> String {
        Self::key_for(&self.name)
    }

    /// Whether a video with the same id is already in this playlist
    pub fn contains(&self, video: &Video) -> bool {
        self.videos.iter().any(|v| v == video)
    }

    /// Append a video, returning false if it was already present
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.contains(&video) {
            return false;
        }
        self.videos.push(video);
        true
    }

    /// Remove a video, returning it if it was present
    pub fn remove_video(&mut self, video: &Video) -> Option<Video> {
        let position = self.videos.iter().position(|v| v == video)?;
        Some(self.videos.remove(position))
    }

    /// Drop every video, keeping the playlist itself
    pub fn clear(&mut self) {
        self.videos.clear();
    }

    /// Videos in insertion order
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
