//! Video player controller
//!
//! Orchestrates playback and playlists against the read-only catalog and
//! turns every operation into output lines or a [`PlayerError`].

use super::error::{PlayerError, PlaylistAction, Result};
use super::output::Output;
use super::registry::PlaylistRegistry;
use super::state::{PlaybackState, PlaybackStatus};
use crate::model::{Video, VideoLibrary};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Command-driven video player
pub struct VideoPlayer {
    library: VideoLibrary,
    playback: PlaybackState,
    playlists: PlaylistRegistry,
    rng: StdRng,
}

impl VideoPlayer {
    /// Create a stopped player over `library`, with an entropy-seeded RNG
    pub fn new(library: VideoLibrary) -> Self {
        Self::with_rng(library, StdRng::from_entropy())
    }

    /// Create a player whose random picks are reproducible
    pub fn with_seed(library: VideoLibrary, seed: u64) -> Self {
        Self::with_rng(library, StdRng::seed_from_u64(seed))
    }

    fn with_rng(library: VideoLibrary, rng: StdRng) -> Self {
        Self {
            library,
            playback: PlaybackState::new(),
            playlists: PlaylistRegistry::new(),
            rng,
        }
    }

    pub fn library(&self) -> &VideoLibrary {
        &self.library
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn playlists(&self) -> &PlaylistRegistry {
        &self.playlists
    }

    // ----- catalog -----

    pub fn number_of_videos(&self) -> Result<Output> {
        Ok(Output::line(format!(
            "{} videos in the library",
            self.library.video_count()
        )))
    }

    pub fn show_all_videos(&self) -> Result<Output> {
        let mut output = Output::line("Here's a list of all available videos:");
        for video in self.library.videos_by_title() {
            output.push(format!("\t{video}"));
        }
        Ok(output)
    }

    // ----- playback -----

    pub fn play_video(&mut self, video_id: &str) -> Result<Output> {
        let video = self
            .library
            .get_video(video_id)
            .cloned()
            .ok_or_else(|| PlayerError::VideoNotFound(video_id.to_string()))?;
        Ok(self.start(video))
    }

    pub fn stop_video(&mut self) -> Result<Output> {
        let stopped = self.playback.stop()?;
        log::debug!("Stopped {:?}", stopped.id);
        Ok(Output::line(format!("Stopping video: {}", stopped.title)))
    }

    pub fn play_random_video(&mut self) -> Result<Output> {
        let video = self
            .library
            .all_videos()
            .choose(&mut self.rng)
            .cloned()
            .ok_or(PlayerError::NoVideosAvailable)?;
        Ok(self.start(video))
    }

    pub fn pause_video(&mut self) -> Result<Output> {
        let video = self.playback.pause()?;
        Ok(Output::line(format!("Pausing video: {}", video.title)))
    }

    pub fn continue_video(&mut self) -> Result<Output> {
        let video = self.playback.resume()?;
        Ok(Output::line(format!("Continuing video: {}", video.title)))
    }

    pub fn show_playing(&self) -> Result<Output> {
        let line = match (self.playback.current(), self.playback.status()) {
            (Some(video), PlaybackStatus::Paused) => format!("Currently playing: {video} - PAUSED"),
            (Some(video), _) => format!("Currently playing: {video}"),
            (None, _) => "No video is currently playing".to_string(),
        };
        Ok(Output::line(line))
    }

    /// Stop whatever is current, then play `video`
    fn start(&mut self, video: Video) -> Output {
        let mut output = Output::new();
        let title = video.title.clone();
        log::debug!("Starting {:?}", video.id);

        if let Some(previous) = self.playback.start(video) {
            output.push(format!("Stopping video: {}", previous.title));
        }
        output.push(format!("Playing video: {title}"));
        output
    }

    // ----- playlists -----

    pub fn create_playlist(&mut self, playlist_name: &str) -> Result<Output> {
        let playlist = self.playlists.create(playlist_name)?;
        Ok(Output::line(format!(
            "Successfully created new playlist: {}",
            playlist.name
        )))
    }

    pub fn add_to_playlist(&mut self, playlist_name: &str, video_id: &str) -> Result<Output> {
        let video = self.resolve(PlaylistAction::Add, playlist_name, video_id)?;
        let playlist = self.playlists.add_video(playlist_name, &video)?;
        Ok(Output::line(format!(
            "Added video to {}: {}",
            playlist.name, video.title
        )))
    }

    pub fn show_all_playlists(&self) -> Result<Output> {
        if self.playlists.is_empty() {
            return Ok(Output::line("No playlists exist yet"));
        }

        let mut output = Output::line("Showing all playlists:");
        for playlist in self.playlists.playlists() {
            output.push(format!("\t{}", playlist.name));
        }
        Ok(output)
    }

    pub fn show_playlist(&self, playlist_name: &str) -> Result<Output> {
        let playlist = self.playlists.require(PlaylistAction::Show, playlist_name)?;

        let mut output = Output::line(format!("Showing playlist: {}", playlist.name));
        if playlist.is_empty() {
            output.push("\tNo videos here yet");
        }
        for video in playlist.videos() {
            output.push(format!("\t{video}"));
        }
        Ok(output)
    }

    pub fn remove_from_playlist(&mut self, playlist_name: &str, video_id: &str) -> Result<Output> {
        let video = self.resolve(PlaylistAction::Remove, playlist_name, video_id)?;
        let playlist = self.playlists.remove_video(playlist_name, &video)?;
        Ok(Output::line(format!(
            "Removed video from {}: {}",
            playlist.name, video.title
        )))
    }

    pub fn clear_playlist(&mut self, playlist_name: &str) -> Result<Output> {
        let playlist = self.playlists.clear(playlist_name)?;
        Ok(Output::line(format!(
            "Successfully removed all videos from {}",
            playlist.name
        )))
    }

    pub fn delete_playlist(&mut self, playlist_name: &str) -> Result<Output> {
        let playlist = self.playlists.delete(playlist_name)?;
        Ok(Output::line(format!("Deleted playlist: {}", playlist.name)))
    }

    /// Check the playlist first, then the video id
    fn resolve(&self, action: PlaylistAction, playlist_name: &str, video_id: &str) -> Result<Video> {
        let playlist = self.playlists.require(action, playlist_name)?;
        self.library
            .get_video(video_id)
            .cloned()
            .ok_or_else(|| PlayerError::PlaylistVideoNotFound {
                action,
                playlist: playlist.name.clone(),
            })
    }

    // ----- not implemented yet -----

    pub fn search_videos(&self, _search_term: &str) -> Result<Output> {
        Err(PlayerError::NotImplemented("search_videos"))
    }

    pub fn search_videos_tag(&self, _video_tag: &str) -> Result<Output> {
        Err(PlayerError::NotImplemented("search_videos_tag"))
    }

    pub fn flag_video(&mut self, _video_id: &str, _flag_reason: Option<&str>) -> Result<Output> {
        Err(PlayerError::NotImplemented("flag_video"))
    }

    pub fn allow_video(&mut self, _video_id: &str) -> Result<Output> {
        Err(PlayerError::NotImplemented("allow_video"))
    }
}
