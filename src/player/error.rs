//! Error types for player operations
//!
//! Each variant renders as the exact line shown to the user.

use std::fmt;

/// Broad classification of a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A video id or playlist name did not resolve
    NotFound,
    /// The argument itself is unusable (e.g. playlist name with whitespace)
    InvalidArgument,
    /// The request clashes with existing state (duplicates, removing an absent video)
    Conflict,
    /// The playback state does not allow the transition
    InvalidState,
    /// The operation exists but does nothing yet
    Unimplemented,
}

/// Playlist operation that failed, used as the message prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistAction {
    Add,
    Remove,
    Show,
    Clear,
    Delete,
}

impl fmt::Display for PlaylistAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self {
            PlaylistAction::Add => "Cannot add video to",
            PlaylistAction::Remove => "Cannot remove video from",
            PlaylistAction::Show => "Cannot show playlist",
            PlaylistAction::Clear => "Cannot clear playlist",
            PlaylistAction::Delete => "Cannot delete playlist",
        };
        f.write_str(prefix)
    }
}

/// Player operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("Cannot play video: Video does not exist")]
    VideoNotFound(String),

    #[error("Cannot stop video: No video is currently playing")]
    NothingToStop,

    #[error("No videos available")]
    NoVideosAvailable,

    #[error("No video is playing!")]
    NoVideoPlaying,

    #[error("Video already paused: {0}")]
    AlreadyPaused(String),

    #[error("Current video is not paused!")]
    NotPaused,

    #[error("Cannot create playlist: Playlist name cannot contain whitespace")]
    InvalidPlaylistName(String),

    #[error("Cannot create playlist: A playlist with the same name already exists")]
    PlaylistAlreadyExists(String),

    #[error("{action} {playlist}: Playlist does not exist")]
    PlaylistNotFound {
        action: PlaylistAction,
        playlist: String,
    },

    #[error("{action} {playlist}: Video does not exist")]
    PlaylistVideoNotFound {
        action: PlaylistAction,
        playlist: String,
    },

    #[error("Cannot add video to {playlist}: Video already added")]
    VideoAlreadyInPlaylist { playlist: String },

    #[error("Cannot remove video from {playlist}: Video is not in playlist")]
    VideoNotInPlaylist { playlist: String },

    #[error("{0} needs implementation")]
    NotImplemented(&'static str),
}

impl PlayerError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlayerError::VideoNotFound(_)
            | PlayerError::NoVideosAvailable
            | PlayerError::PlaylistNotFound { .. }
            | PlayerError::PlaylistVideoNotFound { .. } => ErrorKind::NotFound,
            PlayerError::InvalidPlaylistName(_) => ErrorKind::InvalidArgument,
            PlayerError::PlaylistAlreadyExists(_)
            | PlayerError::VideoAlreadyInPlaylist { .. }
            | PlayerError::VideoNotInPlaylist { .. } => ErrorKind::Conflict,
            PlayerError::NothingToStop
            | PlayerError::NoVideoPlaying
            | PlayerError::AlreadyPaused(_)
            | PlayerError::NotPaused => ErrorKind::InvalidState,
            PlayerError::NotImplemented(_) => ErrorKind::Unimplemented,
        }
    }
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_messages_carry_action_and_name() {
        let err = PlayerError::PlaylistNotFound {
            action: PlaylistAction::Add,
            playlist: "my_list".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot add video to my_list: Playlist does not exist"
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = PlayerError::PlaylistVideoNotFound {
            action: PlaylistAction::Remove,
            playlist: "my_list".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot remove video from my_list: Video does not exist"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(PlayerError::NotPaused.kind(), ErrorKind::InvalidState);
        assert_eq!(
            PlayerError::InvalidPlaylistName("a b".into()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            PlayerError::PlaylistAlreadyExists("a".into()).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            PlayerError::NotImplemented("flag_video").kind(),
            ErrorKind::Unimplemented
        );
        assert_eq!(
            PlayerError::NotImplemented("flag_video").to_string(),
            "flag_video needs implementation"
        );
    }
}
