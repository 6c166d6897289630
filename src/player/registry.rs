//! Playlist registry keyed by lowercased playlist name

use super::error::{PlayerError, PlaylistAction, Result};
use crate::model::{Playlist, Video};
use std::collections::BTreeMap;

/// All playlists, looked up case-insensitively
///
/// Iteration follows the lowercased key, so listings come out sorted.
#[derive(Debug, Clone, Default)]
pub struct PlaylistRegistry {
    playlists: BTreeMap<String, Playlist>,
}

impl PlaylistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new empty playlist
    pub fn create(&mut self, name: &str) -> Result<&Playlist> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(PlayerError::InvalidPlaylistName(name.to_string()));
        }

        let key = Playlist::key_for(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::PlaylistAlreadyExists(name.to_string()));
        }

        log::debug!("Creating playlist {:?} (key {:?})", name, key);
        Ok(self
            .playlists
            .entry(key)
            .or_insert_with(|| Playlist::new(name.to_string())))
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&Playlist::key_for(name))
    }

    /// Look up a playlist, failing with the given action's message
    pub fn require(&self, action: PlaylistAction, name: &str) -> Result<&Playlist> {
        self.get(name).ok_or_else(|| PlayerError::PlaylistNotFound {
            action,
            playlist: name.to_string(),
        })
    }

    fn require_mut(&mut self, action: PlaylistAction, name: &str) -> Result<&mut Playlist> {
        self.playlists
            .get_mut(&Playlist::key_for(name))
            .ok_or_else(|| PlayerError::PlaylistNotFound {
                action,
                playlist: name.to_string(),
            })
    }

    /// Append a video to the end of a playlist
    pub fn add_video(&mut self, name: &str, video: &Video) -> Result<&Playlist> {
        let playlist = self.require_mut(PlaylistAction::Add, name)?;
        if !playlist.add_video(video.clone()) {
            return Err(PlayerError::VideoAlreadyInPlaylist {
                playlist: playlist.name.clone(),
            });
        }
        Ok(playlist)
    }

    /// Remove a video from a playlist
    pub fn remove_video(&mut self, name: &str, video: &Video) -> Result<&Playlist> {
        let playlist = self.require_mut(PlaylistAction::Remove, name)?;
        if playlist.remove_video(video).is_none() {
            return Err(PlayerError::VideoNotInPlaylist {
                playlist: playlist.name.clone(),
            });
        }
        Ok(playlist)
    }

    /// Empty a playlist in place
    pub fn clear(&mut self, name: &str) -> Result<&Playlist> {
        let playlist = self.require_mut(PlaylistAction::Clear, name)?;
        playlist.clear();
        Ok(playlist)
    }

    /// Unregister a playlist, returning it
    pub fn delete(&mut self, name: &str) -> Result<Playlist> {
        self.playlists
            .remove(&Playlist::key_for(name))
            .ok_or_else(|| PlayerError::PlaylistNotFound {
                action: PlaylistAction::Delete,
                playlist: name.to_string(),
            })
    }

    /// Playlists sorted by lowercased name
    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video::new(id, format!("Title {id}"), Vec::new())
    }

    #[test]
    fn test_create_is_case_insensitive() {
        let mut registry = PlaylistRegistry::new();
        assert_eq!(registry.create("My_Playlist").unwrap().name, "My_Playlist");
        assert_eq!(
            registry.create("my_playlist").unwrap_err(),
            PlayerError::PlaylistAlreadyExists("my_playlist".to_string())
        );
        assert_eq!(registry.get("MY_PLAYLIST").unwrap().name, "My_Playlist");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_rejects_whitespace() {
        let mut registry = PlaylistRegistry::new();
        for name in ["My Playlist", "tab\tname", ""] {
            assert_eq!(
                registry.create(name).unwrap_err(),
                PlayerError::InvalidPlaylistName(name.to_string())
            );
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_and_remove() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Mix").unwrap();

        registry.add_video("mix", &video("a")).unwrap();
        assert_eq!(
            registry.add_video("MIX", &video("a")).unwrap_err(),
            PlayerError::VideoAlreadyInPlaylist {
                playlist: "Mix".to_string()
            }
        );

        assert!(registry.remove_video("mix", &video("a")).unwrap().is_empty());
        assert_eq!(
            registry.remove_video("mix", &video("a")).unwrap_err(),
            PlayerError::VideoNotInPlaylist {
                playlist: "Mix".to_string()
            }
        );
    }

    #[test]
    fn test_missing_playlist_errors_use_given_name() {
        let mut registry = PlaylistRegistry::new();
        assert_eq!(
            registry.clear("Ghost").unwrap_err(),
            PlayerError::PlaylistNotFound {
                action: PlaylistAction::Clear,
                playlist: "Ghost".to_string()
            }
        );
        assert_eq!(
            registry.delete("Ghost").unwrap_err().to_string(),
            "Cannot delete playlist Ghost: Playlist does not exist"
        );
    }

    #[test]
    fn test_clear_keeps_playlist_and_delete_drops_it() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Mix").unwrap();
        registry.add_video("Mix", &video("a")).unwrap();

        assert!(registry.clear("mix").unwrap().is_empty());
        assert!(registry.get("Mix").is_some());

        assert_eq!(registry.delete("MIX").unwrap().name, "Mix");
        assert!(registry.get("Mix").is_none());
    }

    #[test]
    fn test_playlists_sorted_by_key() {
        let mut registry = PlaylistRegistry::new();
        for name in ["zeta", "Alpha", "beta"] {
            registry.create(name).unwrap();
        }
        let names: Vec<&str> = registry.playlists().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "zeta"]);
    }
}
