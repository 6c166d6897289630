//! Player configuration

use crate::catalog;
use crate::model::VideoLibrary;
use crate::player::VideoPlayer;
use anyhow::Result;
use std::path::PathBuf;

/// Where the catalog comes from and how random picks are seeded
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    /// Catalog file (None = built-in catalog)
    pub catalog_path: Option<PathBuf>,

    /// Seed for PLAY_RANDOM (None = seeded from the OS)
    pub random_seed: Option<u64>,
}

impl PlayerConfig {
    /// Built-in catalog, unseeded randomness
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the catalog from a file
    pub fn with_catalog(mut self, path: PathBuf) -> Self {
        self.catalog_path = Some(path);
        self
    }

    /// Make random picks reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Load the configured catalog
    pub fn load_library(&self) -> Result<VideoLibrary> {
        match &self.catalog_path {
            Some(path) => catalog::load_catalog(path),
            None => {
                log::info!("Using built-in video catalog");
                Ok(catalog::default_catalog())
            }
        }
    }

    /// Load the catalog and build a stopped player over it
    pub fn build_player(&self) -> Result<VideoPlayer> {
        let library = self.load_library()?;
        Ok(match self.random_seed {
            Some(seed) => VideoPlayer::with_seed(library, seed),
            None => VideoPlayer::new(library),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_builtin_catalog() {
        let config = PlayerConfig::new();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.load_library().unwrap().video_count(), 5);
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = PlayerConfig::new()
            .with_catalog(PathBuf::from("/tmp/videos.txt"))
            .with_seed(3);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/videos.txt")));
        assert_eq!(config.random_seed, Some(3));
    }

    #[test]
    fn test_missing_catalog_fails_to_build() {
        let config = PlayerConfig::new().with_catalog(PathBuf::from("/nonexistent/videos.txt"));
        assert!(config.build_player().is_err());
    }
}
