//! Video catalog loading
//!
//! Reads the pipe-delimited `videos.txt` format into a [`VideoLibrary`].

mod parser;

pub use parser::{parse_catalog, parse_line};

use crate::model::VideoLibrary;
use anyhow::{Context, Result};
use std::path::Path;

/// Catalog shipped with the binary
const DEFAULT_CATALOG: &str = include_str!("../../assets/videos.txt");

/// Load a catalog file into a library
///
/// # Arguments
/// * `path` - Path to a `videos.txt` style file
pub fn load_catalog(path: &Path) -> Result<VideoLibrary> {
    log::info!("Loading video catalog from {:?}", path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open video catalog: {:?}", path))?;

    let library: VideoLibrary = parse_catalog(&text).into_iter().collect();
    log::info!("Loaded catalog: {} videos", library.video_count());
    Ok(library)
}

/// The built-in catalog
pub fn default_catalog() -> VideoLibrary {
    parse_catalog(DEFAULT_CATALOG).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_populated() {
        let library = default_catalog();
        assert_eq!(library.video_count(), 5);

        let cats = library.get_video("amazing_cats_video_id").unwrap();
        assert_eq!(cats.title, "Amazing Cats");
        assert_eq!(cats.tags, vec!["#cat", "#animal"]);

        let nothing = library.get_video("nothing_video_id").unwrap();
        assert!(nothing.tags.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_catalog(Path::new("/nonexistent/videos.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to open video catalog"));
    }
}
