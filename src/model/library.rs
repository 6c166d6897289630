use super::Video;
use std::collections::HashMap;

/// Read-only video catalog
///
/// Keeps videos in load order, with an id index for exact lookups.
#[derive(Debug, Clone)]
pub struct VideoLibrary {
    /// All videos, in load order
    videos: Vec<Video>,

    /// Position of each video in `videos`, indexed by id
    index: HashMap<String, usize>,
}

impl VideoLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            videos: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a video to the library
    ///
    /// Returns false and leaves the library untouched if the id is already known.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.index.contains_key(&video.id) {
            return false;
        }
        self.index.insert(video.id.clone(), self.videos.len());
        self.videos.push(video);
        true
    }

    /// Get a video by exact ID
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&position| &self.videos[position])
    }

    /// Get all videos, in load order
    pub fn all_videos(&self) -> &[Video] {
        &self.videos
    }

    /// All videos sorted by title (stable)
    pub fn videos_by_title(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));
        videos
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for VideoLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Video> for VideoLibrary {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut library = Self::new();
        for video in iter {
            if !library.add_video(video) {
                log::debug!("Ignoring duplicate video id while building library");
            }
        }
        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_creation() {
        let lib = VideoLibrary::new();
        assert_eq!(lib.video_count(), 0);
        assert!(lib.is_empty());
    }

    #[test]
    fn test_add_video() {
        let mut lib = VideoLibrary::new();

        let video = Video::new("test123", "Test Video", vec!["#test".to_string()]);
        assert!(lib.add_video(video));

        assert_eq!(lib.video_count(), 1);
        assert!(lib.get_video("test123").is_some());
        assert_eq!(lib.get_video("test123").unwrap().title, "Test Video");
        assert!(lib.get_video("TEST123").is_none());
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let mut lib = VideoLibrary::new();
        assert!(lib.add_video(Video::new("dup", "First", Vec::new())));
        assert!(!lib.add_video(Video::new("dup", "Second", Vec::new())));

        assert_eq!(lib.video_count(), 1);
        assert_eq!(lib.get_video("dup").unwrap().title, "First");
    }

    #[test]
    fn test_videos_by_title_is_sorted() {
        let lib: VideoLibrary = vec![
            Video::new("c", "Zebra", Vec::new()),
            Video::new("a", "Apple", Vec::new()),
            Video::new("b", "Mango", Vec::new()),
        ]
        .into_iter()
        .collect();

        let titles: Vec<&str> = lib.videos_by_title().iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Mango", "Zebra"]);

        let load_order: Vec<&str> = lib.all_videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(load_order, vec!["c", "a", "b"]);
    }
}
