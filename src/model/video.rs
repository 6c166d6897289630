use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single catalog video
///
/// Identity is carried by `id`: two videos are equal when their ids match,
/// whatever their title or tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title
    pub title: String,

    /// Tags in catalog order (e.g. `#cat`)
    pub tags: Vec<String>,
}

impl Video {
    /// Create a new video record
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Tags joined with single spaces, as shown between brackets
    pub fn tag_line(&self) -> String {
        self.tags.join(" ")
    }
}

impl PartialEq for Video {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Video {}

/// Renders `title (id) [tag1 tag2]`
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tag_line())
    }
}
