//! Parser for catalog lines of the form `Title | video_id | #tag1 , #tag2`

use crate::model::Video;
use std::collections::HashSet;

/// Parse a whole catalog file
///
/// Blank and malformed lines are skipped, as are repeated ids (first one wins).
pub fn parse_catalog(text: &str) -> Vec<Video> {
    let mut seen = HashSet::new();
    let mut videos = Vec::new();

    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some(video) = parse_line(line) else {
            log::warn!("Skipping malformed catalog line {}: {:?}", number + 1, line);
            continue;
        };

        if !seen.insert(video.id.clone()) {
            log::warn!(
                "Skipping duplicate video id {:?} on catalog line {}",
                video.id,
                number + 1
            );
            continue;
        }

        videos.push(video);
    }

    log::debug!("Parsed {} videos from catalog", videos.len());
    videos
}

/// Parse a single catalog line
///
/// Needs at least a title and an id; the tag field is optional.
pub fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().filter(|t| !t.is_empty())?;
    let id = fields.next().filter(|i| !i.is_empty())?;
    let tags = fields
        .next()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(id, title, tags))
}
