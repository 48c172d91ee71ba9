//! Text and URL helpers shared across crates.

use std::fmt;

/// Take at most `max_chars` characters from `text`.
///
/// Counts Unicode scalar values so accented titles are never split
/// inside a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Errors that can occur during YouTube ID extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YoutubeIdError {
    /// URL is not a YouTube URL
    NotYoutube,
    /// Video ID has invalid format
    InvalidVideoId,
    /// Video ID not found in URL
    VideoIdNotFound,
}

impl fmt::Display for YoutubeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YoutubeIdError::NotYoutube => write!(f, "URL is not a YouTube URL"),
            YoutubeIdError::InvalidVideoId => write!(f, "Video ID has invalid format"),
            YoutubeIdError::VideoIdNotFound => write!(f, "Video ID not found in URL"),
        }
    }
}

impl std::error::Error for YoutubeIdError {}

/// Whether the URL points at a YouTube host (`youtube.com` or `youtu.be`).
pub fn is_youtube_url(url: &str) -> bool {
    let url = url.to_ascii_lowercase();
    url.contains("youtube.com") || url.contains("youtu.be")
}

/// Markers that precede the video ID, in order of preference.
const ID_MARKERS: [&str; 6] = ["?v=", "&v=", "youtu.be/", "/embed/", "/shorts/", "/v/"];

/// Extract the 11-character video ID from a YouTube URL.
///
/// Supports watch, youtu.be, embed, shorts and /v/ forms, with or
/// without trailing query parameters and fragments.
pub fn extract_youtube_id(url: &str) -> Result<String, YoutubeIdError> {
    let url = url.trim();
    if !is_youtube_url(url) {
        return Err(YoutubeIdError::NotYoutube);
    }

    let segment = ID_MARKERS
        .iter()
        .find_map(|marker| url.find(marker).map(|pos| &url[pos + marker.len()..]))
        .ok_or(YoutubeIdError::VideoIdNotFound)?;

    let end = segment
        .find(['&', '#', '?', '/'])
        .unwrap_or(segment.len());
    let id = segment[..end].trim();

    if id.is_empty() {
        return Err(YoutubeIdError::VideoIdNotFound);
    }
    if id.len() != 11 || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(YoutubeIdError::InvalidVideoId);
    }

    Ok(id.to_string())
}
