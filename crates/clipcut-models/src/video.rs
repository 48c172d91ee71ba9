//! Video metadata models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Normalized metadata describing a source video.
///
/// Produced by a metadata provider and consumed read-only by the cut
/// planner. Only `title` and `duration` influence suggestions; the
/// remaining fields are passed through to the client untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct VideoInfo {
    /// Video title (may be empty)
    #[serde(default)]
    pub title: String,

    /// Duration in whole seconds. Untrusted: may be zero or negative.
    #[serde(default)]
    pub duration: i64,

    /// Description, already truncated by the provider
    #[serde(default)]
    pub description: String,

    /// Channel / uploader name
    #[serde(default)]
    pub uploader: String,

    /// View count at extraction time
    #[serde(default)]
    pub view_count: u64,

    /// Upload date as reported by the provider (YYYYMMDD)
    #[serde(default)]
    pub upload_date: String,

    /// Thumbnail URL
    #[serde(default)]
    pub thumbnail: String,

    /// Source URL the metadata was extracted from
    #[serde(default)]
    pub url: String,
}

impl VideoInfo {
    /// Create video info with just the fields the planner reads.
    pub fn new(title: impl Into<String>, duration: i64) -> Self {
        Self {
            title: title.into(),
            duration,
            ..Default::default()
        }
    }

    /// Set the source URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}
