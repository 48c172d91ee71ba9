//! Metadata provider configuration.

use std::path::PathBuf;
use std::time::Duration;

/// yt-dlp invocation settings.
#[derive(Debug, Clone)]
pub struct MetadataConfig {
    /// yt-dlp executable (name resolved on PATH, or an absolute path)
    pub ytdlp_path: PathBuf,
    /// Upper bound on a single extraction
    pub timeout: Duration,
    /// Optional Netscape cookies file passed to yt-dlp
    pub cookies_path: Option<PathBuf>,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            ytdlp_path: PathBuf::from("yt-dlp"),
            timeout: Duration::from_secs(60),
            cookies_path: None,
        }
    }
}

impl MetadataConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            ytdlp_path: std::env::var("YTDLP_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("yt-dlp")),
            timeout: Duration::from_secs(
                std::env::var("YTDLP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
            cookies_path: std::env::var("YTDLP_COOKIES_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Set the executable path.
    pub fn with_ytdlp_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ytdlp_path = path.into();
        self
    }

    /// Set the extraction timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
