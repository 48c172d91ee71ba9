//! Video metadata retrieval using yt-dlp.
//!
//! Runs `yt-dlp --dump-json` without downloading any media and normalizes
//! the provider output into [`VideoInfo`].

use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use clipcut_models::{truncate_chars, VideoInfo};
use metrics::{counter, histogram};
use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::MetadataConfig;
use crate::error::{is_rate_limited, MediaError, MediaResult};

/// Title used when the provider reports none.
pub const DEFAULT_TITLE: &str = "Título não disponível";

/// Uploader used when the provider reports none.
pub const DEFAULT_UPLOADER: &str = "Canal não disponível";

/// Maximum description characters kept before the ellipsis.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Source of normalized video metadata.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Name of this provider for logging.
    fn name(&self) -> &'static str;

    /// Fetch metadata for a video URL.
    async fn fetch(&self, url: &str) -> MediaResult<VideoInfo>;

    /// Check the provider can serve requests.
    async fn check_available(&self) -> MediaResult<()> {
        Ok(())
    }
}

/// Subset of the yt-dlp `--dump-json` output we consume.
#[derive(Debug, Default, Deserialize)]
struct YtDlpInfo {
    title: Option<String>,
    duration: Option<f64>,
    description: Option<String>,
    uploader: Option<String>,
    view_count: Option<u64>,
    upload_date: Option<String>,
    thumbnail: Option<String>,
}

impl YtDlpInfo {
    fn into_video_info(self, url: &str) -> VideoInfo {
        let description = match self.description.as_deref() {
            Some(d) if !d.is_empty() => {
                format!("{}...", truncate_chars(d, DESCRIPTION_MAX_CHARS))
            }
            _ => String::new(),
        };

        VideoInfo {
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            // Fractional seconds are dropped.
            duration: self.duration.map(|d| d as i64).unwrap_or(0),
            description,
            uploader: self.uploader.unwrap_or_else(|| DEFAULT_UPLOADER.to_string()),
            view_count: self.view_count.unwrap_or(0),
            upload_date: self.upload_date.unwrap_or_default(),
            thumbnail: self.thumbnail.unwrap_or_default(),
            url: url.to_string(),
        }
    }
}

/// Parse yt-dlp JSON output into normalized video info.
pub fn parse_ytdlp_json(json: &[u8], url: &str) -> MediaResult<VideoInfo> {
    let raw: YtDlpInfo = serde_json::from_slice(json)?;
    Ok(raw.into_video_info(url))
}

/// Metadata provider backed by the yt-dlp CLI.
#[derive(Debug, Clone)]
pub struct YtDlpProvider {
    config: MetadataConfig,
}

impl YtDlpProvider {
    pub fn new(config: MetadataConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    fn build_args(&self, url: &str) -> Vec<String> {
        let mut args: Vec<String> = [
            "--dump-json",
            "--no-playlist",
            "--skip-download",
            "--quiet",
            "--no-warnings",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        if let Some(cookies) = self.config.cookies_path.as_ref().filter(|p| p.exists()) {
            args.push("--cookies".to_string());
            args.push(cookies.to_string_lossy().into_owned());
        }

        args.push(url.to_string());
        args
    }

    async fn run(&self, url: &str) -> MediaResult<VideoInfo> {
        let binary = which::which(&self.config.ytdlp_path).map_err(|_| {
            MediaError::YtDlpNotFound(self.config.ytdlp_path.display().to_string())
        })?;

        let args = self.build_args(url);
        debug!(binary = %binary.display(), ?args, "Running yt-dlp metadata extraction");

        let child = Command::new(&binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.config.timeout, child)
            .await
            .map_err(|_| MediaError::Timeout(self.config.timeout.as_secs()))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            debug!("yt-dlp stderr: {}", stderr);

            if is_rate_limited(&stderr) {
                warn!(url = %url, "Provider rate limit detected");
            }

            let last_line = stderr
                .lines()
                .rev()
                .find(|l| !l.trim().is_empty())
                .unwrap_or("Unknown error")
                .to_string();

            return Err(MediaError::metadata_failed(
                format!("yt-dlp failed: {}", last_line),
                Some(stderr),
                output.status.code(),
            ));
        }

        parse_ytdlp_json(&output.stdout, url)
    }
}

#[async_trait]
impl MetadataProvider for YtDlpProvider {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn fetch(&self, url: &str) -> MediaResult<VideoInfo> {
        let start = Instant::now();
        let result = self.run(url).await;
        histogram!("clipcut_metadata_fetch_duration_seconds").record(start.elapsed().as_secs_f64());

        match &result {
            Ok(info) => info!(
                url = %url,
                duration = info.duration,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Extracted video metadata"
            ),
            Err(e) => {
                counter!("clipcut_metadata_fetch_failures_total").increment(1);
                warn!(url = %url, error = %e, transient = e.is_transient(), "Metadata extraction failed");
            }
        }

        result
    }

    async fn check_available(&self) -> MediaResult<()> {
        which::which(&self.config.ytdlp_path)
            .map(|_| ())
            .map_err(|_| MediaError::YtDlpNotFound(self.config.ytdlp_path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    #[test]
    fn test_parse_full_output() {
        let json = br#"{
            "id": "dQw4w9WgXcQ",
            "title": "Amazing Discovery Video",
            "duration": 400,
            "description": "A short description",
            "uploader": "Some Channel",
            "view_count": 12345,
            "upload_date": "20240115",
            "thumbnail": "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg",
            "formats": []
        }"#;

        let info = parse_ytdlp_json(json, URL).unwrap();
        assert_eq!(info.title, "Amazing Discovery Video");
        assert_eq!(info.duration, 400);
        assert_eq!(info.description, "A short description...");
        assert_eq!(info.uploader, "Some Channel");
        assert_eq!(info.view_count, 12345);
        assert_eq!(info.upload_date, "20240115");
        assert_eq!(info.url, URL);
    }

    #[test]
    fn test_parse_applies_defaults() {
        let info = parse_ytdlp_json(br#"{"title": null, "duration": null}"#, URL).unwrap();
        assert_eq!(info.title, DEFAULT_TITLE);
        assert_eq!(info.uploader, DEFAULT_UPLOADER);
        assert_eq!(info.duration, 0);
        assert_eq!(info.view_count, 0);
        assert!(info.description.is_empty());
        assert!(info.thumbnail.is_empty());
    }

    #[test]
    fn test_parse_keeps_empty_title() {
        let info = parse_ytdlp_json(br#"{"title": ""}"#, URL).unwrap();
        assert_eq!(info.title, "");
    }

    #[test]
    fn test_parse_truncates_fractional_duration() {
        let info = parse_ytdlp_json(br#"{"duration": 212.87}"#, URL).unwrap();
        assert_eq!(info.duration, 212);
    }

    #[test]
    fn test_parse_truncates_long_description() {
        let long = "é".repeat(700);
        let json = serde_json::json!({ "description": long }).to_string();
        let info = parse_ytdlp_json(json.as_bytes(), URL).unwrap();
        assert_eq!(info.description.chars().count(), DESCRIPTION_MAX_CHARS + 3);
        assert!(info.description.ends_with("é..."));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_ytdlp_json(b"not json", URL),
            Err(MediaError::JsonParse(_))
        ));
    }

    #[test]
    fn test_build_args_ends_with_url() {
        let provider = YtDlpProvider::new(MetadataConfig::default());
        let args = provider.build_args(URL);
        assert_eq!(args.first().map(String::as_str), Some("--dump-json"));
        assert!(args.contains(&"--skip-download".to_string()));
        assert!(!args.contains(&"--cookies".to_string()));
        assert_eq!(args.last().map(String::as_str), Some(URL));
    }

    #[tokio::test]
    async fn test_missing_binary() {
        let provider = YtDlpProvider::new(
            MetadataConfig::default().with_ytdlp_path("/nonexistent/clipcut/yt-dlp"),
        );
        assert!(matches!(
            provider.fetch(URL).await,
            Err(MediaError::YtDlpNotFound(_))
        ));
        assert!(provider.check_available().await.is_err());
    }

    /// Exercises the process path against fake yt-dlp scripts. Kept in a
    /// single test so script writes never race with spawns.
    #[cfg(unix)]
    #[tokio::test]
    async fn test_fake_ytdlp_scripts() {
        use std::os::unix::fs::PermissionsExt;
        use std::time::Duration;

        let dir = tempfile::tempdir().unwrap();

        let write_script = |name: &str, body: &str| {
            let path = dir.path().join(name);
            std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        };

        let ok = write_script(
            "yt-dlp-ok",
            r#"echo '{"title": "Quick Tip", "duration": 30, "uploader": "Tips"}'"#,
        );
        let failing = write_script(
            "yt-dlp-fail",
            "echo 'ERROR: [youtube] dQw4w9WgXcQ: Video unavailable' >&2\nexit 1",
        );
        let slow = write_script("yt-dlp-slow", "sleep 5");

        let provider = YtDlpProvider::new(MetadataConfig::default().with_ytdlp_path(&ok));
        provider.check_available().await.unwrap();
        let info = provider.fetch(URL).await.unwrap();
        assert_eq!(info.title, "Quick Tip");
        assert_eq!(info.duration, 30);
        assert_eq!(info.url, URL);

        let provider = YtDlpProvider::new(MetadataConfig::default().with_ytdlp_path(&failing));
        match provider.fetch(URL).await {
            Err(MediaError::MetadataFailed { message, exit_code, .. }) => {
                assert!(message.contains("Video unavailable"));
                assert_eq!(exit_code, Some(1));
            }
            other => panic!("expected MetadataFailed, got {:?}", other),
        }

        let provider = YtDlpProvider::new(
            MetadataConfig::default()
                .with_ytdlp_path(&slow)
                .with_timeout(Duration::from_millis(200)),
        );
        assert!(matches!(provider.fetch(URL).await, Err(MediaError::Timeout(_))));
    }
}
