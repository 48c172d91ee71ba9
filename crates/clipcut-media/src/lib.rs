//! Video metadata retrieval.
//!
//! This crate provides:
//! - The `MetadataProvider` seam used by the API server
//! - A yt-dlp backed provider that never downloads media
//! - Normalization of provider output into `VideoInfo`

pub mod config;
pub mod error;
pub mod metadata;

pub use config::MetadataConfig;
pub use error::{MediaError, MediaResult};
pub use metadata::{parse_ytdlp_json, MetadataProvider, YtDlpProvider};
