//! Shared data models for the ClipCut backend.
//!
//! This crate provides Serde-serializable types for:
//! - Source video metadata
//! - Clip proposals, roles and viral potential labels
//! - Title truncation and YouTube URL helpers

pub mod clip;
pub mod utils;
pub mod video;

// Re-export common types
pub use clip::{ClipProposal, ClipRole, ViralPotential};
pub use utils::{extract_youtube_id, is_youtube_url, truncate_chars, YoutubeIdError};
pub use video::VideoInfo;
