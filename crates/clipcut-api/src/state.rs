//! Application state.

use std::sync::Arc;

use clipcut_media::{MetadataConfig, MetadataProvider, YtDlpProvider};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub metadata: Arc<dyn MetadataProvider>,
}

impl AppState {
    /// Create application state around an existing metadata provider.
    pub fn new(config: ApiConfig, metadata: Arc<dyn MetadataProvider>) -> Self {
        Self { config, metadata }
    }

    /// Create application state backed by yt-dlp, configured from the environment.
    pub fn from_env(config: ApiConfig) -> Self {
        let provider = YtDlpProvider::new(MetadataConfig::from_env());
        Self::new(config, Arc::new(provider))
    }
}
