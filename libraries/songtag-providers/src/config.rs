/// Provider configuration
use crate::error::{ProviderError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "songtag.toml";

/// Endpoints and HTTP settings shared by every provider adapter
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    #[serde(default = "default_musicbrainz_url")]
    pub musicbrainz_url: String,

    #[serde(default = "default_cover_art_url")]
    pub cover_art_url: String,

    #[serde(default = "default_audiodb_url")]
    pub audiodb_url: String,

    #[serde(default = "default_deezer_url")]
    pub deezer_url: String,

    #[serde(default = "default_lyrics_url")]
    pub lyrics_url: String,

    /// Per-request timeout, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of Deezer results kept per search
    #[serde(default = "default_deezer_limit")]
    pub deezer_limit: usize,
}

impl ProviderConfig {
    /// Load configuration from `songtag.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        Self::load_from(path.exists().then_some(path.as_path()))
    }

    /// Load configuration from an optional file, overridden by `SONGTAG_*`
    /// environment variables (e.g. `SONGTAG_TIMEOUT_SECS=5`)
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path.to_path_buf()));
        }

        settings =
            settings.add_source(config::Environment::with_prefix("SONGTAG").try_parsing(true));

        let config = settings
            .build()
            .map_err(|e| ProviderError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ProviderError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let urls = [
            ("musicbrainz_url", &self.musicbrainz_url),
            ("cover_art_url", &self.cover_art_url),
            ("audiodb_url", &self.audiodb_url),
            ("deezer_url", &self.deezer_url),
            ("lyrics_url", &self.lyrics_url),
        ];

        for (name, url) in urls {
            if url.is_empty() {
                return Err(ProviderError::Config(format!("{name} cannot be empty")));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ProviderError::Config(format!(
                    "{name} must start with http:// or https://"
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(ProviderError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the HTTP client every adapter shares
    pub fn http_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.timeout())
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(ProviderError::Request)
    }

    /// Configuration with every provider pointed at one base URL.
    ///
    /// Used by tests that serve all providers from a single mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            musicbrainz_url: format!("{base}/ws/2"),
            cover_art_url: format!("{base}/caa"),
            audiodb_url: format!("{base}/audiodb"),
            deezer_url: format!("{base}/deezer"),
            lyrics_url: format!("{base}/lyrics"),
            ..Self::default()
        }
    }
}

// Default values
fn default_musicbrainz_url() -> String {
    "https://musicbrainz.org/ws/2".to_string()
}

fn default_cover_art_url() -> String {
    "https://coverartarchive.org".to_string()
}

fn default_audiodb_url() -> String {
    "https://www.theaudiodb.com/api/v1/json/2".to_string()
}

fn default_deezer_url() -> String {
    "https://api.deezer.com".to_string()
}

fn default_lyrics_url() -> String {
    "https://api.lyrics.ovh".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!(
        "SongTag/{} ( https://github.com/yourusername/songtag )",
        env!("CARGO_PKG_VERSION")
    )
}

fn default_deezer_limit() -> usize {
    5
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            musicbrainz_url: default_musicbrainz_url(),
            cover_art_url: default_cover_art_url(),
            audiodb_url: default_audiodb_url(),
            deezer_url: default_deezer_url(),
            lyrics_url: default_lyrics_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            deezer_limit: default_deezer_limit(),
        }
    }
}
