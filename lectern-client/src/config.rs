use lectern_types::LatencyProfile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the public base URL for stored objects.
pub const PUBLIC_URL_ENV: &str = "LECTERN_PUBLIC_URL";

/// Environment variable holding the session file path.
pub const SESSION_PATH_ENV: &str = "LECTERN_SESSION_PATH";

/// Configuration for a [`crate::Backend`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmulatorConfig {
    /// Base URL public object links are composed from.
    pub public_base_url: String,
    /// Where the session is persisted. `None` keeps it in memory only.
    pub session_path: Option<PathBuf>,
    /// Start with the sample articles and books instead of empty tables.
    pub seed_sample_data: bool,
    pub latency: LatencyProfile,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            public_base_url: "http://localhost:54321".to_string(),
            session_path: None,
            seed_sample_data: true,
            latency: LatencyProfile::default(),
        }
    }
}

impl EmulatorConfig {
    /// Defaults overridden by `LECTERN_PUBLIC_URL` and `LECTERN_SESSION_PATH`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`], reading variables through `lookup`.
    /// Empty values are ignored.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = var(PUBLIC_URL_ENV) {
            config.public_base_url = url;
        }
        if let Some(path) = var(SESSION_PATH_ENV) {
            config.session_path = Some(PathBuf::from(path));
        }
        config
    }

    /// Empty tables, in-memory session, no simulated latency.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            seed_sample_data: false,
            latency: LatencyProfile::zero(),
            ..Self::default()
        }
    }
}
