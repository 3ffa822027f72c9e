use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Result, SkullError};

pub const DEFAULT_SESSION_SERVER: &str = "https://sessionserver.mojang.com";
pub const DEFAULT_MAX_RETRIES: u32 = 10;
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 60;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str =
    concat!("skull-textures/", env!("CARGO_PKG_VERSION"));

/// Settings of the session server lookup.
///
/// Stored as TOML, every field is optional:
///
/// ```toml
/// session_server = "https://sessionserver.mojang.com"
/// unsigned = false
/// max_retries = 10
/// retry_delay_secs = 60
/// timeout_secs = 10
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub session_server: Url,
    /// Value of the `unsigned` query flag sent with every lookup.
    pub unsigned: bool,
    /// Retries after the first failed attempt.
    pub max_retries: u32,
    pub retry_delay_secs: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            // constant is a valid absolute URL
            session_server: Url::parse(DEFAULT_SESSION_SERVER)
                .expect("default session server URL"),
            unsigned: false,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_secs: DEFAULT_RETRY_DELAY_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl ResolverConfig {
    /// Loads the configuration from a TOML file. If the file does not exist,
    /// returns the default configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!(
                "No resolver config at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URL of the profile lookup for `id`, appended to any path the
    /// session server already has.
    pub fn profile_url(&self, id: &uuid::Uuid) -> Result<Url> {
        let id = id.to_string();
        let mut url = self.session_server.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SkullError::Config(format!(
                    "{} cannot carry a path",
                    self.session_server
                ))
            })?
            .pop_if_empty()
            .extend(["session", "minecraft", "profile", id.as_str()]);
        url.query_pairs_mut()
            .append_pair("unsigned", &self.unsigned.to_string());
        Ok(url)
    }
}
