// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Persisted bridge credentials.
//!
//! The configuration is an explicit value: it is loaded once by the binary
//! and handed to whatever needs the bridge address or username.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::protocol::BridgeClient;

/// Bridge address and the username issued at pairing.
///
/// # Examples
///
/// ```no_run
/// use hue_client::config::BridgeConfig;
///
/// # fn example() -> hue_client::Result<()> {
/// let path = BridgeConfig::default_path()?;
/// BridgeConfig::new("192.168.1.2", "my-username").save(&path)?;
/// let config = BridgeConfig::load(&path)?;
/// assert_eq!(config.address, "192.168.1.2");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Bridge address (`host`, `host:port` or a full URL).
    pub address: String,
    /// Username issued by the bridge.
    pub username: String,
}

impl BridgeConfig {
    /// Creates a configuration value.
    #[must_use]
    pub fn new(address: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            username: username.into(),
        }
    }

    /// Returns the default configuration file path
    /// (`<config dir>/hue-client/config.json`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has no config directory.
    pub fn default_path() -> std::result::Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|mut path| {
                path.push("hue-client");
                path.push("config.json");
                path
            })
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the file does not exist, or an I/O
    /// or JSON error if it cannot be read.
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Saves the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> std::result::Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        tracing::info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Builds a bridge client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self, timeout: Duration) -> Result<BridgeClient> {
        BridgeClient::builder()
            .address(self.address)
            .username(self.username)
            .timeout(timeout)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_under_app_dir() {
        if let Ok(path) = BridgeConfig::default_path() {
            assert!(path.ends_with("hue-client/config.json"));
        }
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = BridgeConfig::new("10.0.0.5", "abcdef");
        config.save(&path).unwrap();

        assert_eq!(BridgeConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = BridgeConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { path: p } if p == path));
    }

    #[test]
    fn malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "[bridge]\nip = 1.2.3.4\n").unwrap();
        assert!(matches!(
            BridgeConfig::load(&path),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn into_client_uses_address() {
        let client = BridgeConfig::new("10.0.0.5", "abcdef")
            .into_client(Duration::from_secs(1))
            .unwrap();
        assert_eq!(client.base_url(), "http://10.0.0.5");
    }
}
