// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Hue client.
//!
//! Command and argument errors are raised before any network activity.
//! Per-light rejections reported by the bridge are never errors: they are
//! recorded as a failed [`LightResult`](crate::protocol::LightResult) and the
//! rest of the batch carries on.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line does not match the `lights` grammar.
    #[error("invalid command: \"{0}\"")]
    InvalidCommand(String),

    /// An action argument is missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A hex color could not be converted.
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ValueError),

    /// Error occurred while talking to the bridge.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while decoding a bridge response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred while reading or writing the configuration file.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The pairing handshake did not produce a credential.
    #[error("pairing error: {0}")]
    Pairing(#[from] PairingError),

    /// The requested feature is recognized but not implemented.
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The input is not exactly six hexadecimal digits.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),
}

/// Errors related to HTTP communication with the bridge.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The HTTP request itself failed (connection refused, timeout, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The bridge answered with a non-success status.
    #[error("bridge unreachable: HTTP {status}")]
    Unreachable {
        /// The HTTP status code returned by the bridge.
        status: u16,
    },

    /// The bridge answered a read with an error descriptor instead of data.
    #[error("bridge error: {0}")]
    Rejected(String),

    /// The bridge address could not be turned into a URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A UDP socket operation failed during discovery.
    #[error("socket error: {0}")]
    Socket(#[from] std::io::Error),
}

/// Errors related to decoding bridge responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to the persisted bridge configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("could not read {}", path.display())]
    Missing {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// No platform configuration directory could be determined.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// Reading or writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a valid configuration.
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to the pairing handshake.
#[derive(Debug, Error)]
pub enum PairingError {
    /// The bridge did not answer the initial request successfully.
    #[error("could not communicate with {0}")]
    Unreachable(String),

    /// The bridge refused the registration for a reason other than the link button.
    #[error("registration rejected: {0}")]
    Rejected(String),

    /// The link button was not pressed within the polling window.
    #[error("link button was not pressed within {seconds} seconds")]
    TimedOut {
        /// Length of the polling window in seconds.
        seconds: u64,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidHexColor("zz0000".to_string());
        assert_eq!(err.to_string(), "invalid hex color: zz0000");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::InvalidHexColor("fff".to_string()).into();
        assert!(matches!(err, Error::InvalidColor(ValueError::InvalidHexColor(_))));
    }

    #[test]
    fn config_missing_display() {
        let err = ConfigError::Missing {
            path: PathBuf::from("/tmp/nope.json"),
        };
        assert_eq!(err.to_string(), "could not read /tmp/nope.json");
    }

    #[test]
    fn pairing_timeout_display() {
        let err = PairingError::TimedOut { seconds: 30 };
        assert_eq!(
            err.to_string(),
            "link button was not pressed within 30 seconds"
        );
    }

    #[test]
    fn rejected_display() {
        let err: Error = ProtocolError::Rejected("unauthorized user".to_string()).into();
        assert_eq!(err.to_string(), "protocol error: bridge error: unauthorized user");
    }

    #[test]
    fn unsupported_display() {
        assert_eq!(
            Error::Unsupported("xy color").to_string(),
            "xy color is not supported"
        );
    }
}
