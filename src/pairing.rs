// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pairing handshake with a bridge.
//!
//! A new username is requested with `POST /api`. The bridge refuses with
//! error type 101 until its link button is pressed, so the request is
//! repeated once per interval until it succeeds or the window runs out.
//! Running out is an error, never a silent return.
//!
//! # Examples
//!
//! ```no_run
//! use hue_client::pairing::{pair, PairingOptions};
//!
//! # async fn example() -> hue_client::Result<()> {
//! let username = pair("192.168.1.2", &PairingOptions::new(), |remaining| {
//!     print!(" {remaining}");
//! })
//! .await?;
//! println!("Registered user {username}.");
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::error::{PairingError, ProtocolError, Result};
use crate::protocol::{ApiResponse, LINK_BUTTON_NOT_PRESSED};

/// Options for the pairing handshake.
#[derive(Debug, Clone)]
pub struct PairingOptions {
    devicetype: String,
    attempts: u32,
    interval: Duration,
    timeout: Duration,
}

impl Default for PairingOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PairingOptions {
    /// Default application identifier sent to the bridge.
    pub const DEFAULT_DEVICETYPE: &'static str = "hue-client";

    /// Default number of polls (about thirty seconds at one per second).
    pub const DEFAULT_ATTEMPTS: u32 = 31;

    /// Default pause between polls.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    /// Creates options with the default polling window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            devicetype: Self::DEFAULT_DEVICETYPE.to_string(),
            attempts: Self::DEFAULT_ATTEMPTS,
            interval: Self::DEFAULT_INTERVAL,
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the application identifier (`devicetype`).
    #[must_use]
    pub fn with_devicetype(mut self, devicetype: impl Into<String>) -> Self {
        self.devicetype = devicetype.into();
        self
    }

    /// Sets how many times the bridge is polled.
    #[must_use]
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Sets the pause between polls.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn window_secs(&self) -> u64 {
        (self.interval * self.attempts.saturating_sub(1)).as_secs()
    }
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    devicetype: &'a str,
}

/// What one registration request produced.
#[derive(Debug, PartialEq, Eq)]
enum Poll {
    Registered(String),
    Waiting,
}

/// Registers a new user on the bridge at `address` and returns its username.
///
/// `progress` is called before each poll with the number of polls still
/// left after it, counting down to 0.
///
/// # Errors
///
/// - `PairingError::Unreachable` if the first request fails or gets a
///   non-success status
/// - `PairingError::Rejected` for any bridge error other than "link button
///   not pressed"
/// - `PairingError::TimedOut` if the button is not pressed in time
pub async fn pair(
    address: &str,
    options: &PairingOptions,
    mut progress: impl FnMut(u32),
) -> Result<String> {
    let url = format!("{}/api", crate::protocol::base_url(address));
    let client = Client::builder()
        .timeout(options.timeout)
        .build()
        .map_err(ProtocolError::Http)?;
    let request = RegisterRequest {
        devicetype: &options.devicetype,
    };

    // The first request doubles as a reachability check; a wrong address
    // fails here instead of after the whole window
    let first = client.post(&url).json(&request).send().await;
    let response = match first {
        Ok(response) if response.status().is_success() => response,
        Ok(response) => {
            tracing::warn!(status = response.status().as_u16(), "Bridge refused pairing request");
            return Err(PairingError::Unreachable(address.to_string()).into());
        }
        Err(e) => {
            tracing::warn!(error = %e, "Bridge unreachable");
            return Err(PairingError::Unreachable(address.to_string()).into());
        }
    };
    let body = response.text().await.map_err(ProtocolError::Http)?;
    if let Poll::Registered(username) = classify(&body)? {
        tracing::info!(%username, "Registered new bridge user");
        return Ok(username);
    }

    for attempt in 0..options.attempts {
        if attempt > 0 {
            tokio::time::sleep(options.interval).await;
        }
        progress(options.attempts - 1 - attempt);

        match poll_once(&client, &url, &request).await? {
            Poll::Registered(username) => {
                tracing::info!(%username, "Registered new bridge user");
                return Ok(username);
            }
            Poll::Waiting => {
                tracing::debug!(attempt, "Link button not pressed yet");
            }
        }
    }

    Err(PairingError::TimedOut {
        seconds: options.window_secs(),
    }
    .into())
}

async fn poll_once(client: &Client, url: &str, request: &RegisterRequest<'_>) -> Result<Poll> {
    let response = client
        .post(url)
        .json(request)
        .send()
        .await
        .map_err(ProtocolError::Http)?;

    if !response.status().is_success() {
        return Ok(Poll::Waiting);
    }

    let body = response.text().await.map_err(ProtocolError::Http)?;
    classify(&body)
}

/// Interprets the body of a registration request.
fn classify(body: &str) -> Result<Poll> {
    match ApiResponse::from_body(body) {
        ApiResponse::Success(success) => match success.get("username").and_then(|u| u.as_str()) {
            Some(username) => Ok(Poll::Registered(username.to_string())),
            None => Ok(Poll::Waiting),
        },
        ApiResponse::Error(error) if error.kind == LINK_BUTTON_NOT_PRESSED => Ok(Poll::Waiting),
        ApiResponse::Error(error) => Err(PairingError::Rejected(error.description).into()),
        ApiResponse::Unknown => Ok(Poll::Waiting),
    }
}
