// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP implementation of the bridge API.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::error::{Error, ParseError, ProtocolError, Result};
use crate::protocol::{ApiResponse, Bridge, LightResult, StatePayload};
use crate::state::{Light, LightMap};
use crate::types::LightId;

/// HTTP client bound to one bridge address and username.
///
/// Every call is a single request with no retries. The light list is fetched
/// at most once per client and then served from memory, so resolving `all`
/// several times in one invocation costs one round-trip.
///
/// # Examples
///
/// ```no_run
/// use hue_client::protocol::{Bridge, BridgeClient};
///
/// # async fn example() -> hue_client::Result<()> {
/// let client = BridgeClient::new("192.168.1.2", "my-username")?;
/// for (id, light) in client.list_lights().await? {
///     println!("{id}: {}", light.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BridgeClient {
    base_url: String,
    username: String,
    client: Client,
    lights: OnceCell<LightMap>,
}

impl BridgeClient {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a client for the bridge at `address` using `username`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(address: impl Into<String>, username: impl Into<String>) -> Result<Self> {
        BridgeClientBuilder::new()
            .address(address)
            .username(username)
            .build()
    }

    /// Returns a builder for a client with custom settings.
    #[must_use]
    pub fn builder() -> BridgeClientBuilder {
        BridgeClientBuilder::new()
    }

    /// Returns the base URL of the bridge.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL of an endpoint under `/api/{username}`.
    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/api/{}/{path}",
            self.base_url,
            urlencoding::encode(&self.username)
        )
    }

    fn light_url(&self, id: &LightId, suffix: &str) -> String {
        self.api_url(&format!("lights/{}{suffix}", urlencoding::encode(id.as_str())))
    }

    /// Sends a GET and returns the body of a successful response.
    async fn get_body(&self, url: &str) -> Result<String> {
        tracing::debug!(url = %url, "Sending GET request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::Unreachable {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;
        tracing::debug!(body = %body, "Received response");
        Ok(body)
    }

    /// Reads the bridge configuration (`GET /api/{username}/config`).
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or invalid JSON.
    pub async fn get_configuration(&self) -> Result<Value> {
        let body = self.get_body(&self.api_url("config")).await?;
        let config = serde_json::from_str(&body).map_err(ParseError::from)?;
        Ok(config)
    }
}

impl Bridge for BridgeClient {
    async fn list_lights(&self) -> Result<&LightMap> {
        self.lights
            .get_or_try_init(|| async {
                let body = self.get_body(&self.api_url("lights")).await?;
                let lights: LightMap = decode(&body)?;
                tracing::debug!(count = lights.len(), "Fetched light list");
                Ok::<_, Error>(lights)
            })
            .await
    }

    async fn get_light_state(&self, id: &LightId) -> Result<Light> {
        let body = self.get_body(&self.light_url(id, "")).await?;
        decode(&body)
    }

    async fn put_light_state(&self, id: &LightId, state: &StatePayload) -> Result<LightResult> {
        let url = self.light_url(id, "/state");

        tracing::debug!(url = %url, ?state, "Sending PUT request");

        let response = self
            .client
            .put(&url)
            .json(state)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(status = status.as_u16(), body = %body, "Received response");

        Ok(ApiResponse::from_body(&body).into())
    }
}

/// Builder for a [`BridgeClient`] with custom configuration.
#[derive(Debug, Default)]
pub struct BridgeClientBuilder {
    address: Option<String>,
    username: Option<String>,
    timeout: Option<Duration>,
}

impl BridgeClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bridge address (`host`, `host:port` or a full `http://` URL).
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the username issued by the bridge at pairing.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns error if the address or username is missing, or if the HTTP
    /// client cannot be created.
    pub fn build(self) -> Result<BridgeClient> {
        let address = self
            .address
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| ProtocolError::InvalidAddress("address is required".to_string()))?;
        let username = self
            .username
            .ok_or_else(|| ProtocolError::InvalidAddress("username is required".to_string()))?;

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(BridgeClient::DEFAULT_TIMEOUT))
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(BridgeClient {
            base_url: base_url(&address),
            username,
            client,
            lights: OnceCell::new(),
        })
    }
}

/// Decodes a read response.
///
/// Reads answer HTTP 200 even when they fail (unknown light, unauthorized
/// user), with an error array in place of the data. That array is surfaced as
/// `ProtocolError::Rejected` carrying the bridge's description.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| -> Error {
        match ApiResponse::from_body(body) {
            ApiResponse::Error(error) => ProtocolError::Rejected(error.description).into(),
            _ => ParseError::from(e).into(),
        }
    })
}

/// Turns a configured address into a base URL without a trailing slash.
pub(crate) fn base_url(address: &str) -> String {
    let address = address.trim().trim_end_matches('/');
    if address.starts_with("http://") || address.starts_with("https://") {
        address.to_string()
    } else {
        format!("http://{address}")
    }
}
