// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge discovery on the local network.
//!
//! Discovery works in two steps:
//!
//! 1. An SSDP `M-SEARCH` for `ssdp:all` is multicast and every `LOCATION`
//!    header heard before the timeout is collected.
//! 2. Each location's description document is fetched; the ones mentioning
//!    a hue bridge are kept.
//!
//! # Examples
//!
//! ```no_run
//! use hue_client::discovery::{discover_bridges, DiscoveryOptions};
//! use std::time::Duration;
//!
//! # async fn example() -> hue_client::Result<()> {
//! let options = DiscoveryOptions::new().with_timeout(Duration::from_secs(5));
//! for (i, address) in discover_bridges(&options).await?.iter().enumerate() {
//!     println!("{}\t{address}", i + 1);
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::io;
use std::time::Duration;

use reqwest::{Client, Url};
use tokio::net::UdpSocket;
use tokio::time::Instant;

use crate::error::{ProtocolError, Result};

/// Default time spent listening for SSDP answers.
const DEFAULT_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(3);

/// SSDP multicast group and port.
const SSDP_ADDRESS: &str = "239.255.255.250:1900";

const M_SEARCH: &str = "M-SEARCH * HTTP/1.1\r\n\
HOST: 239.255.255.250:1900\r\n\
MAN: \"ssdp:discover\"\r\n\
MX: 2\r\n\
ST: ssdp:all\r\n\r\n";

/// Text that identifies a bridge's description document.
const BRIDGE_MARKER: &str = "hue bridge";

/// Options for bridge discovery.
///
/// # Examples
///
/// ```
/// use hue_client::discovery::DiscoveryOptions;
/// use std::time::Duration;
///
/// let options = DiscoveryOptions::new().with_timeout(Duration::from_secs(5));
/// assert_eq!(options.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    timeout: Option<Duration>,
}

impl DiscoveryOptions {
    /// Creates options with the default 3 second listening window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how long to listen for SSDP answers.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the listening window.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_DISCOVERY_TIMEOUT)
    }
}

/// Extracts the `LOCATION` header from an SSDP answer.
///
/// Header names are matched case-insensitively.
#[must_use]
pub fn parse_location(message: &str) -> Option<&str> {
    message.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.trim()
            .eq_ignore_ascii_case("location")
            .then(|| value.trim())
            .filter(|v| !v.is_empty())
    })
}

/// Multicasts an SSDP search and returns the distinct locations that answered.
///
/// Locations are returned in the order they were first heard.
///
/// # Errors
///
/// Returns `ProtocolError::Socket` if the UDP socket cannot be bound or the
/// search cannot be sent.
pub async fn discover_candidates(options: &DiscoveryOptions) -> Result<Vec<String>> {
    let socket = UdpSocket::bind("0.0.0.0:0")
        .await
        .map_err(ProtocolError::Socket)?;
    socket
        .send_to(M_SEARCH.as_bytes(), SSDP_ADDRESS)
        .await
        .map_err(ProtocolError::Socket)?;

    tracing::debug!(timeout = ?options.timeout(), "Sent SSDP search");

    let deadline = Instant::now() + options.timeout();
    let mut buf = [0u8; 2048];
    let locations = collect_locations(deadline, async || -> io::Result<String> {
        let (len, from) = socket.recv_from(&mut buf).await?;
        tracing::trace!(%from, "SSDP datagram");
        Ok(String::from_utf8_lossy(&buf[..len]).into_owned())
    })
    .await;

    Ok(locations)
}

/// Gathers distinct `LOCATION` headers from answers until `deadline`.
///
/// A receive error ends the collection with what was heard so far.
async fn collect_locations<R>(deadline: Instant, mut recv: R) -> Vec<String>
where
    R: AsyncFnMut() -> io::Result<String>,
{
    let mut seen = HashSet::new();
    let mut locations = Vec::new();

    loop {
        let message = match tokio::time::timeout_at(deadline, recv()).await {
            Err(_) => break,
            Ok(Ok(message)) => message,
            Ok(Err(e)) => {
                tracing::debug!(error = %e, "SSDP receive failed, stopping search");
                break;
            }
        };

        if let Some(location) = parse_location(&message)
            && seen.insert(location.to_string())
        {
            tracing::debug!(%location, "SSDP answer");
            locations.push(location.to_string());
        }
    }

    locations
}

/// Returns true if the description document at `location` belongs to a bridge.
///
/// # Errors
///
/// Returns an error if the document cannot be fetched.
pub async fn is_bridge(client: &Client, location: &str) -> Result<bool> {
    let body = client
        .get(location)
        .send()
        .await
        .map_err(ProtocolError::Http)?
        .text()
        .await
        .map_err(ProtocolError::Http)?;
    Ok(body.to_lowercase().contains(BRIDGE_MARKER))
}

/// Returns the `host[:port]` part of a location URL.
#[must_use]
pub fn location_address(location: &str) -> Option<String> {
    let url = Url::parse(location).ok()?;
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Keeps the candidates whose description identifies a bridge.
///
/// Candidates that cannot be fetched are skipped.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub async fn filter_bridges(candidates: &[String], timeout: Duration) -> Result<Vec<String>> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(ProtocolError::Http)?;

    let mut bridges = Vec::new();
    for location in candidates {
        match is_bridge(&client, location).await {
            Ok(true) => {
                if let Some(address) = location_address(location) {
                    bridges.push(address);
                }
            }
            Ok(false) => {}
            Err(e) => tracing::debug!(%location, error = %e, "Skipping candidate"),
        }
    }
    Ok(bridges)
}

/// Finds bridges on the local network and returns their `host[:port]`.
///
/// # Errors
///
/// Returns an error if the SSDP search cannot be sent.
pub async fn discover_bridges(options: &DiscoveryOptions) -> Result<Vec<String>> {
    let candidates = discover_candidates(options).await?;
    tracing::info!(count = candidates.len(), "SSDP candidates found");
    filter_bridges(&candidates, options.timeout()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout() {
        assert_eq!(DiscoveryOptions::new().timeout(), Duration::from_secs(3));
    }

    #[test]
    fn location_header_any_case() {
        let answer = "HTTP/1.1 200 OK\r\n\
CACHE-CONTROL: max-age=100\r\n\
location: http://192.168.1.2:80/description.xml\r\n\
ST: upnp:rootdevice\r\n\r\n";
        assert_eq!(
            parse_location(answer),
            Some("http://192.168.1.2:80/description.xml")
        );
    }

    #[test]
    fn no_location_header() {
        assert_eq!(parse_location("HTTP/1.1 200 OK\r\nST: ssdp:all\r\n"), None);
        assert_eq!(parse_location("LOCATION:\r\n"), None);
    }

    #[test]
    fn address_from_location() {
        assert_eq!(
            location_address("http://192.168.1.2:80/description.xml").as_deref(),
            Some("192.168.1.2")
        );
        assert_eq!(
            location_address("http://10.0.0.7:8080/description.xml").as_deref(),
            Some("10.0.0.7:8080")
        );
        assert_eq!(location_address("not a url"), None);
    }

    fn answer(location: &str) -> io::Result<String> {
        Ok(format!("HTTP/1.1 200 OK\r\nLOCATION: {location}\r\n\r\n"))
    }

    #[tokio::test]
    async fn receive_error_stops_collection() {
        let deadline = Instant::now() + Duration::from_secs(60);
        let mut calls = 0;
        let locations = collect_locations(deadline, async || -> io::Result<String> {
            calls += 1;
            Err(io::Error::from(io::ErrorKind::ConnectionRefused))
        })
        .await;

        assert!(locations.is_empty());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn answers_are_deduplicated_in_arrival_order() {
        let deadline = Instant::now() + Duration::from_secs(60);
        let mut replies = vec![
            answer("http://10.0.0.2:80/description.xml"),
            Ok("HTTP/1.1 200 OK\r\nST: ssdp:all\r\n\r\n".to_string()),
            answer("http://10.0.0.1:80/description.xml"),
            answer("http://10.0.0.2:80/description.xml"),
        ]
        .into_iter();
        let locations = collect_locations(deadline, async || -> io::Result<String> {
            replies
                .next()
                .unwrap_or_else(|| Err(io::Error::from(io::ErrorKind::ConnectionReset)))
        })
        .await;

        assert_eq!(
            locations,
            vec![
                "http://10.0.0.2:80/description.xml",
                "http://10.0.0.1:80/description.xml"
            ]
        );
    }

    #[test]
    fn search_message_shape() {
        assert!(M_SEARCH.starts_with("M-SEARCH * HTTP/1.1\r\n"));
        assert!(M_SEARCH.contains("ST: ssdp:all\r\n"));
        assert!(M_SEARCH.ends_with("\r\n\r\n"));
    }
}
