// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Communication with the bridge.
//!
//! The [`Bridge`] trait is the seam between the command engine and the
//! network: [`BridgeClient`] implements it over HTTP, and the selector and
//! executor only ever see the trait.
//!
//! # Wire contract
//!
//! - Reads: `GET /api/{username}/lights` and `GET /api/{username}/lights/{id}`
//! - Writes: `PUT /api/{username}/lights/{id}/state` with only the changed fields

mod http;
mod response;

#[cfg(test)]
pub(crate) mod fake;

pub(crate) use http::base_url;
pub use http::{BridgeClient, BridgeClientBuilder};
pub use response::{ApiError, ApiResponse, LINK_BUTTON_NOT_PRESSED, LightResult, UNKNOWN_ERROR};

use serde::Serialize;

use crate::error::Result;
use crate::state::{Light, LightMap};
use crate::types::LightId;

/// Partial light state sent in a write.
///
/// Unset fields are left out of the JSON body so the bridge only touches
/// what changed.
///
/// # Examples
///
/// ```
/// use hue_client::protocol::StatePayload;
///
/// let payload = StatePayload { on: Some(true), bri: Some(150), ..Default::default() };
/// assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"on":true,"bri":150}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatePayload {
    /// Power state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    /// Brightness (0-254).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bri: Option<u8>,
    /// Color temperature in mireds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ct: Option<u16>,
    /// Hue (0-65535).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<u16>,
    /// Saturation (0-254).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat: Option<u8>,
}

/// Operations the command engine needs from a bridge.
#[allow(async_fn_in_trait)]
pub trait Bridge {
    /// Returns every light known to the bridge.
    ///
    /// Implementations fetch the list at most once per instance.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Unreachable` on a non-success status,
    /// `ProtocolError::Rejected` when the bridge answers with an error
    /// descriptor and `ProtocolError::Http` when the request itself fails.
    async fn list_lights(&self) -> Result<&LightMap>;

    /// Reads the current state of one light.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status, and
    /// `ProtocolError::Rejected` when the bridge reports an error instead
    /// of the light (an unknown id, for one).
    async fn get_light_state(&self, id: &LightId) -> Result<Light>;

    /// Writes a partial state to one light.
    ///
    /// A rejection by the bridge is a failed [`LightResult`], not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only when the request could not be completed.
    async fn put_light_state(&self, id: &LightId, state: &StatePayload) -> Result<LightResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_omits_unset_fields() {
        let payload = StatePayload {
            on: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({"on": false}));
    }

    #[test]
    fn payload_with_color() {
        let payload = StatePayload {
            on: Some(true),
            hue: Some(36755),
            sat: Some(219),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"on": true, "hue": 36755, "sat": 219})
        );
    }
}
