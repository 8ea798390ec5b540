// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of bridge write responses.
//!
//! Writes answer with a JSON array whose elements are either
//! `{"success": {...}}` or `{"error": {"type": .., "address": .., "description": ..}}`.
//! Only the first element decides the outcome.

use serde::Deserialize;
use serde_json::Value;

/// Detail recorded when a response has neither a success nor an error shape.
pub const UNKNOWN_ERROR: &str = "Unknown error.";

/// Bridge error type sent while the link button has not been pressed.
pub const LINK_BUTTON_NOT_PRESSED: u16 = 101;

/// Error descriptor from a bridge response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Numeric bridge error type.
    #[serde(rename = "type", default)]
    pub kind: u16,
    /// Resource the error refers to.
    #[serde(default)]
    pub address: String,
    /// Human-readable description.
    pub description: String,
}

/// First element of a bridge response, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The element carries a `success` object.
    Success(Value),
    /// The element carries a well-formed `error` descriptor.
    Error(ApiError),
    /// Anything else: not JSON, not an array, empty, or an unrecognized element.
    Unknown,
}

impl ApiResponse {
    /// Classifies a raw response body.
    ///
    /// The success shape is tried first, then the error shape; everything
    /// else is [`ApiResponse::Unknown`].
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        let Ok(Value::Array(items)) = serde_json::from_str::<Value>(body) else {
            return Self::Unknown;
        };
        let Some(Value::Object(first)) = items.into_iter().next() else {
            return Self::Unknown;
        };

        if let Some(success) = first.get("success") {
            return Self::Success(success.clone());
        }

        match first.get("error").cloned().map(serde_json::from_value::<ApiError>) {
            Some(Ok(error)) => Self::Error(error),
            _ => Self::Unknown,
        }
    }
}

/// Outcome of a write to one light.
///
/// `detail` is empty on success and holds the bridge's description on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightResult {
    /// Whether the bridge accepted the change.
    pub success: bool,
    /// Failure description, empty on success.
    pub detail: String,
}

impl LightResult {
    /// A successful write.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            detail: String::new(),
        }
    }

    /// A failed write with the given description.
    #[must_use]
    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            detail: detail.into(),
        }
    }
}

impl From<ApiResponse> for LightResult {
    fn from(response: ApiResponse) -> Self {
        match response {
            ApiResponse::Success(_) => Self::ok(),
            ApiResponse::Error(error) => Self::failed(error.description),
            ApiResponse::Unknown => Self::failed(UNKNOWN_ERROR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_shape() {
        let body = r#"[{"success": {"/lights/1/state/on": true}}]"#;
        let response = ApiResponse::from_body(body);
        assert!(matches!(response, ApiResponse::Success(_)));
        assert_eq!(LightResult::from(response), LightResult::ok());
    }

    #[test]
    fn error_shape() {
        let body = r#"[{"error": {"type": 3, "address": "/lights/9/state", "description": "resource, /lights/9/state, not available"}}]"#;
        let response = ApiResponse::from_body(body);
        let ApiResponse::Error(error) = &response else {
            panic!("expected error shape, got {response:?}");
        };
        assert_eq!(error.kind, 3);
        assert_eq!(error.address, "/lights/9/state");
        assert_eq!(
            LightResult::from(response),
            LightResult::failed("resource, /lights/9/state, not available")
        );
    }

    #[test]
    fn only_first_element_counts() {
        let body = r#"[{"success": {"/lights/1/state/on": true}}, {"error": {"type": 7, "description": "invalid value"}}]"#;
        assert!(matches!(ApiResponse::from_body(body), ApiResponse::Success(_)));
    }

    #[test]
    fn malformed_shapes_are_unknown() {
        for body in [
            "",
            "not json",
            "{}",
            "[]",
            "[1]",
            r#"[{"something": 1}]"#,
            r#"[{"error": {"type": 3}}]"#,
        ] {
            assert_eq!(ApiResponse::from_body(body), ApiResponse::Unknown, "{body}");
        }
    }

    #[test]
    fn unknown_maps_to_fixed_detail() {
        let result = LightResult::from(ApiResponse::Unknown);
        assert!(!result.success);
        assert_eq!(result.detail, "Unknown error.");
    }
}
