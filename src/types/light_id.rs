// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a light, in the bridge's own string form.
///
/// Equality is string-exact: `"5"` and `"05"` are different lights as far as
/// this crate is concerned. Unknown ids are only detected when the bridge
/// rejects them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LightId(String);

impl LightId {
    /// Creates an id from its textual form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as it is sent to the bridge.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LightId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LightId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_string_exact() {
        assert_eq!(LightId::from("5"), LightId::new("5".to_string()));
        assert_ne!(LightId::from("5"), LightId::from("05"));
    }

    #[test]
    fn deserializes_from_json_key() {
        let id: LightId = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(id.as_str(), "12");
    }
}
