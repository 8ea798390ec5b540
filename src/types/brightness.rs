// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for the bridge `bri` field.

use std::fmt;

/// Brightness level on the bridge scale (0-254).
///
/// Values above 254 are clamped down. There is no lower clamp: a brightness
/// of 0 is sent as-is, together with `on: true`, and the bridge decides what
/// it looks like.
///
/// # Examples
///
/// ```
/// use hue_client::types::Brightness;
///
/// assert_eq!(Brightness::clamped(150).value(), 150);
/// assert_eq!(Brightness::clamped(1000).value(), 254);
/// assert_eq!(Brightness::clamped(0).value(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    /// Lowest value passed through to the bridge.
    pub const MIN: Self = Self(0);

    /// Brightest value the bridge accepts.
    pub const MAX: Self = Self(254);

    /// Creates a brightness value, clamping anything above 254.
    #[must_use]
    pub fn clamped(value: u32) -> Self {
        // min() keeps the value within u8 range
        Self(u8::try_from(value.min(254)).unwrap_or(254))
    }

    /// Returns the raw bridge value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
