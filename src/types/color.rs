// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color types for light control.
//!
//! This module provides the color temperature and hue/saturation values in
//! the bridge's native ranges.

use std::fmt;

/// Color temperature in mireds (153-500).
///
/// The bridge uses mireds for color temperature, where lower values are
/// cooler (bluer) and higher values are warmer (more orange/yellow).
///
/// - 153 (6500K) - Cool daylight
/// - 250 (4000K) - Neutral white
/// - 500 (2000K) - Warm candlelight
///
/// # Examples
///
/// ```
/// use hue_client::types::ColorTemp;
///
/// assert_eq!(ColorTemp::clamped(250).value(), 250);
/// assert_eq!(ColorTemp::clamped(100), ColorTemp::COOL);
/// assert_eq!(ColorTemp::clamped(9000), ColorTemp::CANDLE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorTemp(u16);

impl ColorTemp {
    /// Minimum color temperature (coolest, ~6500K).
    pub const MIN: u16 = 153;

    /// Maximum color temperature (warmest, ~2000K).
    pub const MAX: u16 = 500;

    /// Cool daylight (~6500K).
    pub const COOL: Self = Self(Self::MIN);

    /// Candlelight (~2000K).
    pub const CANDLE: Self = Self(Self::MAX);

    /// Creates a color temperature, clamping to the valid range at both ends.
    #[must_use]
    pub fn clamped(value: u32) -> Self {
        let clamped = value.clamp(u32::from(Self::MIN), u32::from(Self::MAX));
        Self(u16::try_from(clamped).unwrap_or(Self::MAX))
    }

    /// Returns the color temperature value in mireds.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for ColorTemp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hue and saturation in the bridge's native ranges.
///
/// Hue covers the full color wheel over 0-65535 (both ends are red);
/// saturation runs from 0 (white) to 254 (fully saturated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HueSat {
    hue: u16,
    saturation: u8,
}

impl HueSat {
    /// Maximum saturation value.
    pub const MAX_SATURATION: u8 = 254;

    /// Creates a hue/saturation pair, clamping saturation to 254.
    #[must_use]
    pub const fn new(hue: u16, saturation: u8) -> Self {
        let saturation = if saturation > Self::MAX_SATURATION {
            Self::MAX_SATURATION
        } else {
            saturation
        };
        Self { hue, saturation }
    }

    /// Returns the hue (0-65535).
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Returns the saturation (0-254).
    #[must_use]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }
}

impl fmt::Display for HueSat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hue {}, sat {}", self.hue, self.saturation)
    }
}
