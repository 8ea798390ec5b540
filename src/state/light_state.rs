// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light and light state snapshots.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::LightId;

/// All lights known to the bridge, keyed by id.
pub type LightMap = BTreeMap<LightId, Light>;

/// A light as described by `GET /api/{user}/lights/{id}`.
///
/// Only the fields the client displays are decoded; everything else in the
/// bridge's description is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Light {
    /// User-assigned light name.
    #[serde(default)]
    pub name: String,
    /// Current state of the light.
    #[serde(default)]
    pub state: LightState,
}

/// Color mode the light is currently in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ColorMode {
    /// White color temperature (`ct`).
    #[serde(rename = "ct")]
    ColorTemp,
    /// Hue and saturation (`hs`).
    #[serde(rename = "hs")]
    HueSat,
    /// CIE xy coordinates (`xy`).
    #[serde(rename = "xy")]
    Xy,
    /// No color information (dimmable-only lights), or a mode this client
    /// does not know. Must stay the last variant.
    #[default]
    #[serde(other)]
    None,
}

/// Per-light state snapshot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LightState {
    /// Whether the light is on.
    #[serde(default)]
    pub on: bool,
    /// Brightness (0-254).
    #[serde(default, rename = "bri")]
    pub brightness: u8,
    /// Current color mode.
    #[serde(default, rename = "colormode")]
    pub color_mode: ColorMode,
    /// Color temperature in mireds (153-500).
    #[serde(default, rename = "ct")]
    pub color_temp: Option<u16>,
    /// Hue (0-65535).
    #[serde(default)]
    pub hue: Option<u16>,
    /// Saturation (0-254).
    #[serde(default, rename = "sat")]
    pub saturation: Option<u8>,
    /// CIE xy coordinates.
    #[serde(default)]
    pub xy: Option<(f64, f64)>,
}
