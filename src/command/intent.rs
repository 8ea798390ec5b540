// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed state changes.

use std::fmt;

use crate::error::{Error, Result};
use crate::protocol::StatePayload;
use crate::types::{Brightness, ColorTemp, hex_to_hue_sat};

/// A validated state change for one or more lights.
///
/// Exactly one intent is derived per command. Every variant except
/// [`Intent::SetPower`] also switches the light on.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Switch the light on or off.
    SetPower(bool),
    /// Set brightness.
    SetBrightness(Brightness),
    /// Set white color temperature.
    SetColorTemp(ColorTemp),
    /// Set a color from six hex digits, converted to hue/saturation on dispatch.
    SetColorHex(String),
    /// Set CIE xy coordinates. Recognized but not supported.
    SetColorXy(f64, f64),
}

impl Intent {
    /// Builds the partial-state body sent to each light.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColor` if a hex color is not exactly six hex
    /// digits, and `Error::Unsupported` for xy colors.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_client::command::Intent;
    /// use hue_client::types::Brightness;
    ///
    /// let payload = Intent::SetBrightness(Brightness::clamped(150)).to_payload().unwrap();
    /// assert_eq!(payload.on, Some(true));
    /// assert_eq!(payload.bri, Some(150));
    /// ```
    pub fn to_payload(&self) -> Result<StatePayload> {
        let payload = match self {
            Self::SetPower(on) => StatePayload {
                on: Some(*on),
                ..StatePayload::default()
            },
            Self::SetBrightness(brightness) => StatePayload {
                on: Some(true),
                bri: Some(brightness.value()),
                ..StatePayload::default()
            },
            Self::SetColorTemp(ct) => StatePayload {
                on: Some(true),
                ct: Some(ct.value()),
                ..StatePayload::default()
            },
            Self::SetColorHex(hex) => {
                let hs = hex_to_hue_sat(hex)?;
                StatePayload {
                    on: Some(true),
                    hue: Some(hs.hue()),
                    sat: Some(hs.saturation()),
                    ..StatePayload::default()
                }
            }
            Self::SetColorXy(..) => return Err(Error::Unsupported("xy color")),
        };
        Ok(payload)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetPower(true) => write!(f, "power on"),
            Self::SetPower(false) => write!(f, "power off"),
            Self::SetBrightness(b) => write!(f, "brightness {b}"),
            Self::SetColorTemp(ct) => write!(f, "color temperature {ct}"),
            Self::SetColorHex(hex) => write!(f, "color {hex}"),
            Self::SetColorXy(x, y) => write!(f, "xy {x}, {y}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueError;

    #[test]
    fn power_payload_leaves_other_fields_out() {
        let on = Intent::SetPower(true).to_payload().unwrap();
        assert_eq!(on, StatePayload { on: Some(true), ..Default::default() });

        let off = Intent::SetPower(false).to_payload().unwrap();
        assert_eq!(off, StatePayload { on: Some(false), ..Default::default() });
    }

    #[test]
    fn brightness_always_switches_on() {
        let payload = Intent::SetBrightness(Brightness::clamped(0)).to_payload().unwrap();
        assert_eq!(payload.on, Some(true));
        assert_eq!(payload.bri, Some(0));
    }

    #[test]
    fn color_temp_payload() {
        let payload = Intent::SetColorTemp(ColorTemp::clamped(250)).to_payload().unwrap();
        assert_eq!(
            payload,
            StatePayload { on: Some(true), ct: Some(250), ..Default::default() }
        );
    }

    #[test]
    fn hex_payload_carries_hue_and_sat() {
        let payload = Intent::SetColorHex("33abf0".into()).to_payload().unwrap();
        assert_eq!(
            payload,
            StatePayload {
                on: Some(true),
                hue: Some(36755),
                sat: Some(219),
                ..Default::default()
            }
        );
    }

    #[test]
    fn hex_payload_rejects_bad_color() {
        let err = Intent::SetColorHex("33abf0ff".into()).to_payload().unwrap_err();
        assert!(matches!(err, Error::InvalidColor(ValueError::InvalidHexColor(_))));
    }

    #[test]
    fn xy_is_unsupported() {
        let err = Intent::SetColorXy(0.3, 0.3).to_payload().unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
    }
}
