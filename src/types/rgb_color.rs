// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex parsing and hue/saturation conversion.
//!
//! The bridge has no RGB input. A hex color is parsed as sRGB, converted to
//! HSL, and only the hue and saturation are sent. Lightness is dropped:
//! brightness is always set separately.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::HueSat;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use hue_client::types::RgbColor;
///
/// let red = RgbColor::from_hex("ff0000").unwrap();
/// let hs = red.to_hue_sat();
/// assert_eq!(hs.hue(), 0);
/// assert_eq!(hs.saturation(), 254);
///
/// assert!(RgbColor::from_hex("#ff0000").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses an RGB color from exactly six hexadecimal digits (`RRGGBB`).
    ///
    /// No `#` prefix and no short `RGB` form are accepted. Digits are
    /// case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the input is not exactly six
    /// hexadecimal digits.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }

        let r = parse_hex_pair(&hex[0..2])?;
        let g = parse_hex_pair(&hex[2..4])?;
        let b = parse_hex_pair(&hex[4..6])?;
        Ok(Self::new(r, g, b))
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as lowercase hex without a prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Converts this color to bridge hue (0-65535) and saturation (0-254).
    ///
    /// The HSL hue fraction is scaled linearly onto 0-65535 and the HSL
    /// saturation fraction onto 0-254, both rounded to the nearest integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_client::types::RgbColor;
    ///
    /// let green = RgbColor::new(0, 255, 0).to_hue_sat();
    /// assert_eq!(green.hue(), 21845);
    /// assert_eq!(green.saturation(), 254);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_hue_sat(&self) -> HueSat {
        let (h, s) = rgb_to_hue_sat_fractions(self.red, self.green, self.blue);
        let hue = (h * 65535.0).round().clamp(0.0, 65535.0) as u16;
        let sat = (s * 254.0).round().clamp(0.0, 254.0) as u8;
        HueSat::new(hue, sat)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Converts a six-digit hex color straight to bridge hue/saturation.
///
/// # Errors
///
/// Returns `ValueError::InvalidHexColor` if the input is not exactly six
/// hexadecimal digits.
pub fn hex_to_hue_sat(hex: &str) -> Result<HueSat, ValueError> {
    RgbColor::from_hex(hex).map(|rgb| rgb.to_hue_sat())
}

fn parse_hex_pair(s: &str) -> Result<u8, ValueError> {
    u8::from_str_radix(s, 16).map_err(|_| ValueError::InvalidHexColor(s.to_string()))
}

/// Converts RGB to HSL and returns the (hue, saturation) fractions in 0.0-1.0.
#[allow(clippy::many_single_char_names)]
fn rgb_to_hue_sat_fractions(r: u8, g: u8, b: u8) -> (f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // Achromatic: any gray, including black and white
    if delta < f64::EPSILON {
        return (0.0, 0.0);
    }

    let sum = max + min;
    let lightness = sum / 2.0;
    let saturation = if lightness < 0.5 {
        delta / sum
    } else {
        delta / (2.0 - sum)
    };

    let sector = if (max - r).abs() < f64::EPSILON {
        ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (sector / 6.0, saturation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_valid() {
        let color = RgbColor::from_hex("33abf0").unwrap();
        assert_eq!(color.red(), 0x33);
        assert_eq!(color.green(), 0xab);
        assert_eq!(color.blue(), 0xf0);

        let upper = RgbColor::from_hex("33ABF0").unwrap();
        assert_eq!(color, upper);
    }

    #[test]
    fn from_hex_rejects_malformed() {
        assert!(RgbColor::from_hex("zz0000").is_err());
        assert!(RgbColor::from_hex("fff").is_err());
        assert!(RgbColor::from_hex("#ff0000").is_err());
        assert!(RgbColor::from_hex("ff00000").is_err());
        assert!(RgbColor::from_hex("+f0000").is_err());
        assert!(RgbColor::from_hex("").is_err());
    }

    #[test]
    fn primaries_map_onto_bridge_wheel() {
        assert_eq!(hex_to_hue_sat("ff0000").unwrap(), HueSat::new(0, 254));
        assert_eq!(hex_to_hue_sat("00ff00").unwrap(), HueSat::new(21845, 254));
        assert_eq!(hex_to_hue_sat("0000ff").unwrap(), HueSat::new(43690, 254));
    }

    #[test]
    fn mixed_color_conversion() {
        let hs = hex_to_hue_sat("33abf0").unwrap();
        assert_eq!(hs.hue(), 36755);
        assert_eq!(hs.saturation(), 219);

        let orange = hex_to_hue_sat("ff8000").unwrap();
        assert_eq!(orange.hue(), 5483);
        assert_eq!(orange.saturation(), 254);
    }

    #[test]
    fn grays_have_no_saturation() {
        for hex in ["000000", "808080", "ffffff"] {
            assert_eq!(hex_to_hue_sat(hex).unwrap(), HueSat::new(0, 0), "{hex}");
        }
    }

    #[test]
    fn lightness_is_discarded() {
        // Dark and light variants of the same hue share hue and saturation
        let dark = hex_to_hue_sat("800000").unwrap();
        let bright = hex_to_hue_sat("ff0000").unwrap();
        assert_eq!(dark, bright);
    }

    #[test]
    fn conversion_is_deterministic() {
        assert_eq!(hex_to_hue_sat("a1b2c3"), hex_to_hue_sat("a1b2c3"));
    }

    #[test]
    fn to_hex_and_parse() {
        let color: RgbColor = "0a0B0c".parse().unwrap();
        assert_eq!(color.to_string(), "0a0b0c");
    }
}
