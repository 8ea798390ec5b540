// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for light control.
//!
//! Each type holds a value already brought into the bridge's native range,
//! so payloads built from them never need further validation.
//!
//! # Types
//!
//! - [`LightId`] - Light identifier, compared as an exact string
//! - [`Brightness`] - Brightness level (0-254, upper clamp only)
//! - [`ColorTemp`] - Color temperature in mireds (153-500)
//! - [`HueSat`] - Hue (0-65535) and saturation (0-254)
//! - [`RgbColor`] - Six-digit hex color, converted to [`HueSat`]

mod brightness;
mod color;
mod light_id;
mod rgb_color;

pub use brightness::Brightness;
pub use color::{ColorTemp, HueSat};
pub use light_id::LightId;
pub use rgb_color::{RgbColor, hex_to_hue_sat};
