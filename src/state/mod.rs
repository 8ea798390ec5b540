// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state snapshots as returned by the bridge.
//!
//! Snapshots are read-only and live for a single report. The only cache is
//! the light list held by [`BridgeClient`](crate::protocol::BridgeClient).
//!
//! # Examples
//!
//! ```
//! use hue_client::state::{ColorMode, Light};
//!
//! let json = r#"{"name": "Desk", "state": {"on": true, "bri": 200, "colormode": "ct", "ct": 300}}"#;
//! let light: Light = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(light.name, "Desk");
//! assert_eq!(light.state.color_mode, ColorMode::ColorTemp);
//! assert_eq!(light.state.color_temp, Some(300));
//! ```

mod light_state;

pub use light_state::{ColorMode, Light, LightMap, LightState};
