// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hue Client - control the lights behind a Hue bridge.
//!
//! This library backs the `hue-client` command-line tool. It talks to a
//! bridge over its local HTTP API: listing lights, reading their state and
//! writing partial state changes.
//!
//! # Supported Features
//!
//! - **Power control**: turn lights on or off
//! - **Brightness**: 0-254, larger values are clamped
//! - **Color**: color temperature in mireds, or an RGB hex code converted
//!   to hue/saturation
//! - **Reports**: a state table for any selection of lights
//! - **Setup**: SSDP bridge discovery and link-button pairing
//!
//! # Quick Start
//!
//! ```no_run
//! use hue_client::command::LightsCommand;
//! use hue_client::executor::BatchExecutor;
//! use hue_client::protocol::BridgeClient;
//!
//! #[tokio::main]
//! async fn main() -> hue_client::Result<()> {
//!     let client = BridgeClient::new("192.168.1.2", "my-username")?;
//!
//!     // Same grammar as `hue-client lights 2,4,6 hex 33abf0`
//!     let cmd = LightsCommand::parse("2,4,6", &["hex", "33abf0"])?;
//!     let report = cmd.execute(&client, &BatchExecutor::new()).await?;
//!
//!     print!("{}", report.text);
//!     Ok(())
//! }
//! ```
//!
//! # Command Grammar
//!
//! ```text
//! lights <all | id[,id...]> [on | off | <brightness> | temp <mireds> | hex <rrggbb> | xy <x> <y>]
//! ```
//!
//! Without an action the selected lights are reported. A command that does
//! not match the grammar is rejected before any request is sent.

pub mod command;
pub mod config;
pub mod discovery;
pub mod error;
pub mod executor;
pub mod pairing;
pub mod protocol;
pub mod report;
pub mod state;
pub mod types;

pub use command::{Action, Intent, LightSelector, LightsCommand};
pub use config::BridgeConfig;
pub use error::{
    ConfigError, Error, PairingError, ParseError, ProtocolError, Result, ValueError,
};
pub use executor::{BatchExecutor, ResultMap};
pub use protocol::{Bridge, BridgeClient, BridgeClientBuilder, LightResult};
pub use report::Report;
pub use state::{ColorMode, Light, LightMap, LightState};
pub use types::{Brightness, ColorTemp, HueSat, LightId, RgbColor, hex_to_hue_sat};
