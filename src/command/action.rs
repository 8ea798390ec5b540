// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Action parsing and command grammar.
//!
//! | Action | Arguments | Intent |
//! |--------|-----------|--------|
//! | (none) | | report only |
//! | `on` / `off` | | [`Intent::SetPower`] |
//! | `<integer>` | | [`Intent::SetBrightness`], clamped to 254 |
//! | `temp` | `<integer>` | [`Intent::SetColorTemp`], clamped to 153-500 |
//! | `hex` | `<6+ chars>` | [`Intent::SetColorHex`] |
//! | `xy` | `<x> <y>` | [`Intent::SetColorXy`] (rejected on dispatch) |

use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::{Brightness, ColorTemp};

use super::Intent;

static WRITE_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(all|\d+(,\s*\d+)*)\s+(on|off|\d+|temp\s+\d+|hex\s+[a-zA-Z0-9]+|xy\s+\d*\.?\d+\s+\d*\.?\d+)$",
    )
    .expect("write grammar is a valid regex")
});

static LIGHT_SPEC_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(all|\d+(,\s*\d+)*)$").expect("light spec grammar is a valid regex")
});

/// What a `lights` command asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action given: read and display the lights' state.
    Report,
    /// Apply a state change.
    Apply(Intent),
}

impl Action {
    /// Parses the action word and its arguments.
    ///
    /// The action word is case-insensitive. This does not check the full
    /// command grammar; see [`check_grammar`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if an argument is missing or
    /// malformed, or if the action word is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_client::command::{Action, Intent};
    /// use hue_client::types::ColorTemp;
    ///
    /// let action = Action::parse(&["temp", "900"]).unwrap();
    /// assert_eq!(action, Action::Apply(Intent::SetColorTemp(ColorTemp::CANDLE)));
    ///
    /// assert_eq!(Action::parse::<&str>(&[]).unwrap(), Action::Report);
    /// ```
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let Some(word) = tokens.first() else {
            return Ok(Self::Report);
        };
        let word: &str = word.as_ref();
        let word = word.to_ascii_lowercase();
        let arg = |i: usize| -> Option<&str> { tokens.get(i).map(|s| s.as_ref()) };

        let intent = match word.as_str() {
            "on" => Intent::SetPower(true),
            "off" => Intent::SetPower(false),
            "temp" => {
                let mired = arg(1).and_then(parse_saturating).ok_or_else(|| {
                    Error::InvalidArgument(
                        "the 'temp' action requires a numeric color temperature".to_string(),
                    )
                })?;
                Intent::SetColorTemp(ColorTemp::clamped(mired))
            }
            "hex" => match arg(1) {
                Some(hex) if hex.len() >= 6 => Intent::SetColorHex(hex.to_string()),
                _ => {
                    return Err(Error::InvalidArgument(
                        "the 'hex' action requires a hexadecimal color like ab33cc".to_string(),
                    ));
                }
            },
            "xy" => {
                let coord = |i| arg(i).and_then(|s: &str| s.parse::<f64>().ok());
                match (coord(1), coord(2)) {
                    (Some(x), Some(y)) => Intent::SetColorXy(x, y),
                    _ => {
                        return Err(Error::InvalidArgument(
                            "the 'xy' action requires two coordinates".to_string(),
                        ));
                    }
                }
            }
            other => {
                let value = parse_saturating(other).ok_or_else(|| {
                    Error::InvalidArgument(format!("unknown action '{other}'"))
                })?;
                Intent::SetBrightness(Brightness::clamped(value))
            }
        };

        Ok(Self::Apply(intent))
    }
}

/// Parses a non-negative integer, saturating on overflow.
///
/// Overlong digit strings still clamp like any other large value.
fn parse_saturating(s: &str) -> Option<u32> {
    match s.parse::<u32>() {
        Ok(v) => Some(v),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
        Err(_) => None,
    }
}

/// Checks the whole command line against the `lights` grammar.
///
/// The light spec and action word are lowercased first. Returns the
/// normalized command text, which is also what gets echoed back on failure.
///
/// Without an action only the light spec is checked, since the command is a
/// read.
///
/// # Errors
///
/// Returns `Error::InvalidCommand` carrying the command text if it does not
/// match.
///
/// # Examples
///
/// ```
/// use hue_client::command::check_grammar;
///
/// assert!(check_grammar("2,4,6", &["150"]).is_ok());
/// assert!(check_grammar("ALL", &["On"]).is_ok());
/// assert!(check_grammar("9", &["blah"]).is_err());
/// ```
pub fn check_grammar<S: AsRef<str>>(light_spec: &str, tokens: &[S]) -> Result<String> {
    let mut words = vec![light_spec.to_ascii_lowercase()];
    for (i, token) in tokens.iter().enumerate() {
        let token: &str = token.as_ref();
        words.push(if i == 0 {
            token.to_ascii_lowercase()
        } else {
            token.to_string()
        });
    }
    let command = words.join(" ");

    let grammar = if tokens.is_empty() {
        &*LIGHT_SPEC_GRAMMAR
    } else {
        &*WRITE_GRAMMAR
    };

    if grammar.is_match(&command) {
        Ok(command)
    } else {
        Err(Error::InvalidCommand(command))
    }
}
