// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `lights` command: light selection plus an action.
//!
//! A command is validated in full before any network activity. A malformed
//! command never reaches the bridge.
//!
//! # Examples
//!
//! ```
//! use hue_client::command::{Action, Intent, LightSelector, LightsCommand};
//! use hue_client::types::Brightness;
//!
//! let cmd = LightsCommand::parse("2,4,6", &["150"]).unwrap();
//! assert_eq!(cmd.selector, LightSelector::Ids(vec!["2".into(), "4".into(), "6".into()]));
//! assert_eq!(cmd.action, Action::Apply(Intent::SetBrightness(Brightness::clamped(150))));
//!
//! assert!(LightsCommand::parse("9", &["blah"]).is_err());
//! ```

mod action;
mod intent;
mod selector;

pub use action::{Action, check_grammar};
pub use intent::Intent;
pub use selector::LightSelector;

use crate::error::Result;
use crate::executor::BatchExecutor;
use crate::protocol::Bridge;
use crate::report::{self, Report};

/// A fully validated `lights` command.
#[derive(Debug, Clone, PartialEq)]
pub struct LightsCommand {
    /// Targeted lights.
    pub selector: LightSelector,
    /// Read or write to perform.
    pub action: Action,
}

impl LightsCommand {
    /// Validates the grammar, then parses the selector and action.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCommand` if the command line does not match the
    /// grammar, or `Error::InvalidArgument` for a malformed argument.
    pub fn parse<S: AsRef<str>>(light_spec: &str, tokens: &[S]) -> Result<Self> {
        check_grammar(light_spec, tokens)?;
        let action = Action::parse(tokens)?;
        Ok(Self {
            selector: LightSelector::parse(light_spec),
            action,
        })
    }

    /// Resolves the targets and runs the action against `bridge`.
    ///
    /// # Errors
    ///
    /// Returns an error if the light list cannot be fetched for `all`, if the
    /// intent cannot be converted (bad hex, xy), or if any read of a report
    /// fails. Per-light write failures are part of the report instead.
    pub async fn execute<B: Bridge>(&self, bridge: &B, executor: &BatchExecutor) -> Result<Report> {
        let targets = self.selector.resolve(bridge).await?;

        match &self.action {
            Action::Report => {
                let lights = executor.query(&targets, bridge).await?;
                Ok(report::render_states(&lights))
            }
            Action::Apply(intent) => {
                let results = executor.apply(&targets, intent, bridge).await?;
                Ok(report::render_results(&results))
            }
        }
    }
}
