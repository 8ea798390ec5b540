// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI argument definitions.

use std::path::PathBuf;
use std::time::Duration;

use clap::{CommandFactory, Parser, Subcommand};

/// Control the lights behind a Hue bridge.
#[derive(Parser, Debug)]
#[command(name = "hue-client", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file [default: <config dir>/hue-client/config.json]
    #[arg(long, global = true, value_name = "FILE", env = "HUE_CLIENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output (-v for progress, -vv for requests)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Returns the request timeout.
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look for Hue bridges and print their addresses
    Search,

    /// Register an authorized user on your bridge
    Register {
        /// Bridge address, as printed by 'search'
        ip: String,
    },

    /// Get status and make changes to lights
    ///
    /// LIGHT_SPEC is either the ID of a light, or a list of IDs separated
    /// by commas, or the word 'all'.
    ///
    /// The ACTION can be 'on', 'off', or a number to set the brightness
    /// value. If no ACTION is given, the status of the specified lights
    /// is printed.
    ///
    /// Examples:
    ///
    ///   lights all on
    ///   lights 5 off
    ///   lights 1,2,3 on
    ///   lights 2,4,6 150
    ///   lights 1 temp 250
    ///   lights 5 hex 33abf0
    ///
    /// Color temperature ranges from 153 to 500. Hex is a six-character
    /// color value without the leading '#'.
    #[command(verbatim_doc_comment)]
    Lights {
        /// Light ID, comma-separated IDs, or 'all'
        light_spec: String,

        /// on | off | <brightness> | temp <mireds> | hex <rrggbb>
        #[arg(value_name = "ACTION", trailing_var_arg = true)]
        action: Vec<String>,
    },
}

/// Renders the help text of the `lights` subcommand.
pub fn lights_help() -> String {
    Cli::command()
        .find_subcommand_mut("lights")
        .map(|cmd| cmd.render_long_help().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lights_collects_action_words() {
        let cli = Cli::parse_from(["hue-client", "lights", "1", "temp", "250"]);
        match cli.command {
            Commands::Lights { light_spec, action } => {
                assert_eq!(light_spec, "1");
                assert_eq!(action, vec!["temp", "250"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["hue-client", "-vv", "search"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn lights_help_mentions_examples() {
        let help = lights_help();
        assert!(help.contains("lights 2,4,6 150"));
        assert!(help.contains("LIGHT_SPEC"));
    }
}
