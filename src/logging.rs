// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Diagnostic logging for the binary.
//!
//! Logs go to stderr so they never mix with tables and status lines on
//! stdout.

use std::io;

use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default filter directive.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "hue_client=warn",
        1 => "hue_client=info",
        _ => "hue_client=debug",
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "hue_client=warn");
        assert_eq!(default_directive(1), "hue_client=info");
        assert_eq!(default_directive(5), "hue_client=debug");
    }
}
