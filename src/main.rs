// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `hue-client` - command-line control for a Hue bridge.

mod cli;
mod logging;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Commands};
use hue_client::discovery::{self, DiscoveryOptions};
use hue_client::pairing::{self, PairingOptions};
use hue_client::{BatchExecutor, BridgeConfig, ConfigError, Error, LightsCommand, PairingError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Search => cmd_search(&cli).await,
        Commands::Register { ip } => cmd_register(&cli, ip).await,
        Commands::Lights { light_spec, action } => cmd_lights(&cli, light_spec, action).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Prints a user-facing message for a command that could not complete.
fn report_error(error: &Error) {
    match error {
        Error::Config(ConfigError::Missing { path }) => {
            println!("Could not read {}.", path.display());
            println!("You may need to run the 'register' command to get set up.");
        }
        Error::Pairing(PairingError::Unreachable(address)) => {
            println!("Could not communicate with {address}. Check the IP, or run 'search'.");
        }
        Error::InvalidArgument(message) => {
            println!("{}.", capitalize(message));
        }
        other => {
            tracing::debug!(error = ?other, "Command failed");
            eprintln!("Error: {other}");
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn config_path(cli: &Cli) -> hue_client::Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(BridgeConfig::default_path()?),
    }
}

async fn cmd_search(cli: &Cli) -> hue_client::Result<ExitCode> {
    println!("Looking for Hue bridges...");

    let options = DiscoveryOptions::new();
    let candidates = discovery::discover_candidates(&options).await?;
    if candidates.is_empty() {
        println!("No devices answered.");
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "Found {} possible devices, one moment...",
        candidates.len()
    );
    let bridges = discovery::filter_bridges(&candidates, cli.timeout()).await?;

    if bridges.is_empty() {
        println!("No bridges found.");
    } else {
        println!("\nBridges found:");
        for (i, address) in bridges.iter().enumerate() {
            println!("{}\t{address}", i + 1);
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn cmd_register(cli: &Cli, ip: &str) -> hue_client::Result<ExitCode> {
    let path = config_path(cli)?;
    let options = PairingOptions::new().with_timeout(cli.timeout());

    println!("Please press the button on your Hue bridge...");
    print!("Waiting...");
    let _ = io::stdout().flush();

    let outcome = pairing::pair(ip, &options, |remaining| {
        print!(" {remaining}");
        let _ = io::stdout().flush();
    })
    .await;

    let username = match outcome {
        Ok(username) => {
            println!(" Bingo!");
            username
        }
        Err(Error::Pairing(PairingError::TimedOut { .. })) => {
            println!();
            println!("The button was not pressed in time. Run 'register' again to retry.");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            println!();
            return Err(e);
        }
    };

    let config = BridgeConfig::new(ip, username.as_str());
    config.save(&path)?;

    match config.into_client(cli.timeout())?.get_configuration().await {
        Ok(bridge) => {
            let name = bridge.get("name").and_then(|n| n.as_str()).unwrap_or("unnamed");
            tracing::info!(bridge = %name, "Paired with bridge");
        }
        Err(e) => tracing::debug!(error = %e, "Could not read bridge configuration"),
    }
    println!("\nRegistered user {username}.");
    Ok(ExitCode::SUCCESS)
}

async fn cmd_lights(cli: &Cli, light_spec: &str, action: &[String]) -> hue_client::Result<ExitCode> {
    let command = match LightsCommand::parse(light_spec, action) {
        Ok(command) => command,
        Err(Error::InvalidCommand(cmd)) => {
            println!("Your command \"{cmd}\" had an error.");
            println!("{}", cli::lights_help());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e),
    };

    let config = BridgeConfig::load(&config_path(cli)?)?;
    let client = config.into_client(cli.timeout())?;

    let report = command.execute(&client, &BatchExecutor::new()).await?;
    print!("{}", report.text);
    Ok(report.exit_code())
}
