// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use campus_events_core::{APP_NAME, EventsHub};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_feed::CmdFeedList;
use crate::config::parse_config;

const LOG_ENV: &str = "CAMPUS_EVENTS_LOG";

/// Run the Campus Events Hub command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Browse campus and UAE events from the terminal.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $CAMPUS_EVENTS_CONFIG, then \
$XDG_CONFIG_HOME/campus-events/config.toml on Linux and MacOS, \
%APPDATA%/campus-events/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDashboard::command())
            .subcommand(
                Command::new("feed")
                    .alias("f")
                    .about("Browse the remote event feed")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdFeedList::command()),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Commands::Dashboard(CmdDashboard::from(matches)),
            Some(("feed", matches)) => match matches.subcommand() {
                Some((CmdFeedList::NAME, matches)) => {
                    Commands::FeedList(CmdFeedList::from(matches))
                }
                _ => return Err("Unknown feed command".into()),
            },
            None => Commands::Dashboard(CmdDashboard),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the dashboard
    Dashboard(CmdDashboard),

    /// List events of the remote feed
    FeedList(CmdFeedList),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        match self {
            Commands::Dashboard(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Commands::FeedList(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut EventsHub) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let mut hub = EventsHub::new(config)?;
        f(&mut hub).await
    }
}
