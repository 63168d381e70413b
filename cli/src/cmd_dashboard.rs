// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_events_core::EventsHub;
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::event_formatter::{EventColumn, EventFormatter};

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show the dashboard, a preview of the latest UAE events")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDashboard
    }

    /// Fetch the feed and show its first events, unfiltered.
    pub async fn run(self, hub: &mut EventsHub) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");
        hub.refresh().await;
        let events = hub.preview()?;

        println!("🗓️ {}", "UAE Events".bold());
        if events.is_empty() {
            println!("No upcoming events");
            return Ok(());
        }

        let columns = vec![
            EventColumn::date(),
            EventColumn::title(),
            EventColumn::venue(),
        ];
        let formatter = EventFormatter::new(hub.now().clone(), columns);
        println!("{}", formatter.format(&events));
        Ok(())
    }
}
