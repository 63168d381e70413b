// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_events_core::{EventFilter, EventsHub, InvalidDatePolicy, RangeFilter};
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::{CommonArgs, FilterArgs};
use crate::event_formatter::{EventColumn, EventFormatter};
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdFeedList {
    pub range: Option<RangeFilter>,
    pub search: Option<String>,
    pub invalid_date: Option<InvalidDatePolicy>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdFeedList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events of the remote feed within a time window")
            .arg(FilterArgs::range())
            .arg(FilterArgs::search())
            .arg(FilterArgs::invalid_date())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            range: FilterArgs::get_range(matches),
            search: FilterArgs::get_search(matches),
            invalid_date: FilterArgs::get_invalid_date(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, hub: &mut EventsHub) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing feed events...");
        hub.refresh().await;

        let filter = self.filter(hub);
        let events = hub.list(&filter)?;

        let mut columns = vec![
            EventColumn::date(),
            EventColumn::title(),
            EventColumn::venue(),
        ];
        if self.verbose {
            columns.extend([EventColumn::source(), EventColumn::link(), EventColumn::id()]);
        }
        let formatter =
            EventFormatter::new(hub.now().clone(), columns).with_output_format(self.output_format);

        match self.output_format {
            OutputFormat::Json => println!("{}", formatter.format(&events)),
            OutputFormat::Table => {
                println!(" {} {}", "►".green(), filter.range.label().italic());
                if events.is_empty() {
                    println!("No events found");
                } else {
                    println!("{}", formatter.format(&events));
                }
            }
        }
        Ok(())
    }

    /// The configured defaults, overridden by the given flags.
    fn filter(&self, hub: &EventsHub) -> EventFilter {
        let mut filter = hub.default_filter();
        if let Some(range) = self.range {
            filter.range = range;
        }
        if let Some(policy) = self.invalid_date {
            filter.invalid_date = policy;
        }
        if let Some(search) = &self.search {
            filter = filter.with_search(search.clone());
        }
        filter
    }
}
