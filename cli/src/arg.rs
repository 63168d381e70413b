// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use campus_events_core::{InvalidDatePolicy, RangeFilter};
use clap::{Arg, ArgMatches, arg, value_parser};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FilterArgs;

impl FilterArgs {
    pub fn range() -> Arg {
        arg!(-r --range <RANGE> "Time window of the events")
            .long_help("Time window of the events. Defaults to `default_range` in the config, `week` if unset.")
            .value_parser(value_parser!(RangeFilter))
    }

    pub fn get_range(matches: &ArgMatches) -> Option<RangeFilter> {
        matches.get_one("range").copied()
    }

    pub fn search() -> Arg {
        arg!(-s --search <TEXT> "Only events whose title or description contains the text")
    }

    pub fn get_search(matches: &ArgMatches) -> Option<String> {
        matches.get_one("search").cloned()
    }

    pub fn invalid_date() -> Arg {
        arg!(--"invalid-date" <POLICY> "How to treat events whose date can't be read")
            .value_parser(value_parser!(InvalidDatePolicy))
    }

    pub fn get_invalid_date(matches: &ArgMatches) -> Option<InvalidDatePolicy> {
        matches.get_one("invalid-date").copied()
    }
}
