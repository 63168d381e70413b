// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of the Campus Events Hub.

mod arg;
mod cli;
mod cmd_dashboard;
mod cmd_feed;
mod config;
mod event_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_dashboard::CmdDashboard;
pub use crate::cmd_feed::CmdFeedList;
pub use crate::config::parse_config;
pub use crate::util::OutputFormat;
