// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_events_feed::FeedConfig;
use jiff::tz::TimeZone;

use crate::filter::{InvalidDatePolicy, RangeFilter};

/// The name of the application.
pub const APP_NAME: &str = "campus-events";

/// Configuration for the Campus Events Hub core.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Remote event feed.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Number of events in the preview strip.
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,

    /// Time window used when none is requested.
    #[serde(default)]
    pub default_range: RangeFilter,

    /// What to do with events whose date doesn't parse.
    #[serde(default)]
    pub invalid_date: InvalidDatePolicy,

    /// IANA time zone for calendar windows, the system zone if unset.
    #[serde(default)]
    pub timezone: Option<String>,
}

const fn default_preview_limit() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            preview_limit: default_preview_limit(),
            default_range: RangeFilter::default(),
            invalid_date: InvalidDatePolicy::default(),
            timezone: None,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        self.feed.endpoint = self.feed.endpoint.trim().to_string();
        if self.feed.timeout_secs == 0 {
            return Err("feed.timeout_secs must be greater than zero".into());
        }

        self.timezone = self
            .timezone
            .take()
            .map(|tz| tz.trim().to_string())
            .filter(|tz| !tz.is_empty());
        Ok(())
    }

    /// Time zone that defines calendar months and years.
    pub fn time_zone(&self) -> Result<TimeZone, Box<dyn Error>> {
        match &self.timezone {
            Some(name) => {
                TimeZone::get(name).map_err(|e| format!("Unknown time zone {name}: {e}").into())
            }
            None => Ok(TimeZone::system()),
        }
    }
}
