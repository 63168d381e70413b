// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use campus_events_feed::RemoteEvent;
use jiff::{Span, Timestamp, Zoned};

/// Relative time window of the event feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RangeFilter {
    /// From now until seven days ahead, both ends included.
    #[default]
    Week,
    /// The calendar month of now.
    Month,
    /// The calendar year of now.
    Year,
}

impl RangeFilter {
    /// All ranges in selector order.
    pub const ALL: [RangeFilter; 3] = [RangeFilter::Week, RangeFilter::Month, RangeFilter::Year];

    /// Human readable label of the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            RangeFilter::Week => "This Week",
            RangeFilter::Month => "This Month",
            RangeFilter::Year => "This Year",
        }
    }

    /// Whether an event starting at `date` falls inside the window around `now`.
    #[must_use]
    pub fn contains(self, date: Timestamp, now: &Zoned) -> bool {
        match self {
            RangeFilter::Week => match now.checked_add(Span::new().days(7)) {
                Ok(week_ahead) => now.timestamp() <= date && date <= week_ahead.timestamp(),
                Err(_) => true, // window end is out of range, so nothing is excluded
            },
            RangeFilter::Month => {
                let date = date.to_zoned(now.time_zone().clone());
                date.year() == now.year() && date.month() == now.month()
            }
            RangeFilter::Year => {
                let date = date.to_zoned(now.time_zone().clone());
                date.year() == now.year()
            }
        }
    }
}

impl fmt::Display for RangeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeFilter::Week => write!(f, "week"),
            RangeFilter::Month => write!(f, "month"),
            RangeFilter::Year => write!(f, "year"),
        }
    }
}

impl FromStr for RangeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(RangeFilter::Week),
            "month" => Ok(RangeFilter::Month),
            "year" => Ok(RangeFilter::Year),
            _ => Err(format!("Invalid range: {s}, expected one of week, month, year")),
        }
    }
}

/// What to do with events whose date doesn't parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum InvalidDatePolicy {
    /// Treat the event as starting at the reference instant.
    #[default]
    Now,
    /// Leave the event out.
    Drop,
}

/// Time window plus search text over the remote event working set.
///
/// Filtering is pure: the reference instant is always passed in, and the
/// output keeps the input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Time window.
    pub range: RangeFilter,
    /// Case-insensitive substring searched in title and description.
    pub search: String,
    /// Handling of unparsable dates.
    pub invalid_date: InvalidDatePolicy,
}

impl EventFilter {
    /// Creates a filter for the given window with no search text.
    pub fn new(range: RangeFilter) -> Self {
        Self {
            range,
            ..Default::default()
        }
    }

    /// Sets the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the invalid date policy.
    pub fn with_invalid_date(mut self, policy: InvalidDatePolicy) -> Self {
        self.invalid_date = policy;
        self
    }

    /// Applies the time window, then the search text.
    pub fn apply<'a>(&self, events: &'a [RemoteEvent], now: &Zoned) -> Vec<&'a RemoteEvent> {
        let by_range = filter_by_range(events, self.range, now, self.invalid_date);
        filter_by_text(by_range, &self.search)
    }
}

/// Keeps events inside the time window around `now`.
pub fn filter_by_range<'a>(
    events: &'a [RemoteEvent],
    range: RangeFilter,
    now: &Zoned,
    policy: InvalidDatePolicy,
) -> Vec<&'a RemoteEvent> {
    events
        .iter()
        .filter(|event| {
            let date = match (event.parse_date(), policy) {
                (Ok(date), _) => date,
                (Err(_), InvalidDatePolicy::Now) => now.timestamp(),
                (Err(e), InvalidDatePolicy::Drop) => {
                    tracing::debug!(id = %event.id, err = %e, "dropping event with invalid date");
                    return false;
                }
            };
            range.contains(date, now)
        })
        .collect()
}

/// Keeps events whose title or description contains `search`, ignoring case.
///
/// Blank search text keeps everything.
pub fn filter_by_text<'a>(events: Vec<&'a RemoteEvent>, search: &str) -> Vec<&'a RemoteEvent> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return events;
    }

    events
        .into_iter()
        .filter(|event| {
            event.title.to_lowercase().contains(&needle)
                || event.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The first `limit` events of the working set, as shown on the home screen.
pub fn preview(events: &[RemoteEvent], limit: usize) -> &[RemoteEvent] {
    events.get(..limit).unwrap_or(events)
}
