// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::Timestamp;
use uuid::Uuid;

/// Local identity of a decoded event.
///
/// Generated once when a record is decoded and never sent back to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(Uuid);

impl EventId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An event from the remote feed.
///
/// Fields mirror the wire format; `id` is skipped by serde in both directions.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RemoteEvent {
    /// Local identity, see [`EventId`].
    #[serde(skip)]
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// City the event takes place in.
    pub city: String,
    /// Venue name.
    pub venue: String,
    /// Start time as an ISO-8601 date-time string.
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    /// Free-text description, may be empty.
    pub description: String,
    /// Provenance label.
    pub source: String,
    /// Poster image URL.
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
    /// External detail page.
    #[serde(default)]
    pub link: Option<String>,
}

impl RemoteEvent {
    /// Parses `dateISO` as an internet date-time with a UTC offset.
    ///
    /// Only `YYYY-MM-DDTHH:MM:SS` followed by `Z` or `±HH:MM` is accepted.
    /// Fractional seconds, basic format, lowercase designators and bracketed
    /// time zone annotations are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid date-time.
    pub fn parse_date(&self) -> Result<Timestamp, DateParseError> {
        let err = |reason: String| DateParseError {
            input: self.date_iso.clone(),
            reason,
        };

        if !is_internet_date_time(&self.date_iso) {
            return Err(err(
                "expected YYYY-MM-DDTHH:MM:SS followed by Z or ±HH:MM".to_string(),
            ));
        }
        self.date_iso
            .parse::<Timestamp>()
            .map_err(|e| err(e.to_string()))
    }

    /// The event start, or `fallback` when `dateISO` doesn't parse.
    #[must_use]
    pub fn event_date_or(&self, fallback: Timestamp) -> Timestamp {
        self.parse_date().unwrap_or(fallback)
    }

    /// The event start, or the current time when `dateISO` doesn't parse.
    ///
    /// The clock is read on every call, not at decode time.
    #[must_use]
    pub fn event_date(&self) -> Timestamp {
        self.parse_date().unwrap_or_else(|_| Timestamp::now())
    }

    /// `"<venue>, <city>"`.
    #[must_use]
    pub fn venue_line(&self) -> String {
        format!("{}, {}", self.venue, self.city)
    }
}

/// Shape check for `YYYY-MM-DDTHH:MM:SS(Z|±HH:MM)`. Field ranges are left to jiff.
fn is_internet_date_time(s: &str) -> bool {
    const DATE_TIME: &[u8; 19] = b"dddd-dd-ddTdd:dd:dd";
    const OFFSET: &[u8; 6] = b"sdd:dd";

    fn fits(pattern: &[u8], input: &[u8]) -> bool {
        pattern.len() == input.len()
            && pattern.iter().zip(input).all(|(&p, &c)| match p {
                b'd' => c.is_ascii_digit(),
                b's' => c == b'+' || c == b'-',
                _ => p == c,
            })
    }

    let bytes = s.as_bytes();
    if bytes.len() < DATE_TIME.len() {
        return false;
    }
    let (date_time, offset) = bytes.split_at(DATE_TIME.len());
    fits(DATE_TIME, date_time) && (offset == b"Z" || fits(OFFSET, offset))
}

/// `dateISO` is not a valid date-time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid event date {input:?}: {reason}")]
pub struct DateParseError {
    /// The rejected input.
    pub input: String,
    /// Why the parser rejected it.
    pub reason: String,
}
