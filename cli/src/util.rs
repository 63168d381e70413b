// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use campus_events_core::RemoteEvent;
use jiff::Zoned;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Event date in the time zone of `now`, or the raw text if it doesn't parse.
pub fn format_event_date(event: &RemoteEvent, now: &Zoned) -> String {
    match event.parse_date() {
        Ok(date) => date
            .to_zoned(now.time_zone().clone())
            .strftime("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => event.date_iso.clone(),
    }
}

/// Cuts `s` to at most `max_width` columns, marking the cut with an ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
