// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use campus_events_core::RemoteEvent;
use colored::Color;
use jiff::Zoned;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{OutputFormat, format_event_date, truncate_to_width};

const MAX_TITLE_WIDTH: usize = 48;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    now: Zoned,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(now: Zoned, columns: Vec<EventColumn>) -> Self {
        Self {
            columns,
            now,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [RemoteEvent]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [RemoteEvent],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<_> = self
            .formatter
            .columns
            .iter()
            .map(|column| ColumnMeta {
                column,
                now: &self.formatter.now,
                format: self.formatter.format,
            })
            .collect();

        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), &columns, self.events)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), &columns, self.events)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Date,
    Title,
    Venue,
    Source,
    Link,
    Id,
}

impl EventColumn {
    pub fn date() -> Self {
        EventColumn::Date
    }

    pub fn title() -> Self {
        EventColumn::Title
    }

    pub fn venue() -> Self {
        EventColumn::Venue
    }

    pub fn source() -> Self {
        EventColumn::Source
    }

    pub fn link() -> Self {
        EventColumn::Link
    }

    pub fn id() -> Self {
        EventColumn::Id
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnMeta<'a> {
    column: &'a EventColumn,
    now: &'a Zoned,
    format: OutputFormat,
}

impl TableColumn<RemoteEvent> for ColumnMeta<'_> {
    fn name(&self) -> Cow<'_, str> {
        match self.column {
            EventColumn::Date => "Date",
            EventColumn::Title => "Title",
            EventColumn::Venue => "Venue",
            EventColumn::Source => "Source",
            EventColumn::Link => "Link",
            EventColumn::Id => "ID",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a RemoteEvent) -> Cow<'a, str> {
        match self.column {
            EventColumn::Date => format_event_date(data, self.now).into(),
            EventColumn::Title => match self.format {
                OutputFormat::Table => truncate_to_width(&data.title, MAX_TITLE_WIDTH).into(),
                OutputFormat::Json => data.title.as_str().into(),
            },
            EventColumn::Venue => data.venue_line().into(),
            EventColumn::Source => data.source.as_str().into(),
            EventColumn::Link => data.link.as_deref().unwrap_or_default().into(),
            EventColumn::Id => data.id.to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self.column {
            EventColumn::Date => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &RemoteEvent) -> Option<Color> {
        match self.column {
            EventColumn::Date if data.parse_date().is_err() => Some(Color::Yellow),
            _ => None,
        }
    }
}
