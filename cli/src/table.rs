// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

pub trait TableStyle {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

/// Space separated, padded columns.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleBasic {
    separator: &'static str,
}

impl TableStyleBasic {
    pub const fn new() -> Self {
        Self { separator: "  " }
    }
}

impl TableStyle for TableStyleBasic {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let cells: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|row| columns.iter().map(|col| col.format(row)).collect())
            .collect();
        let widths = column_widths(columns.len(), &cells);

        for (i, (row, item)) in cells.iter().zip(data).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for (j, (col, cell)) in columns.iter().zip(row).enumerate() {
                let is_last = j + 1 == columns.len();
                let pad = widths[j].saturating_sub(cell.width());
                let padded = match col.padding_direction() {
                    // Last column does not need padding if it's left-aligned
                    PaddingDirection::Left if is_last => cell.to_string(),
                    PaddingDirection::Left => format!("{cell}{}", " ".repeat(pad)),
                    PaddingDirection::Right => format!("{}{cell}", " ".repeat(pad)),
                };

                match col.color(item) {
                    Some(color) => write!(f, "{}", padded.color(color))?,
                    None => write!(f, "{padded}")?,
                }
                if !is_last {
                    write!(f, "{}", self.separator)?;
                }
            }
        }
        Ok(())
    }
}

/// A JSON array of objects keyed by column name.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub const fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = data
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| {
                        let key = col.name().to_lowercase().replace(' ', "_");
                        (key, serde_json::Value::String(col.format(row).into_owned()))
                    })
                    .collect()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

pub struct Table<'a, S, T, C> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S, T, C> Table<'a, S, T, C>
where
    S: TableStyle,
    C: TableColumn<T>,
{
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S, T, C> fmt::Display for Table<'_, S, T, C>
where
    S: TableStyle,
    C: TableColumn<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.write(f, self.columns, self.data)
    }
}

fn column_widths(n: usize, cells: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
    let mut widths = vec![0; n];
    for row in cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}
