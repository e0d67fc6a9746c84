// File: src/range.rs
// Purpose: Typed range input and the parsing boundary for raw field text

use mtable_validation::parse_integer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::request_context::QueryParams;

/// One dimension of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

/// The four input fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "rStart")]
    RStart,
    #[serde(rename = "rEnd")]
    REnd,
    #[serde(rename = "cStart")]
    CStart,
    #[serde(rename = "cEnd")]
    CEnd,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::RStart, Field::REnd, Field::CStart, Field::CEnd];

    /// Wire name used by forms, query strings and JSON
    pub fn name(self) -> &'static str {
        match self {
            Field::RStart => "rStart",
            Field::REnd => "rEnd",
            Field::CStart => "cStart",
            Field::CEnd => "cEnd",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::RStart => "Row start",
            Field::REnd => "Row end",
            Field::CStart => "Column start",
            Field::CEnd => "Column end",
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Field::RStart | Field::REnd => Axis::Row,
            Field::CStart | Field::CEnd => Axis::Column,
        }
    }

    pub fn is_end(self) -> bool {
        matches!(self, Field::REnd | Field::CEnd)
    }

    /// The other bound on the same axis
    pub fn partner(self) -> Field {
        match self {
            Field::RStart => Field::REnd,
            Field::REnd => Field::RStart,
            Field::CStart => Field::CEnd,
            Field::CEnd => Field::CStart,
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw text could not be turned into a `RangeInput`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Missing value for {0}")]
    Missing(Field),

    #[error("Value '{value}' for {field} is not an integer")]
    NotInteger { field: Field, value: String },
}

impl InputError {
    pub fn field(&self) -> Field {
        match self {
            InputError::Missing(field) => *field,
            InputError::NotInteger { field, .. } => *field,
        }
    }
}

/// Row and column bounds of a requested table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeInput {
    #[serde(rename = "rStart")]
    pub row_start: i64,
    #[serde(rename = "rEnd")]
    pub row_end: i64,
    #[serde(rename = "cStart")]
    pub col_start: i64,
    #[serde(rename = "cEnd")]
    pub col_end: i64,
}

impl RangeInput {
    pub fn new(row_start: i64, row_end: i64, col_start: i64, col_end: i64) -> Self {
        Self {
            row_start,
            row_end,
            col_start,
            col_end,
        }
    }

    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::RStart => self.row_start,
            Field::REnd => self.row_end,
            Field::CStart => self.col_start,
            Field::CEnd => self.col_end,
        }
    }

    pub fn start(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Row => self.row_start,
            Axis::Column => self.col_start,
        }
    }

    pub fn end(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Row => self.row_end,
            Axis::Column => self.col_end,
        }
    }

    /// Absolute difference between the end and start bound of an axis
    pub fn span(&self, axis: Axis) -> u64 {
        self.end(axis).abs_diff(self.start(axis))
    }

    pub fn values(&self) -> [i64; 4] {
        [self.row_start, self.row_end, self.col_start, self.col_end]
    }

    /// Build from a per-field text lookup. Values are trimmed; a missing or
    /// blank field and non-integer text are rejected here, before any range
    /// check runs.
    pub fn parse_with<'a, F>(lookup: F) -> Result<Self, InputError>
    where
        F: Fn(Field) -> Option<&'a str>,
    {
        let read = |field: Field| -> Result<i64, InputError> {
            let raw = lookup(field)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .ok_or(InputError::Missing(field))?;
            parse_integer(raw).ok_or_else(|| InputError::NotInteger {
                field,
                value: raw.to_string(),
            })
        };

        Ok(Self {
            row_start: read(Field::RStart)?,
            row_end: read(Field::REnd)?,
            col_start: read(Field::CStart)?,
            col_end: read(Field::CEnd)?,
        })
    }

    /// Text for each field, as it would be echoed back into a form
    pub fn field_values(&self) -> Vec<(Field, String)> {
        Field::ALL
            .into_iter()
            .map(|field| (field, self.get(field).to_string()))
            .collect()
    }
}

/// Parses a query string such as `rStart=1&rEnd=3&cStart=1&cEnd=3`.
/// A leading `?` is accepted.
impl FromStr for RangeInput {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryParams::parse(s).range_input()
    }
}
