// File: src/request_context.rs
// Purpose: Query string and form body containers feeding the range parser

use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::range::{Field, InputError, RangeInput};

/// Split `key=value&key=value` pairs and percent-decode them.
/// `+` is treated as a space, as browsers encode form bodies that way.
/// Later duplicates overwrite earlier ones.
fn parse_pairs(raw: &str) -> HashMap<String, String> {
    let decode = |s: &str| {
        let spaced = s.replace('+', " ");
        urlencoding::decode(&spaced)
            .map(|cow| cow.into_owned())
            .unwrap_or_else(|_| spaced.clone())
    };

    raw.trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

/// Query parameters from URL
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    /// Create from HashMap
    pub fn new(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Parse a raw query string, with or without the leading `?`
    pub fn parse(raw: &str) -> Self {
        Self::new(parse_pairs(raw))
    }

    /// Get a query parameter value
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Check if a parameter exists
    pub fn has(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// True when any of the four range keys is present
    pub fn has_range(&self) -> bool {
        Field::ALL.iter().any(|f| self.has(f.name()))
    }

    pub fn range_input(&self) -> Result<RangeInput, InputError> {
        RangeInput::parse_with(|field| self.get(field.name()).map(String::as_str))
    }
}

/// Form data from POST requests
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    /// Create empty form data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from form fields with automatic trimming
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        let trimmed_fields = fields
            .into_iter()
            .map(|(k, v)| (k, v.trim().to_string()))
            .collect();

        Self {
            fields: trimmed_fields,
        }
    }

    /// Parse an `application/x-www-form-urlencoded` body
    pub fn from_urlencoded(body: &str) -> Self {
        Self::from_fields(parse_pairs(body))
    }

    /// Create from JSON. Numbers are kept in their textual form so they go
    /// through the same integer check as typed text.
    pub fn from_json(json: &JsonValue) -> Self {
        let mut fields = HashMap::new();

        if let JsonValue::Object(map) = json {
            for (key, value) in map {
                match value {
                    JsonValue::String(s) => {
                        fields.insert(key.clone(), s.trim().to_string());
                    }
                    JsonValue::Null => {}
                    other => {
                        fields.insert(key.clone(), other.to_string());
                    }
                }
            }
        }

        Self { fields }
    }

    /// Get a form field value
    pub fn get(&self, key: &str) -> Option<&String> {
        self.fields.get(key)
    }

    /// Value of one of the range fields
    pub fn field(&self, field: Field) -> Option<&str> {
        self.get(field.name()).map(String::as_str)
    }

    /// Get as HashMap
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.fields
    }
}
