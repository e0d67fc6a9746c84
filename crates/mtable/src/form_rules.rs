// File: src/form_rules.rs
// Purpose: Per-field rules enforced on form submissions before generation

use mtable_validation::{
    parse_integer_saturating, validate_delta, validate_greater_equal, validate_integer, validate_max,
    validate_min, validate_required, FieldAttrs, FormField,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::range::{Field, RangeInput};
use crate::request_context::FormData;

/// Lowest value the form accepts for any field
pub const FORM_MIN: i64 = -100;

/// Highest value the form accepts for any field
pub const FORM_MAX: i64 = 100;

/// Largest difference the form accepts between an axis' start and end
pub const FORM_MAX_DELTA: u64 = 25;

/// First failing rule message for each field that failed
pub type FieldErrors = BTreeMap<Field, String>;

/// Rules attached to one input field, evaluated in field order:
/// required, integer, greater-equal, delta, min, max
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRules {
    pub required: bool,
    pub integer: bool,
    /// This field must be >= the named field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_equal: Option<Field>,
    /// This field must be within the threshold of the named field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_range: Option<(Field, u64)>,
    pub min: i64,
    pub max: i64,
}

/// Raw text of the four fields as submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawFields<'a> {
    values: [Option<&'a str>; 4],
}

impl<'a> RawFields<'a> {
    pub fn new(r_start: Option<&'a str>, r_end: Option<&'a str>, c_start: Option<&'a str>, c_end: Option<&'a str>) -> Self {
        Self {
            values: [r_start, r_end, c_start, c_end],
        }
    }

    pub fn from_form(form: &'a FormData) -> Self {
        Self::new(
            form.field(Field::RStart),
            form.field(Field::REnd),
            form.field(Field::CStart),
            form.field(Field::CEnd),
        )
    }

    /// Trimmed text of a field; `None` when absent
    pub fn get(&self, field: Field) -> Option<&'a str> {
        let idx = Field::ALL.iter().position(|f| *f == field)?;
        self.values[idx].map(str::trim)
    }

    fn integer(&self, field: Field) -> Option<i64> {
        self.get(field).and_then(parse_integer_saturating)
    }
}

/// The per-field rule table for the range form.
///
/// Bounds here are tighter than the range validator's
/// (`validator::MAX_MAGNITUDE`); both tiers are applied to form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRuleSet {
    rules: BTreeMap<Field, FieldRules>,
}

impl Default for FormRuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormRuleSet {
    /// required + integer + [-100, 100] on every field; both bounds of an
    /// axis must be within 25 of each other and each end must not be below
    /// its start.
    pub fn standard() -> Self {
        let rules = Field::ALL
            .into_iter()
            .map(|field| {
                let rules = FieldRules {
                    required: true,
                    integer: true,
                    greater_equal: field.is_end().then(|| field.partner()),
                    delta_range: Some((field.partner(), FORM_MAX_DELTA)),
                    min: FORM_MIN,
                    max: FORM_MAX,
                };
                (field, rules)
            })
            .collect();

        Self { rules }
    }

    pub fn rules(&self, field: Field) -> &FieldRules {
        // every Field is populated by the constructors
        &self.rules[&field]
    }

    /// Check one field, returning the message of the first failing rule.
    ///
    /// Cross-field rules are skipped while the other field is absent or not
    /// an integer; that field reports its own error.
    pub fn check_field(&self, field: Field, raw: &RawFields<'_>) -> Result<(), String> {
        let rules = self.rules(field);
        let value = raw.get(field).unwrap_or("");

        if value.is_empty() {
            return if rules.required {
                validate_required(value)
            } else {
                Ok(())
            };
        }

        if rules.integer {
            validate_integer(value)?;
        }
        // out-of-range digits clamp to the i64 bounds and fail min/max below
        let Some(number) = parse_integer_saturating(value) else {
            return Ok(());
        };

        if let Some(start) = rules.greater_equal.and_then(|other| raw.integer(other)) {
            validate_greater_equal(number, start)?;
        }

        if let Some((other, threshold)) = rules.delta_range {
            if let Some(other_value) = raw.integer(other) {
                validate_delta(number, other_value, threshold)?;
            }
        }

        validate_min(number, rules.min)?;
        validate_max(number, rules.max)?;

        Ok(())
    }

    /// Run every field's rules; on success the parsed input is returned
    pub fn check(&self, raw: &RawFields<'_>) -> Result<RangeInput, FieldErrors> {
        let errors: FieldErrors = Field::ALL
            .into_iter()
            .filter_map(|field| self.check_field(field, raw).err().map(|msg| (field, msg)))
            .collect();

        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "form rules rejected submission");
            return Err(errors);
        }

        RangeInput::parse_with(|field| raw.get(field))
            .map_err(|e| FieldErrors::from([(e.field(), e.to_string())]))
    }

    pub fn check_form(&self, form: &FormData) -> Result<RangeInput, FieldErrors> {
        self.check(&RawFields::from_form(form))
    }
}

impl FormField for FormRuleSet {
    fn field_attrs(&self, field_name: &str) -> FieldAttrs {
        let Some(field) = Field::from_name(field_name) else {
            return FieldAttrs::default();
        };
        let rules = self.rules(field);

        let mut html5_attrs = BTreeMap::new();
        html5_attrs.insert("type".to_string(), "number".to_string());
        html5_attrs.insert("step".to_string(), "1".to_string());
        html5_attrs.insert("min".to_string(), rules.min.to_string());
        html5_attrs.insert("max".to_string(), rules.max.to_string());
        if rules.required {
            html5_attrs.insert("required".to_string(), String::new());
        }

        FieldAttrs {
            html5_attrs,
            data_validate: serde_json::to_string(rules).unwrap_or_default(),
        }
    }

    fn field_names(&self) -> Vec<&'static str> {
        self.rules.keys().map(|f| f.name()).collect()
    }
}
