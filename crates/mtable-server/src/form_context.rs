// File: src/form_context.rs
// Purpose: Form context for templates to display validation errors and preserve values

use mtable::{FieldErrors, FormData, RangeInput};
use std::collections::HashMap;

/// Context for forms that includes validation errors and original values
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    /// Field names to error messages
    pub errors: HashMap<String, String>,
    /// Original field values submitted
    pub values: HashMap<String, String>,
}

impl FormContext {
    /// Create a new form context with errors and values
    pub fn new(errors: HashMap<String, String>, values: HashMap<String, String>) -> Self {
        Self { errors, values }
    }

    /// Create empty form context
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rule failures for a submitted form, echoing back what was typed
    pub fn from_field_errors(errors: &FieldErrors, form: &FormData) -> Self {
        let errors = errors
            .iter()
            .map(|(field, msg)| (field.name().to_string(), msg.clone()))
            .collect();
        Self::new(errors, form.as_map().clone())
    }

    /// Values of an accepted input, for refilling the form
    pub fn from_input(input: &RangeInput) -> Self {
        let values = input
            .field_values()
            .into_iter()
            .map(|(field, value)| (field.name().to_string(), value))
            .collect();
        Self::new(HashMap::new(), values)
    }

    /// Check if field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get error message for a field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    /// Get original value for a field
    pub fn get_value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(|s| s.as_str())
    }
}
