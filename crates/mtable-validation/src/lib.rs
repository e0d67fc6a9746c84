//! Multiplication table field validation
//!
//! Pure Rust predicates compatible with both std and no_std environments.
//! Used by the server-side form rules and by the WASM client-side bindings.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

pub mod integer;
pub mod numeric;

pub use integer::*;
pub use numeric::*;

/// Form field attributes for HTML5 and client-side validation
pub trait FormField {
    /// Get validation attributes for a specific field
    fn field_attrs(&self, field_name: &str) -> FieldAttrs;

    /// Get list of all field names
    fn field_names(&self) -> Vec<&'static str>;
}

/// Attributes for a form field (HTML5 + data-validate JSON)
#[derive(Debug, Clone, Default)]
pub struct FieldAttrs {
    /// HTML5 validation attributes (type, required, min, max, etc.)
    pub html5_attrs: BTreeMap<String, String>,

    /// JSON for data-validate attribute (for WASM validation)
    pub data_validate: String,
}

impl FieldAttrs {
    /// Look up a single HTML5 attribute
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.html5_attrs.get(name).map(|s| s.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.html5_attrs.contains_key(name)
    }
}
