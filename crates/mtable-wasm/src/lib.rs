//! mtable WASM
//!
//! WebAssembly bindings for the multiplication table form.
//! Runs the same form rules, range checks and table markup in the browser
//! that the server applies.

use mtable::{render, Field, FormRuleSet, RangeInput, RawFields};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Raw field text as read from the form inputs
#[derive(Deserialize, Debug, Default)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    fn raw(&self) -> RawFields<'_> {
        let get = |field: Field| self.0.get(field.name()).map(String::as_str);
        RawFields::new(
            get(Field::RStart),
            get(Field::REnd),
            get(Field::CStart),
            get(Field::CEnd),
        )
    }
}

/// Rendered table returned to JavaScript
#[derive(Serialize, Debug, Clone)]
pub struct RenderedTable {
    pub title: String,
    pub html: String,
}

/// First failing rule for one field, given the text of all four fields
pub fn field_error(field_name: &str, values: &FormValues) -> Result<Option<String>, String> {
    let field = Field::from_name(field_name).ok_or_else(|| format!("Unknown field: {}", field_name))?;
    Ok(FormRuleSet::standard().check_field(field, &values.raw()).err())
}

/// Validate a single field against the form rules
///
/// # Example (JavaScript)
/// ```javascript
/// const error = validateField('rEnd', { rStart: '5', rEnd: '2', cStart: '1', cEnd: '1' });
/// // "The end value cannot be less than the start value."
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, values: JsValue) -> Result<Option<String>, JsValue> {
    let values: FormValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;
    field_error(field_name, &values).map_err(|e| JsValue::from_str(&e))
}

/// Range check; returns the message or `undefined`
#[wasm_bindgen(js_name = checkRange)]
pub fn check_range(r_start: i32, r_end: i32, c_start: i32, c_end: i32) -> Option<String> {
    let input = RangeInput::new(r_start.into(), r_end.into(), c_start.into(), c_end.into());
    mtable::validate(&input).err().map(|e| e.to_string())
}

/// Validate and render; the validator message is returned as the error
pub fn render_range(input: &RangeInput) -> Result<RenderedTable, String> {
    let table = mtable::build_table(input).map_err(|e| e.to_string())?;
    Ok(RenderedTable {
        html: render::render_table(&table).into_string(),
        title: table.title,
    })
}

/// Validate and render a table, returning `{ title, html }`
#[wasm_bindgen(js_name = renderTable)]
pub fn render_table_js(r_start: i32, r_end: i32, c_start: i32, c_end: i32) -> Result<JsValue, JsValue> {
    let input = RangeInput::new(r_start.into(), r_end.into(), c_start.into(), c_end.into());
    let rendered = render_range(&input).map_err(|e| JsValue::from_str(&e))?;
    Ok(serde_wasm_bindgen::to_value(&rendered)?)
}
