// mtable - multiplication table generation
// Pure range validation and grid generation, plus the Maud markup and input
// parsing used by the server and the WASM bindings.

pub mod config;
pub mod form_rules;
pub mod range;
pub mod render;
pub mod request_context;
pub mod table;
pub mod validator;

pub use config::Config;
pub use form_rules::{FieldErrors, FieldRules, FormRuleSet, RawFields};
pub use range::{Axis, Field, InputError, RangeInput};
pub use request_context::{FormData, QueryParams};
pub use table::{Cell, TableResult};
pub use validator::{validate, ValidationError};

// Field attribute trait for callers rendering the form
pub use mtable_validation::{FieldAttrs, FormField};

/// Validate `input` with the range checks and generate its table.
/// No table is produced for input that fails validation.
pub fn build_table(input: &RangeInput) -> Result<TableResult, ValidationError> {
    if let Err(err) = validator::validate(input) {
        tracing::debug!(?input, kind = err.kind(), "range rejected");
        return Err(err);
    }

    let table = table::generate(input);
    tracing::debug!(title = %table.title, rows = table.rows.len(), "table generated");
    Ok(table)
}
