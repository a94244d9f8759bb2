//! Field Validator.

use crate::contact::FormSnapshot;
use crate::errors::{FieldErrors, FieldProblem};
use crate::field::FieldId;
use crate::patterns::pattern_for;

/// Whether `raw` (untrimmed) satisfies the rule registered for `field`.
///
/// An empty optional second surname always passes. Emptiness of required
/// fields is not judged here, see [`check_required`].
pub fn validate(field: FieldId, raw: &str) -> bool {
    let value = raw.trim();
    if field == FieldId::LastName2 && value.is_empty() {
        return true;
    }
    pattern_for(field).is_match(value)
}

/// String-keyed entry point for presentation layers.
///
/// Unknown keys fail open: they validate as `true`.
pub fn validate_key(key: &str, raw: &str) -> bool {
    match FieldId::from_key(key) {
        Some(field) => validate(field, raw),
        None => {
            tracing::debug!(key, "no validation rule for field; accepting");
            true
        }
    }
}

/// Submit-time check: required fields must be non-empty, then match.
pub fn check_required(field: FieldId, raw: &str) -> Result<(), FieldProblem> {
    if raw.trim().is_empty() {
        return if field.is_required() {
            Err(FieldProblem::Missing)
        } else {
            Ok(())
        };
    }
    if validate(field, raw) {
        Ok(())
    } else {
        Err(FieldProblem::PatternMismatch)
    }
}

/// Check every field of a form; the result is empty when the form is valid.
pub fn validate_form(form: &FormSnapshot) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for (field, raw) in form.iter() {
        if let Err(problem) = check_required(field, raw) {
            errors.set(field, problem.message(field));
        }
    }
    errors
}
