//! Contact form domain: field identifiers, the validation rule registry,
//! form snapshots and the declarative field-error map.
//!
//! Pure logic; rendering of error annotations is left to presentation layers.

pub mod contact;
pub mod errors;
pub mod field;
pub mod patterns;
pub mod validate;

pub use contact::{ContactInfo, FormSnapshot};
pub use errors::{FieldErrors, FieldProblem};
pub use field::FieldId;
pub use patterns::{FieldPattern, REQUIRED_MESSAGE, pattern_for};
pub use validate::{check_required, validate, validate_form, validate_key};
