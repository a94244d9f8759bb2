use std::collections::BTreeMap;

use crate::field::FieldId;
use crate::patterns::{REQUIRED_MESSAGE, pattern_for};

/// Why a field was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    /// Required field left empty.
    Missing,
    /// Value does not satisfy the field's registered pattern.
    PatternMismatch,
}

impl FieldProblem {
    pub fn message(&self, field: FieldId) -> &'static str {
        match self {
            FieldProblem::Missing => REQUIRED_MESSAGE,
            FieldProblem::PatternMismatch => pattern_for(field).message,
        }
    }
}

/// Current error annotation per field.
///
/// Presentation layers render this map next to the inputs; the core never
/// touches the display surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<FieldId, &'static str>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FieldId, message: &'static str) {
        self.messages.insert(field, message);
    }

    pub fn clear(&mut self, field: FieldId) {
        self.messages.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.messages.clear();
    }

    pub fn get(&self, field: FieldId) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Annotations in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &'static str)> + '_ {
        self.messages.iter().map(|(f, m)| (*f, *m))
    }
}
