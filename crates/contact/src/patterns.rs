//! Field pattern registry.
//!
//! Compiled once on first use and never mutated afterwards.

use std::sync::LazyLock;

use regex::Regex;

use crate::field::FieldId;

/// Message shown when a required field is left empty.
pub const REQUIRED_MESSAGE: &str = "Este campo es obligatorio";

/// Matching rule and error message of one field.
#[derive(Debug)]
pub struct FieldPattern {
    pub regex: Regex,
    pub message: &'static str,
}

impl FieldPattern {
    fn new(pattern: &str, message: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).expect("invalid field pattern"),
            message,
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

const LETTERS: &str = "A-Za-zÁÉÍÓÚáéíóúÑñ";
const CAPITALS: &str = "A-ZÁÉÍÓÚÑ";

static NAME: LazyLock<FieldPattern> = LazyLock::new(|| {
    FieldPattern::new(
        &format!("^[{LETTERS}]{{3,10}}$"),
        "El nombre debe tener entre 3 y 10 letras (sin espacios ni números)",
    )
});

// Surnames: capital initial, 4 to 8 letters in total.
static LAST_NAME_1: LazyLock<FieldPattern> = LazyLock::new(|| {
    FieldPattern::new(
        &format!("^[{CAPITALS}][{LETTERS}]{{3,7}}$"),
        "El primer apellido debe empezar por mayúscula y tener entre 4 y 8 letras",
    )
});

static LAST_NAME_2: LazyLock<FieldPattern> = LazyLock::new(|| {
    FieldPattern::new(
        &format!("^[{CAPITALS}][{LETTERS}]{{3,7}}$"),
        "El segundo apellido debe empezar por mayúscula y tener entre 4 y 8 letras (si se indica)",
    )
});

static PHONE: LazyLock<FieldPattern> = LazyLock::new(|| {
    FieldPattern::new(
        r"^\+[0-9]{2} [0-9]{3} [0-9]{3} [0-9]{3}$",
        "Formato esperado: +34 666 777 888",
    )
});

static EMAIL: LazyLock<FieldPattern> = LazyLock::new(|| {
    FieldPattern::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
        "Introduce un email válido",
    )
});

static ADDRESS: LazyLock<FieldPattern> = LazyLock::new(|| {
    FieldPattern::new(
        r"^.{5,100}$",
        "La dirección debe tener entre 5 y 100 caracteres",
    )
});

/// Registered rule for a field.
pub fn pattern_for(field: FieldId) -> &'static FieldPattern {
    match field {
        FieldId::Name => &*NAME,
        FieldId::LastName1 => &*LAST_NAME_1,
        FieldId::LastName2 => &*LAST_NAME_2,
        FieldId::Phone => &*PHONE,
        FieldId::Email => &*EMAIL,
        FieldId::Address => &*ADDRESS,
    }
}
