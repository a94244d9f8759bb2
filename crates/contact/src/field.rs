use core::fmt;
use core::str::FromStr;

use kiosko_core::DomainError;

/// The six tracked contact form fields, in form order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    LastName1,
    LastName2,
    Phone,
    Email,
    Address,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::LastName1,
        FieldId::LastName2,
        FieldId::Phone,
        FieldId::Email,
        FieldId::Address,
    ];

    /// Identifier used by the form markup (`id="lastName1"`).
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::LastName1 => "lastName1",
            FieldId::LastName2 => "lastName2",
            FieldId::Phone => "phone",
            FieldId::Email => "email",
            FieldId::Address => "address",
        }
    }

    pub fn from_key(key: &str) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Whether the field must be filled in to confirm an order.
    pub fn is_required(&self) -> bool {
        !matches!(self, FieldId::LastName2)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::from_key(s).ok_or_else(|| DomainError::validation(format!("unknown field {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::from_key(field.key()), Some(field));
        }
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(FieldId::from_key("lastname1"), None);
        assert!("EMAIL".parse::<FieldId>().is_err());
    }

    #[test]
    fn only_second_surname_is_optional() {
        let optional: Vec<_> = FieldId::ALL.into_iter().filter(|f| !f.is_required()).collect();
        assert_eq!(optional, vec![FieldId::LastName2]);
    }
}
