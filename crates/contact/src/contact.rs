use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// Contact details attached to an order (trimmed values).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name1: String,
    /// Stored as `null` when absent, so the record always has six keys.
    #[serde(default)]
    pub last_name2: Option<String>,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactInfo {
    /// First name and surnames joined by single spaces, empty parts skipped.
    pub fn full_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            Some(self.last_name1.as_str()),
            self.last_name2.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Raw (untrimmed) values of the contact form at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: [String; 6],
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field as usize] = value.into();
    }

    pub fn get(&self, field: FieldId) -> &str {
        &self.values[field as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        FieldId::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Trimmed contact record; an empty second surname becomes `None`.
    pub fn to_contact(&self) -> ContactInfo {
        let trimmed = |field| self.get(field).trim().to_string();
        let last_name2 = trimmed(FieldId::LastName2);
        ContactInfo {
            first_name: trimmed(FieldId::Name),
            last_name1: trimmed(FieldId::LastName1),
            last_name2: (!last_name2.is_empty()).then_some(last_name2),
            phone: trimmed(FieldId::Phone),
            email: trimmed(FieldId::Email),
            address: trimmed(FieldId::Address),
        }
    }
}

impl From<&ContactInfo> for FormSnapshot {
    fn from(contact: &ContactInfo) -> Self {
        FormSnapshot::new()
            .with(FieldId::Name, contact.first_name.clone())
            .with(FieldId::LastName1, contact.last_name1.clone())
            .with(FieldId::LastName2, contact.last_name2.clone().unwrap_or_default())
            .with(FieldId::Phone, contact.phone.clone())
            .with(FieldId::Email, contact.email.clone())
            .with(FieldId::Address, contact.address.clone())
    }
}
