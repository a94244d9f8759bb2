use core::str::FromStr;

/// Where the summary takes its contact data from.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ContactSource {
    /// Derived from the current form values on every render.
    #[default]
    LiveForm,
    /// Only the snapshot stored by a successful submit; absent until then.
    Confirmed,
}

impl FromStr for ContactSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" | "live_form" | "form" => Ok(ContactSource::LiveForm),
            "confirmed" => Ok(ContactSource::Confirmed),
            other => Err(format!("unknown contact source {other:?} (expected live or confirmed)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub contact_source: ContactSource,
    /// Keep the confirmed contact in the transient store after submit.
    pub keep_contact: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            contact_source: ContactSource::LiveForm,
            keep_contact: true,
        }
    }
}
