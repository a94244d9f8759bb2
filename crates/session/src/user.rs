//! Known-user token and greeting.

use serde::{Deserialize, Serialize};

/// Storage key of the known-user token.
pub const KNOWN_USER_KEY: &str = "known-user";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "f")]
    Female,
    #[serde(rename = "m")]
    Male,
}

impl Gender {
    /// `f` (any case) is female; any other answer is male.
    pub fn from_answer(answer: &str) -> Gender {
        if answer.trim().eq_ignore_ascii_case("f") {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

/// Persisted identity of a returning user: `{"name": "...", "gender": "f"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownUser {
    pub name: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Greeting {
    FirstTime,
    Returning(KnownUser),
}

impl Greeting {
    pub fn message(&self) -> String {
        match self {
            Greeting::FirstTime => "Nuestras delicatessen ahora te las llevamos a casa".to_string(),
            Greeting::Returning(user) => {
                let ending = match user.gender {
                    Gender::Female => 'a',
                    Gender::Male => 'o',
                };
                format!("¡Bienvenid{ending} {}! ¿Qué te apetece hoy?", user.name)
            }
        }
    }

    /// Label of the login/logout toggle.
    pub fn action_label(&self) -> &'static str {
        match self {
            Greeting::FirstTime => "Registrarse",
            Greeting::Returning(_) => "Log out",
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Greeting::Returning(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_answer_defaults_to_male() {
        assert_eq!(Gender::from_answer("F"), Gender::Female);
        assert_eq!(Gender::from_answer(" f "), Gender::Female);
        assert_eq!(Gender::from_answer("x"), Gender::Male);
        assert_eq!(Gender::from_answer(""), Gender::Male);
    }

    #[test]
    fn returning_greeting_uses_gendered_ending() {
        let lucia = Greeting::Returning(KnownUser {
            name: "Lucía".into(),
            gender: Gender::Female,
        });
        assert_eq!(lucia.message(), "¡Bienvenida Lucía! ¿Qué te apetece hoy?");
        assert_eq!(lucia.action_label(), "Log out");
    }

    #[test]
    fn known_user_json_shape() {
        let user: KnownUser = serde_json::from_str(r#"{"name":"Pepe","gender":"m"}"#).unwrap();
        assert_eq!(user.gender, Gender::Male);
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"name":"Pepe","gender":"m"}"#
        );
    }
}
