//! Form DTOs

use crate::domain::credentials::Credentials;

// ============================================================================
// Login
// ============================================================================

/// Login form (`application/x-www-form-urlencoded`)
///
/// Missing fields are empty strings. No `Debug`: it holds the password.
#[derive(Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Build from decoded form pairs
    ///
    /// A repeated field keeps its first value; unknown fields are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut email = None;
        let mut password = None;

        for (key, value) in pairs {
            match key.as_str() {
                "email" => {
                    email.get_or_insert(value);
                }
                "password" => {
                    password.get_or_insert(value);
                }
                _ => {}
            }
        }

        Self {
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }
    }

    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.email, self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let form = LoginForm::from_pairs(pairs(&[("email", "alice")]));
        assert_eq!(form.email, "alice");
        assert_eq!(form.password, "");

        let credentials = form.into_credentials();
        assert_eq!(credentials.username, "alice");
        assert!(!credentials.is_complete());
    }

    #[test]
    fn test_repeated_field_keeps_first_value() {
        let form = LoginForm::from_pairs(pairs(&[
            ("email", "alice"),
            ("remember", "on"),
            ("email", "bob"),
            ("password", "x"),
            ("password", ""),
        ]));

        assert_eq!(form.email, "alice");
        assert_eq!(form.password, "x");
        assert!(form.into_credentials().is_complete());
    }

    #[test]
    fn test_empty_first_value_wins_over_later_value() {
        let form = LoginForm::from_pairs(pairs(&[
            ("email", ""),
            ("email", "bob"),
            ("password", "x"),
        ]));

        assert_eq!(form.email, "");
        assert!(!form.into_credentials().is_complete());
    }
}
