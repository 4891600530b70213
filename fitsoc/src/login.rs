use crate::error::ValidationError;
use serde::Serialize;

/// Credentials that passed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Raw login form input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks the fields in display order and returns the first failure.
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if !is_email_shaped(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::PasswordRequired);
        }

        Ok(Credentials {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Validates `form` and hands the credentials to `login`.
///
/// `login` runs exactly once when validation passes and is never called
/// otherwise.
pub fn submit_login<F>(form: &LoginForm, login: F) -> Result<(), ValidationError>
where
    F: FnOnce(Credentials),
{
    let credentials = form.validate()?;
    login(credentials);
    Ok(())
}

// local@domain.tld: no whitespace, one '@', and a dot with text on both sides
// somewhere in the domain.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_is_required() {
        let mut calls = 0;
        let result = submit_login(&LoginForm::new("", "secret"), |_| calls += 1);

        assert_eq!(result, Err(ValidationError::EmailRequired));
        assert_eq!(result.unwrap_err().to_string(), "Email is required");
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut calls = 0;
        let result = submit_login(&LoginForm::new("bad-email", "secret"), |_| calls += 1);

        assert_eq!(
            result.unwrap_err().to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_empty_password_is_required() {
        let mut calls = 0;
        let result = submit_login(&LoginForm::new("a@b.com", ""), |_| calls += 1);

        assert_eq!(result.unwrap_err().to_string(), "Password is required");
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_valid_form_invokes_login_once() {
        let mut received = Vec::new();
        let result = submit_login(&LoginForm::new("a@b.com", "x"), |c| received.push(c));

        assert!(result.is_ok());
        assert_eq!(
            received,
            vec![Credentials {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
            }]
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_email_shaped("coach@gym.example.org"));
        assert!(!is_email_shaped("a@b"));
        assert!(!is_email_shaped("a@b."));
        assert!(!is_email_shaped("@b.com"));
        assert!(!is_email_shaped("a@@b.com"));
        assert!(!is_email_shaped("a b@c.com"));
    }

    #[test]
    fn test_email_is_trimmed() {
        let credentials = LoginForm::new("  a@b.com ", "x").validate().unwrap();
        assert_eq!(credentials.email, "a@b.com");
    }
}
