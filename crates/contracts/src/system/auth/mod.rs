use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub const MIN_PASSWORD_LEN: usize = 6;

/// Client-side validation failure of a single form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Correo electrónico inválido")]
    InvalidEmail,
    #[error("La contraseña debe tener al menos 6 caracteres")]
    PasswordTooShort,
}

impl FieldError {
    /// Name of the form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::InvalidEmail => "email",
            FieldError::PasswordTooShort => "password",
        }
    }
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Validates every field; returns all failures at once
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if !is_valid_email(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError::PasswordTooShort);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// `local@domain.tld` without whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
