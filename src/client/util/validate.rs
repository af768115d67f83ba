//! Client-side precondition checks run before a request is issued.

use validator::ValidateEmail;

use crate::{config::MIN_PASSWORD_LENGTH, error::client::ClientError};

/// Trimmed value of a mandatory field
pub fn required(field: &'static str, value: &str) -> Result<String, ClientError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ClientError::EmptyField(field));
    }

    Ok(value.to_string())
}

/// Trimmed, syntactically valid email address
pub fn email(value: &str) -> Result<String, ClientError> {
    let value = required("Email", value)?;
    if !value.validate_email() {
        return Err(ClientError::InvalidEmail);
    }

    Ok(value)
}

/// One-time password, digits only
pub fn otp(value: &str) -> Result<String, ClientError> {
    let value = required("OTP", value)?;
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ClientError::InvalidOtp);
    }

    Ok(value)
}

/// Password exactly as typed, only checked for presence
pub fn password(value: &str) -> Result<String, ClientError> {
    if value.is_empty() {
        return Err(ClientError::EmptyField("Password"));
    }

    Ok(value.to_string())
}

/// Password for a new account, at least [`MIN_PASSWORD_LENGTH`] characters and never trimmed
pub fn strong_password(value: &str) -> Result<String, ClientError> {
    let value = password(value)?;
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ClientError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    Ok(value)
}

/// New password with its confirmation
pub fn new_password(password: &str, confirm: &str) -> Result<String, ClientError> {
    let password = strong_password(password)?;
    if password != confirm {
        return Err(ClientError::PasswordMismatch);
    }

    Ok(password)
}
