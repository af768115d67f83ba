use thiserror::Error;

use crate::model::account::Role;

/// Precondition failures detected in the browser before a request is issued
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("{0} is required")]
    EmptyField(&'static str),
    #[error("File is too large ({} MB), the limit is {} MB", megabytes(.size), megabytes(.limit))]
    FileTooLarge { size: u64, limit: u64 },
    #[error("Only PDF files can be uploaded")]
    NotPdf,
    #[error("Please select a ship first")]
    NoShipSelected,
    #[error("The OTP must contain digits only")]
    InvalidOtp,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("{} accounts cannot sign in to the dashboard", .0.label())]
    UnsupportedRole(Role),
}

fn megabytes(bytes: &u64) -> String {
    let mb = *bytes as f64 / (1024.0 * 1024.0);
    if mb.fract() == 0.0 {
        format!("{}", mb as u64)
    } else {
        format!("{:.1}", mb)
    }
}
