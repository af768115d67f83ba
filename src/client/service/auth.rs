use dioxus_logger::tracing;
use reqwest::Method;

use crate::{
    client::{
        http::{ApiClient, Service, Session},
        util::validate,
    },
    error::{client::ClientError, Error},
    model::{
        api::MessageDto,
        auth::{ForgotPasswordDto, LoginDto, LoginResponseDto, ResetPasswordDto},
    },
};

/// Sign in and persist the resulting session.
///
/// Only dashboard roles are accepted; any other role is refused with
/// [`ClientError::UnsupportedRole`] and nothing is stored.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<Session, Error> {
    let credentials = LoginDto {
        email: validate::email(email)?,
        password: validate::password(password)?,
    };

    let request = api
        .anonymous(Method::POST, Service::Auth, "/login")?
        .json(&credentials);
    let response: LoginResponseDto = api.send_data(request).await?;

    if !response.user.role.is_dashboard_role() {
        tracing::info!(role = %response.user.role, "Refusing dashboard session for role");

        return Err(ClientError::UnsupportedRole(response.user.role).into());
    }

    let session = Session {
        access_token: response.access_token,
        role: response.user.role,
        email: response.user.email,
    };
    api.store_session(&session)?;

    Ok(session)
}

/// Drop the stored session, later authenticated requests carry no token
pub fn logout(api: &ApiClient) -> Result<(), Error> {
    api.clear_session()
}

/// Ask the backend to email a one-time password for resetting the account password
pub async fn forgot_password(api: &ApiClient, email: &str) -> Result<Option<String>, Error> {
    let payload = ForgotPasswordDto {
        email: validate::email(email)?,
    };

    let request = api
        .anonymous(Method::POST, Service::Auth, "/forgot-password")?
        .json(&payload);
    let response: MessageDto = api.send(request).await?;

    Ok(response.message)
}

/// Reset the password using the emailed one-time password
pub async fn reset_password(
    api: &ApiClient,
    email: &str,
    otp: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<Option<String>, Error> {
    let payload = ResetPasswordDto {
        email: validate::email(email)?,
        otp: validate::otp(otp)?,
        new_password: validate::new_password(new_password, confirm_password)?,
    };

    let request = api
        .anonymous(Method::POST, Service::Auth, "/reset-password")?
        .json(&payload);
    let response: MessageDto = api.send(request).await?;

    Ok(response.message)
}
