use dioxus_logger::tracing;

use crate::{
    client::{
        http::{ApiClient, Session},
        service,
        store::{
            lifecycle::Lifecycle,
            notification::{notify_error, notify_success, NotificationState},
            SliceHandle,
        },
    },
    error::Error,
};

/// Signed-in session plus the password recovery flow
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// Email an OTP was last sent to, carried to the reset screen
    pub otp_email: Option<String>,
    pub error: Option<String>,
    login: Lifecycle,
    forgot: Lifecycle,
    reset: Lifecycle,
}

impl AuthState {
    /// State restored from the persisted session at startup
    pub fn restore(api: &ApiClient) -> Self {
        Self {
            session: api.session(),
            ..Default::default()
        }
    }

    pub fn login_loading(&self) -> bool {
        self.login.is_pending()
    }

    pub fn forgot_loading(&self) -> bool {
        self.forgot.is_pending()
    }

    pub fn reset_loading(&self) -> bool {
        self.reset.is_pending()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

pub async fn login<A, N>(
    api: &ApiClient,
    auth: &mut A,
    notifications: &mut N,
    email: &str,
    password: &str,
) -> Result<Session, Error>
where
    A: SliceHandle<AuthState>,
    N: SliceHandle<NotificationState>,
{
    let ticket = auth.apply(|state| {
        state.error = None;
        state.login.begin()
    });

    match service::auth::login(api, email, password).await {
        Ok(session) => {
            tracing::info!(role = %session.role, "Signed in");
            auth.apply(|state| {
                if state.login.fulfill(ticket) {
                    state.session = Some(session.clone());
                }
            });
            notify_success(notifications, "Logged in successfully");

            Ok(session)
        }
        Err(err) => {
            auth.apply(|state| {
                if state.login.reject(ticket) {
                    state.error = Some(err.user_message());
                }
            });
            notify_error(notifications, &err);

            Err(err)
        }
    }
}

/// Clear the stored session; the view resets the remaining slices
pub fn logout<A, N>(api: &ApiClient, auth: &mut A, notifications: &mut N) -> Result<(), Error>
where
    A: SliceHandle<AuthState>,
    N: SliceHandle<NotificationState>,
{
    let result = service::auth::logout(api);
    // The in-memory session goes regardless so the UI never shows a stale login
    auth.apply(|state| *state = AuthState::default());

    if let Err(err) = &result {
        tracing::warn!("Failed to clear persisted session: {}", err);
        notify_error(notifications, err);
    }

    result
}

pub async fn forgot_password<A, N>(
    api: &ApiClient,
    auth: &mut A,
    notifications: &mut N,
    email: &str,
) -> Result<(), Error>
where
    A: SliceHandle<AuthState>,
    N: SliceHandle<NotificationState>,
{
    let ticket = auth.apply(|state| {
        state.error = None;
        state.forgot.begin()
    });

    match service::auth::forgot_password(api, email).await {
        Ok(message) => {
            let email = email.trim().to_string();
            auth.apply(|state| {
                if state.forgot.fulfill(ticket) {
                    state.otp_email = Some(email);
                }
            });
            notify_success(
                notifications,
                message.as_deref().unwrap_or("An OTP has been sent to your email"),
            );

            Ok(())
        }
        Err(err) => {
            auth.apply(|state| {
                if state.forgot.reject(ticket) {
                    state.error = Some(err.user_message());
                }
            });
            notify_error(notifications, &err);

            Err(err)
        }
    }
}

pub async fn reset_password<A, N>(
    api: &ApiClient,
    auth: &mut A,
    notifications: &mut N,
    otp: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), Error>
where
    A: SliceHandle<AuthState>,
    N: SliceHandle<NotificationState>,
{
    let (ticket, email) = auth.apply(|state| {
        state.error = None;
        (state.reset.begin(), state.otp_email.clone().unwrap_or_default())
    });

    match service::auth::reset_password(api, &email, otp, new_password, confirm_password).await {
        Ok(message) => {
            auth.apply(|state| {
                if state.reset.fulfill(ticket) {
                    state.otp_email = None;
                }
            });
            notify_success(
                notifications,
                message.as_deref().unwrap_or("Password reset successfully"),
            );

            Ok(())
        }
        Err(err) => {
            auth.apply(|state| {
                if state.reset.reject(ticket) {
                    state.error = Some(err.user_message());
                }
            });
            notify_error(notifications, &err);

            Err(err)
        }
    }
}
