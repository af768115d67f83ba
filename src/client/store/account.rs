use dioxus::prelude::*;

use crate::{
    client::{
        http::ApiClient,
        service,
        store::{
            notification::{notify_error, notify_success, NotificationState},
            slice::EntitySlice,
            SliceHandle,
        },
        util::confirm::StatusChange,
    },
    error::Error,
    model::{
        account::{AccountDto, CreateAccountDto, Role, UpdateAccountDto},
        api::PageQuery,
    },
};

/// Slice holding one account family
pub type AccountState = EntitySlice<AccountDto>;

/// The four account slices, one per managed role
#[derive(Clone, Copy, PartialEq)]
pub struct AccountStores {
    pub admins: Signal<AccountState>,
    pub users: Signal<AccountState>,
    pub crew: Signal<AccountState>,
    pub superintendents: Signal<AccountState>,
}

impl AccountStores {
    /// Slice holding accounts of `role`; super admins share the admin slice
    pub fn for_role(&self, role: Role) -> Signal<AccountState> {
        match role {
            Role::Admin | Role::Superadmin => self.admins,
            Role::User => self.users,
            Role::Crew => self.crew,
            Role::Superintendent => self.superintendents,
        }
    }

    pub fn reset(&mut self) {
        for mut slice in [self.admins, self.users, self.crew, self.superintendents] {
            slice.set(AccountState::default());
        }
    }
}

pub async fn fetch_accounts<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    role: Role,
) -> Result<(), Error>
where
    S: SliceHandle<AccountState>,
    N: SliceHandle<NotificationState>,
{
    let ticket = slice.apply(|state| state.begin_list());

    match service::account::list_accounts(api, role, PageQuery::default()).await {
        Ok(accounts) => {
            slice.apply(|state| state.fulfill_list(ticket, accounts));
            Ok(())
        }
        Err(err) => {
            if slice.apply(|state| state.reject_list(ticket, err.user_message())) {
                notify_error(notifications, &err);
            }
            Err(err)
        }
    }
}

pub async fn fetch_account_details<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    id: &str,
    role: Role,
) -> Result<(), Error>
where
    S: SliceHandle<AccountState>,
    N: SliceHandle<NotificationState>,
{
    let ticket = slice.apply(|state| state.begin_details());

    match service::account::get_account(api, id, role).await {
        Ok(account) => {
            slice.apply(|state| state.fulfill_details(ticket, account));
            Ok(())
        }
        Err(err) => {
            if slice.apply(|state| state.reject_details(ticket, err.user_message())) {
                notify_error(notifications, &err);
            }
            Err(err)
        }
    }
}

/// Create an account of `payload.role`; admins go through the dedicated admin endpoint.
///
/// The list is not touched, callers re-fetch it on success.
pub async fn create_account<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    payload: CreateAccountDto,
) -> Result<AccountDto, Error>
where
    S: SliceHandle<AccountState>,
    N: SliceHandle<NotificationState>,
{
    let role = payload.role;
    let ticket = slice.apply(|state| state.begin_create());

    let result = match role {
        Role::Admin => service::account::create_admin(api, payload).await,
        _ => service::account::create_account(api, payload).await,
    };

    match result {
        Ok(account) => {
            slice.apply(|state| state.fulfill_create(ticket));
            notify_success(notifications, &format!("{} created successfully", role.label()));
            Ok(account)
        }
        Err(err) => {
            slice.apply(|state| state.reject_create(ticket, err.user_message()));
            notify_error(notifications, &err);
            Err(err)
        }
    }
}

/// Apply a confirmed activate/deactivate, the row flips only once the backend accepted it
pub async fn set_account_status<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    change: StatusChange,
) -> Result<AccountDto, Error>
where
    S: SliceHandle<AccountState>,
    N: SliceHandle<NotificationState>,
{
    let patch = UpdateAccountDto::status(change.is_active);
    update_account(api, slice, notifications, &change.id, &patch).await
}

pub async fn update_account<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    id: &str,
    patch: &UpdateAccountDto,
) -> Result<AccountDto, Error>
where
    S: SliceHandle<AccountState>,
    N: SliceHandle<NotificationState>,
{
    let ticket = slice.apply(|state| state.begin_update());

    match service::account::update_account(api, id, patch).await {
        Ok(account) => {
            slice.apply(|state| {
                state.update_selected(id, |selected| *selected = account.clone());
                state.fulfill_update(ticket, account.clone())
            });
            notify_success(notifications, "Account updated successfully");
            Ok(account)
        }
        Err(err) => {
            slice.apply(|state| state.reject_update(ticket, err.user_message()));
            notify_error(notifications, &err);
            Err(err)
        }
    }
}

pub async fn delete_account<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    id: &str,
) -> Result<(), Error>
where
    S: SliceHandle<AccountState>,
    N: SliceHandle<NotificationState>,
{
    let ticket = slice.apply(|state| state.begin_remove());

    match service::account::delete_account(api, id).await {
        Ok(()) => {
            slice.apply(|state| state.fulfill_remove(ticket, id));
            notify_success(notifications, "Account deleted successfully");
            Ok(())
        }
        Err(err) => {
            slice.apply(|state| state.reject_remove(ticket, err.user_message()));
            notify_error(notifications, &err);
            Err(err)
        }
    }
}
