use reqwest::Method;

use crate::{
    client::{
        http::{ApiClient, Service},
        util::validate,
    },
    error::Error,
    model::{
        account::{AccountDto, CreateAccountDto, Role, UpdateAccountDto},
        api::{PageDto, PageQuery},
    },
};

fn validated(payload: CreateAccountDto) -> Result<CreateAccountDto, Error> {
    Ok(CreateAccountDto {
        first_name: validate::required("First name", &payload.first_name)?,
        last_name: validate::required("Last name", &payload.last_name)?,
        email: validate::email(&payload.email)?,
        password: validate::strong_password(&payload.password)?,
        role: payload.role,
    })
}

/// Create an admin account
pub async fn create_admin(api: &ApiClient, payload: CreateAccountDto) -> Result<AccountDto, Error> {
    let payload = CreateAccountDto {
        role: Role::Admin,
        ..validated(payload)?
    };

    let request = api
        .authenticated(Method::POST, Service::Auth, "/admin")?
        .json(&payload);

    api.send_data(request).await
}

/// Create a user, crew or superintendent account
pub async fn create_account(
    api: &ApiClient,
    payload: CreateAccountDto,
) -> Result<AccountDto, Error> {
    let payload = validated(payload)?;

    let request = api
        .authenticated(Method::POST, Service::Auth, "/users")?
        .json(&payload);

    api.send_data(request).await
}

/// List accounts holding `role`
pub async fn list_accounts(
    api: &ApiClient,
    role: Role,
    query: PageQuery,
) -> Result<Vec<AccountDto>, Error> {
    let request = api
        .authenticated(Method::GET, Service::Auth, "/users")?
        .query(&[
            ("user_role", role.as_str().to_string()),
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ]);
    let page: PageDto<AccountDto> = api.send_data(request).await?;

    Ok(page.docs)
}

pub async fn get_account(api: &ApiClient, id: &str, role: Role) -> Result<AccountDto, Error> {
    let request = api
        .authenticated(Method::GET, Service::Auth, &format!("/users/{}", id))?
        .query(&[("user_role", role.as_str())]);

    api.send_data(request).await
}

/// Partially update an account, returning the updated record
pub async fn update_account(
    api: &ApiClient,
    id: &str,
    patch: &UpdateAccountDto,
) -> Result<AccountDto, Error> {
    let request = api
        .authenticated(Method::PATCH, Service::Auth, &format!("/users/{}", id))?
        .json(patch);

    api.send_data(request).await
}

pub async fn delete_account(api: &ApiClient, id: &str) -> Result<(), Error> {
    let request = api.authenticated(Method::DELETE, Service::Auth, &format!("/users/{}", id))?;

    api.send_empty(request).await
}
