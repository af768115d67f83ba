use reqwest::Method;

use crate::{
    client::{
        http::{ApiClient, Service},
        util::validate,
    },
    error::Error,
    model::{
        api::{PageDto, PageQuery},
        ship::{CreateShipDto, ShipDetailsDto, ShipDto, UpdateShipDto},
    },
};

pub async fn create_ship(api: &ApiClient, payload: CreateShipDto) -> Result<ShipDto, Error> {
    let payload = CreateShipDto {
        name: validate::required("Ship name", &payload.name)?,
        imo: validate::required("IMO", &payload.imo)?,
    };

    let request = api
        .authenticated(Method::POST, Service::Ship, "/ship")?
        .json(&payload);

    api.send_data(request).await
}

pub async fn list_ships(api: &ApiClient, query: PageQuery) -> Result<Vec<ShipDto>, Error> {
    let request = api
        .authenticated(Method::GET, Service::Ship, "/ship")?
        .query(&query);
    let page: PageDto<ShipDto> = api.send_data(request).await?;

    Ok(page.docs)
}

/// Ship record with crew, superintendents and documents embedded
pub async fn get_ship(api: &ApiClient, id: &str) -> Result<ShipDetailsDto, Error> {
    let request = api.authenticated(Method::GET, Service::Ship, &format!("/ship/{}", id))?;

    api.send_data(request).await
}

pub async fn update_ship(
    api: &ApiClient,
    id: &str,
    patch: &UpdateShipDto,
) -> Result<ShipDto, Error> {
    if let Some(name) = &patch.name {
        validate::required("Ship name", name)?;
    }
    if let Some(imo) = &patch.imo {
        validate::required("IMO", imo)?;
    }

    let request = api
        .authenticated(Method::PATCH, Service::Ship, &format!("/ship/{}", id))?
        .json(patch);

    api.send_data(request).await
}

pub async fn delete_ship(api: &ApiClient, id: &str) -> Result<(), Error> {
    let request = api.authenticated(Method::DELETE, Service::Ship, &format!("/ship/{}", id))?;

    api.send_empty(request).await
}
