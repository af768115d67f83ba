use std::ops::{Deref, DerefMut};

use dioxus_logger::tracing;

use crate::{
    client::{
        http::ApiClient,
        service,
        store::{
            lifecycle::Lifecycle,
            notification::{notify_error, notify_success, NotificationState},
            slice::EntitySlice,
            SliceHandle,
        },
        util::{confirm::StatusChange, selection::Selection, upload::PdfUpload},
    },
    error::Error,
    model::{
        account::Role,
        api::PageQuery,
        document::{DocumentCategory, DocumentDto},
        ship::{CreateShipDto, ShipDetailsDto, ShipDto, UpdateShipDto},
    },
};

/// Ships, the ship opened on the details screen, and document uploads
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShipState {
    ships: EntitySlice<ShipDto, ShipDetailsDto>,
    upload: Lifecycle,
    document_delete: Lifecycle,
}

impl Deref for ShipState {
    type Target = EntitySlice<ShipDto, ShipDetailsDto>;

    fn deref(&self) -> &Self::Target {
        &self.ships
    }
}

impl DerefMut for ShipState {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.ships
    }
}

impl ShipState {
    pub fn uploading(&self) -> bool {
        self.upload.is_pending()
    }

    pub fn deleting_document(&self) -> bool {
        self.document_delete.is_pending()
    }
}

/// A file picked in the browser, not yet checked against the upload rules
#[derive(Clone, Debug, PartialEq)]
pub struct PickedFile {
    pub category: DocumentCategory,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Outcome of creating a ship and attaching its documents.
///
/// Each step is reported on its own; a failed upload does not undo the ship.
#[derive(Debug)]
pub struct ShipCreation {
    pub ship: ShipDto,
    pub uploaded: Vec<DocumentDto>,
    pub failed: Vec<(String, Error)>,
}

pub async fn fetch_ships<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
) -> Result<(), Error>
where
    S: SliceHandle<ShipState>,
    N: SliceHandle<NotificationState>,
{
    let ticket = slice.apply(|state| state.begin_list());

    match service::ship::list_ships(api, PageQuery::default()).await {
        Ok(ships) => {
            slice.apply(|state| state.fulfill_list(ticket, ships));
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

pub async fn fetch_ship_details<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    id: &str,
) -> Result<(), Error>
where
    S: SliceHandle<ShipState>,
    N: SliceHandle<NotificationState>,
{
    let ticket = slice.apply(|state| state.begin_details());

    match service::ship::get_ship(api, id).await {
        Ok(details) => {
            slice.apply(|state| state.fulfill_details(ticket, details));
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

/// Create a ship; the list is not touched, callers re-fetch it on success
pub async fn create_ship<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    payload: CreateShipDto,
) -> Result<ShipDto, Error>
where
    S: SliceHandle<ShipState>,
    N: SliceHandle<NotificationState>,
{
    let ticket = slice.apply(|state| state.begin_create());

    match service::ship::create_ship(api, payload).await {
        Ok(ship) => {
            slice.apply(|state| state.fulfill_create(ticket));
            notify_success(notifications, "Ship created successfully");
            Ok(ship)
        }
        Err(err) => {
            slice.apply(|state| state.reject_create(ticket, err.user_message()));
            notify_error(notifications, &err);
            Err(err)
        }
    }
}

/// Create a ship, then upload each picked file against it.
///
/// Uploads run one after another once the ship exists. Failures are collected per file and
/// never roll back the ship or the uploads that already succeeded.
pub async fn create_ship_with_documents<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    payload: CreateShipDto,
    files: Vec<PickedFile>,
    limit: u64,
) -> Result<ShipCreation, Error>
where
    S: SliceHandle<ShipState>,
    N: SliceHandle<NotificationState>,
{
    let ship = create_ship(api, slice, notifications, payload).await?;

    let mut uploaded = Vec::new();
    let mut failed = Vec::new();

    for file in files {
        let file_name = file.file_name.clone();
        match upload_document(
            api,
            slice,
            notifications,
            Some(ship.id.as_str()),
            file.category,
            &file.file_name,
            file.bytes,
            limit,
        )
        .await
        {
            Ok(document) => uploaded.push(document),
            Err(err) => {
                tracing::warn!(
                    ship_id = %ship.id,
                    file_name = %file_name,
                    "Document upload failed: {}",
                    err
                );
                failed.push((file_name, err));
            }
        }
    }

    Ok(ShipCreation {
        ship,
        uploaded,
        failed,
    })
}

pub async fn update_ship<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    id: &str,
    patch: &UpdateShipDto,
    success_message: &str,
) -> Result<ShipDto, Error>
where
    S: SliceHandle<ShipState>,
    N: SliceHandle<NotificationState>,
{
    let ticket = slice.apply(|state| state.begin_update());

    match service::ship::update_ship(api, id, patch).await {
        Ok(ship) => {
            slice.apply(|state| {
                state.update_selected(id, |selected| selected.ship = ship.clone());
                state.fulfill_update(ticket, ship.clone())
            });
            notify_success(notifications, success_message);
            Ok(ship)
        }
        Err(err) => {
            slice.apply(|state| state.reject_update(ticket, err.user_message()));
            notify_error(notifications, &err);
            Err(err)
        }
    }
}

/// Apply a confirmed activate/deactivate, the switch flips only once the backend accepted it
pub async fn set_ship_status<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    change: StatusChange,
) -> Result<ShipDto, Error>
where
    S: SliceHandle<ShipState>,
    N: SliceHandle<NotificationState>,
{
    let message = if change.is_active {
        "Ship activated successfully"
    } else {
        "Ship deactivated successfully"
    };

    update_ship(
        api,
        slice,
        notifications,
        &change.id,
        &UpdateShipDto::status(change.is_active),
        message,
    )
    .await
}

/// Which assignment list of a ship a selection replaces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assignment {
    Crew,
    Superintendents,
}

impl Assignment {
    pub fn label(&self) -> &'static str {
        match self {
            Assignment::Crew => "Crew Members",
            Assignment::Superintendents => "Superintendents",
        }
    }

    /// Role the assignable accounts hold
    pub fn role(&self) -> Role {
        match self {
            Assignment::Crew => Role::Crew,
            Assignment::Superintendents => Role::Superintendent,
        }
    }
}

/// Replace a ship's crew or superintendents with the staged selection, then reload the
/// ship so the embedded lists reflect the backend.
pub async fn assign_members<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    ship_id: &str,
    assignment: Assignment,
    selection: Selection,
) -> Result<(), Error>
where
    S: SliceHandle<ShipState>,
    N: SliceHandle<NotificationState>,
{
    let (patch, message) = match assignment {
        Assignment::Crew => (
            UpdateShipDto::crew(selection.into_ids()),
            "Crew members assigned successfully",
        ),
        Assignment::Superintendents => (
            UpdateShipDto::superintendents(selection.into_ids()),
            "Superintendents assigned successfully",
        ),
    };

    update_ship(api, slice, notifications, ship_id, &patch, message).await?;
    fetch_ship_details(api, slice, notifications, ship_id).await
}

/// Check and upload one PDF.
///
/// Precondition failures (no ship, not a PDF, over `limit`) are reported without issuing a
/// request. A successful upload is appended to the open ship's documents.
#[allow(clippy::too_many_arguments)]
pub async fn upload_document<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    ship_id: Option<&str>,
    category: DocumentCategory,
    file_name: &str,
    bytes: Vec<u8>,
    limit: u64,
) -> Result<DocumentDto, Error>
where
    S: SliceHandle<ShipState>,
    N: SliceHandle<NotificationState>,
{
    let upload = match PdfUpload::new(ship_id, category, file_name, bytes, limit) {
        Ok(upload) => upload,
        Err(err) => {
            let err = Error::from(err);
            notify_error(notifications, &err);
            return Err(err);
        }
    };

    let ship_id = upload.ship_id.clone();
    let ticket = slice.apply(|state| state.upload.begin());

    match service::document::upload_pdf(api, upload).await {
        Ok(document) => {
            slice.apply(|state| {
                state.upload.fulfill(ticket);
                state.update_selected(&ship_id, |selected| selected.pdfs.push(document.clone()));
            });
            notify_success(
                notifications,
                &format!("{} uploaded successfully", document.original_file_name),
            );
            Ok(document)
        }
        Err(err) => {
            slice.apply(|state| {
                state.upload.reject(ticket);
                state.error = Some(err.user_message());
            });
            notify_error(notifications, &err);
            Err(err)
        }
    }
}

pub async fn delete_document<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    ship_id: &str,
    document_id: &str,
) -> Result<(), Error>
where
    S: SliceHandle<ShipState>,
    N: SliceHandle<NotificationState>,
{
    let ticket = slice.apply(|state| state.document_delete.begin());

    match service::document::delete_pdf(api, document_id).await {
        Ok(()) => {
            slice.apply(|state| {
                state.document_delete.fulfill(ticket);
                state.update_selected(ship_id, |selected| {
                    selected.pdfs.retain(|doc| doc.id != document_id)
                });
            });
            notify_success(notifications, "Document deleted successfully");
            Ok(())
        }
        Err(err) => {
            slice.apply(|state| {
                state.document_delete.reject(ticket);
                state.error = Some(err.user_message());
            });
            notify_error(notifications, &err);
            Err(err)
        }
    }
}

pub async fn delete_ship<S, N>(
    api: &ApiClient,
    slice: &mut S,
    notifications: &mut N,
    id: &str,
) -> Result<(), Error>
where
    S: SliceHandle<ShipState>,
    N: SliceHandle<NotificationState>,
{
    let ticket = slice.apply(|state| state.begin_remove());

    match service::ship::delete_ship(api, id).await {
        Ok(()) => {
            slice.apply(|state| state.fulfill_remove(ticket, id));
            notify_success(notifications, "Ship deleted successfully");
            Ok(())
        }
        Err(err) => {
            slice.apply(|state| state.reject_remove(ticket, err.user_message()));
            notify_error(notifications, &err);
            Err(err)
        }
    }
}
