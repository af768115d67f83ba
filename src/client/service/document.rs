use reqwest::{
    multipart::{Form, Part},
    Method,
};

use crate::{
    client::{
        http::{ApiClient, Service},
        util::upload::PdfUpload,
    },
    error::Error,
    model::document::DocumentDto,
};

/// Upload a PDF already checked by [`PdfUpload::new`]
pub async fn upload_pdf(api: &ApiClient, upload: PdfUpload) -> Result<DocumentDto, Error> {
    let PdfUpload {
        ship_id,
        category,
        file_name,
        bytes,
    } = upload;

    let file = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("application/pdf")?;
    let form = Form::new()
        .part("file", file)
        .text("shipId", ship_id)
        .text("type", category.as_str());

    let request = api
        .authenticated(Method::POST, Service::Ship, "/pdf/upload")?
        .multipart(form);

    api.send_data(request).await
}

pub async fn delete_pdf(api: &ApiClient, id: &str) -> Result<(), Error> {
    let request = api.authenticated(Method::DELETE, Service::Ship, &format!("/pdf/{}", id))?;

    api.send_empty(request).await
}
