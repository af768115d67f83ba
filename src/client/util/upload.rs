use crate::{error::client::ClientError, model::document::DocumentCategory};

/// A PDF that passed the client-side checks and may be sent to the backend
#[derive(Clone, Debug, PartialEq)]
pub struct PdfUpload {
    pub ship_id: String,
    pub category: DocumentCategory,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PdfUpload {
    /// Check an upload against the screen's size ceiling.
    ///
    /// Fails without touching the network when no ship is selected, when the file is not a
    /// PDF, or when it is larger than `limit` bytes.
    pub fn new(
        ship_id: Option<&str>,
        category: DocumentCategory,
        file_name: &str,
        bytes: Vec<u8>,
        limit: u64,
    ) -> Result<Self, ClientError> {
        let ship_id = ship_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(ClientError::NoShipSelected)?;

        if !is_pdf(file_name) {
            return Err(ClientError::NotPdf);
        }

        check_size(bytes.len() as u64, limit)?;

        Ok(Self {
            ship_id: ship_id.to_string(),
            category,
            file_name: file_name.to_string(),
            bytes,
        })
    }
}

/// Reject files above the ceiling before reading them into memory
pub fn check_size(size: u64, limit: u64) -> Result<(), ClientError> {
    if size > limit {
        return Err(ClientError::FileTooLarge { size, limit });
    }

    Ok(())
}

fn is_pdf(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("pdf"))
}
