use serde::{Deserialize, Serialize};

/// Success envelope wrapping every backend payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A page of records as returned by list endpoints
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub docs: Vec<T>,
    #[serde(default)]
    pub total_docs: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Paging parameters sent with list requests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 100,
        }
    }
}

/// Acknowledgement body for endpoints that only report a message
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MessageDto {
    #[serde(default)]
    pub message: Option<String>,
}

/// The response when an error occurs with an API request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// Either a single message or a list of validation messages
    #[serde(default)]
    pub message: Option<ErrorMessage>,
    /// Structured validation messages, when the backend reports them separately
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}
