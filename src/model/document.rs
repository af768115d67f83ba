use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed classification used to bucket ship documents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentCategory {
    Compliance,
    Crewing,
    Mechanical,
}

impl DocumentCategory {
    /// Display order of the category buckets
    pub const ALL: [DocumentCategory; 3] = [
        DocumentCategory::Compliance,
        DocumentCategory::Crewing,
        DocumentCategory::Mechanical,
    ];

    /// Value sent in the multipart `type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategory::Compliance => "COMPLIANCE",
            DocumentCategory::Crewing => "CREWING",
            DocumentCategory::Mechanical => "MECHANICAL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentCategory::Compliance => "Compliance",
            DocumentCategory::Crewing => "Crewing",
            DocumentCategory::Mechanical => "Mechanical",
        }
    }

    pub fn parse(value: &str) -> Option<DocumentCategory> {
        DocumentCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    #[serde(alias = "_id")]
    pub id: String,
    pub original_file_name: String,
    #[serde(rename = "type")]
    pub category: DocumentCategory,
    pub download_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub ship: Option<String>,
}

/// Documents of one category, in backend order
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentGroup {
    pub category: DocumentCategory,
    pub documents: Vec<DocumentDto>,
}

/// Buckets documents by category in the fixed category order.
///
/// Every category is present in the output, empty buckets included, and the
/// relative order of documents inside a bucket matches the input.
pub fn group_by_category(documents: &[DocumentDto]) -> Vec<DocumentGroup> {
    DocumentCategory::ALL
        .into_iter()
        .map(|category| DocumentGroup {
            category,
            documents: documents
                .iter()
                .filter(|doc| doc.category == category)
                .cloned()
                .collect(),
        })
        .collect()
}
