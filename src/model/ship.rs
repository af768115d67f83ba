use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{account::AccountRef, document::DocumentDto};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipDto {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "IMO", alias = "imo")]
    pub imo: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// Ship detail record with its assignments and documents embedded
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipDetailsDto {
    #[serde(flatten)]
    pub ship: ShipDto,
    #[serde(default)]
    pub crew_members: Vec<AccountRef>,
    #[serde(default)]
    pub superintendents: Vec<AccountRef>,
    #[serde(default)]
    pub pdfs: Vec<DocumentDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateShipDto {
    pub name: String,
    #[serde(rename = "IMO")]
    pub imo: String,
}

/// Partial ship update, only present fields are sent
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShipDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "IMO", skip_serializing_if = "Option::is_none")]
    pub imo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_members: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superintendents: Option<Vec<String>>,
}

impl UpdateShipDto {
    pub fn status(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Default::default()
        }
    }

    pub fn crew(ids: Vec<String>) -> Self {
        Self {
            crew_members: Some(ids),
            ..Default::default()
        }
    }

    pub fn superintendents(ids: Vec<String>) -> Self {
        Self {
            superintendents: Some(ids),
            ..Default::default()
        }
    }
}
