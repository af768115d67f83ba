use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account roles known to the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Superadmin,
    User,
    Crew,
    Superintendent,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Superadmin,
        Role::Admin,
        Role::User,
        Role::Crew,
        Role::Superintendent,
    ];

    /// Value used for the `user_role` query parameter and persisted session role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Superadmin => "SUPERADMIN",
            Role::User => "USER",
            Role::Crew => "CREW",
            Role::Superintendent => "SUPERINTENDENT",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Superadmin => "Super Admin",
            Role::User => "User",
            Role::Crew => "Crew",
            Role::Superintendent => "Superintendent",
        }
    }

    /// Plural label used for screen titles
    pub fn plural_label(&self) -> &'static str {
        match self {
            Role::Admin => "Admins",
            Role::Superadmin => "Super Admins",
            Role::User => "Users",
            Role::Crew => "Crew",
            Role::Superintendent => "Superintendents",
        }
    }

    /// Whether the role may sign in to the dashboard at all
    pub fn is_dashboard_role(&self) -> bool {
        matches!(self, Role::Admin | Role::Superadmin)
    }

    /// Whether this role may view and manage accounts holding `target`
    pub fn can_manage(&self, target: Role) -> bool {
        match self {
            Role::Superadmin => target != Role::Superadmin,
            Role::Admin => matches!(target, Role::User | Role::Crew | Role::Superintendent),
            _ => false,
        }
    }

    /// Account families listed in the sidebar for this role, in display order
    pub fn managed_roles(&self) -> Vec<Role> {
        [Role::Admin, Role::User, Role::Crew, Role::Superintendent]
            .into_iter()
            .filter(|target| self.can_manage(*target))
            .collect()
    }

    pub fn can_manage_ships(&self) -> bool {
        self.is_dashboard_role()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    #[serde(alias = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl AccountDto {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Reference to an account embedded in a ship record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl AccountRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl From<&AccountDto> for AccountRef {
    fn from(account: &AccountDto) -> Self {
        Self {
            id: account.id.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Partial account update, only present fields are sent
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateAccountDto {
    pub fn status(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Default::default()
        }
    }
}
