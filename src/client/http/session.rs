use std::{cell::RefCell, collections::HashMap};

use serde::{Deserialize, Serialize};

use crate::{error::Error, model::account::Role};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const USER_ROLE_KEY: &str = "userRole";
pub const USER_EMAIL_KEY: &str = "userEmail";

/// Durable key/value storage holding the signed-in session
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&self, key: &str) -> Result<(), Error>;
}

/// The single signed-in session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub role: Role,
    pub email: String,
}

impl Session {
    /// Read the session from storage.
    ///
    /// Returns `None` when the token is missing or empty, or when the stored role is not a
    /// known role.
    pub fn load(storage: &dyn SessionStorage) -> Option<Session> {
        let access_token = storage
            .get(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())?;
        let role = storage
            .get(USER_ROLE_KEY)
            .and_then(|role| Role::parse(&role))?;
        let email = storage.get(USER_EMAIL_KEY).unwrap_or_default();

        Some(Session {
            access_token,
            role,
            email,
        })
    }

    pub fn save(&self, storage: &dyn SessionStorage) -> Result<(), Error> {
        storage.set(ACCESS_TOKEN_KEY, &self.access_token)?;
        storage.set(USER_ROLE_KEY, self.role.as_str())?;
        storage.set(USER_EMAIL_KEY, &self.email)?;

        Ok(())
    }

    /// Remove every session key from storage
    pub fn clear(storage: &dyn SessionStorage) -> Result<(), Error> {
        storage.remove(ACCESS_TOKEN_KEY)?;
        storage.remove(USER_ROLE_KEY)?;
        storage.remove(USER_EMAIL_KEY)?;

        Ok(())
    }
}

/// In-memory storage used outside the browser and in tests
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser `localStorage`, survives page reloads
#[cfg(feature = "web")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSessionStorage;

#[cfg(feature = "web")]
impl LocalSessionStorage {
    fn storage() -> Result<web_sys::Storage, Error> {
        web_sys::window()
            .ok_or_else(|| Error::Storage("no window available".to_string()))?
            .local_storage()
            .map_err(|e| Error::Storage(format!("{:?}", e)))?
            .ok_or_else(|| Error::Storage("localStorage is disabled".to_string()))
    }
}

#[cfg(feature = "web")]
impl SessionStorage for LocalSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}
