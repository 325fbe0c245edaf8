use anyhow::anyhow;
use serde::Serialize;

use super::password::is_bcrypt_hash;

/// Discriminator stored in every user document's `type` field.
pub const USER_TYPE: &str = "user";

/// A user document as stored in the `users` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Stable identifier, `user::<username>`
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    /// Bcrypt hash; never plaintext
    pub password: String,
    /// Display name
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl User {
    /// Build a user from an already-hashed password.
    pub fn new(username: &str, name: &str, password_hash: String) -> anyhow::Result<Self> {
        if !is_bcrypt_hash(&password_hash) {
            return Err(anyhow!(
                "password for user '{}' is not a bcrypt hash",
                username
            ));
        }
        Ok(Self {
            id: Self::id_for(username),
            username: username.to_string(),
            password: password_hash,
            name: name.to_string(),
            kind: USER_TYPE.to_string(),
        })
    }

    pub fn id_for(username: &str) -> String {
        format!("user::{username}")
    }
}
