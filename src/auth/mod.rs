//! Single-user authentication
//!
//! The service has exactly one account whose credentials come from
//! configuration. The password is hashed once at startup and only the hash
//! is kept in memory.

pub mod password;

use crate::config::AuthConfig;
use crate::utils::error::Result;
use std::fmt;
use tracing::{debug, warn};

pub use password::{hash_password, verify_password};

/// The one configured user id and its password hash
#[derive(Clone)]
pub struct StaticCredentials {
    user_id: String,
    password_hash: String,
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

impl StaticCredentials {
    pub fn new(user_id: impl Into<String>, password: &str) -> Result<Self> {
        Ok(Self {
            user_id: user_id.into(),
            password_hash: hash_password(password)?,
        })
    }

    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        Self::new(config.user_id.clone(), &config.password)
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Check a login attempt
    pub fn verify(&self, user_id: &str, password: &str) -> bool {
        if user_id != self.user_id {
            debug!("Login rejected: unknown user id");
            return false;
        }
        match verify_password(password, &self.password_hash) {
            Ok(valid) => valid,
            Err(e) => {
                warn!("Password verification error: {}", e);
                false
            }
        }
    }
}
