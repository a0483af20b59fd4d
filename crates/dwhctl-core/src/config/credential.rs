//! Credential resolution with optional keyring support
//!
//! Secrets in the config file (AWS keys, the admin password) may be given as
//! plaintext, as a `keyring:<entry>` reference, or overridden through an
//! environment variable.

use super::error::{ConfigError, Result};
use std::env;

/// Prefix that indicates a value should be retrieved from the keyring
const KEYRING_PREFIX: &str = "keyring:";

/// Service name for keyring entries
#[cfg(feature = "secure-storage")]
const SERVICE_NAME: &str = "dwhctl";

/// Resolves configured credential values
#[derive(Debug, Default, Clone, Copy)]
pub struct CredentialStore;

impl CredentialStore {
    pub fn new() -> Self {
        Self
    }

    /// Retrieve a credential value
    ///
    /// Resolution order:
    /// 1. Check environment variable (if env_var provided)
    /// 2. If value starts with "keyring:", retrieve from keyring
    /// 3. Otherwise, return the value as-is (plaintext)
    pub fn get_credential(&self, value: &str, env_var: Option<&str>) -> Result<String> {
        if let Some(var) = env_var
            && let Ok(env_value) = env::var(var)
        {
            return Ok(env_value);
        }

        if let Some(key) = value.strip_prefix(KEYRING_PREFIX) {
            #[cfg(feature = "secure-storage")]
            {
                let entry = keyring::Entry::new(SERVICE_NAME, key)
                    .map_err(|e| ConfigError::KeyringError(e.to_string()))?;
                entry.get_password().map_err(|e| {
                    ConfigError::KeyringError(format!(
                        "Failed to retrieve credential '{}' from keyring: {}",
                        key, e
                    ))
                })
            }
            #[cfg(not(feature = "secure-storage"))]
            {
                Err(ConfigError::CredentialError(format!(
                    "Credential '{}' references keyring but secure-storage feature is not enabled",
                    key
                )))
            }
        } else {
            Ok(value.to_string())
        }
    }

    /// Check if a value is a keyring reference
    pub fn is_keyring_reference(value: &str) -> bool {
        value.starts_with(KEYRING_PREFIX)
    }
}
