//! API key resolution and caching.
//!
//! Resolution order: `TOPMOVER_FINNHUB_API_KEY` environment variable, then
//! the key-cache file, then an injected prompt whose answer is persisted
//! for future runs. Filesystem failures surface as typed errors and are
//! never retried.

use std::fs;
use std::path::{Path, PathBuf};

use crate::CredentialError;

/// Environment variable consulted before the cache file.
pub const API_KEY_ENV: &str = "TOPMOVER_FINNHUB_API_KEY";

/// Key-cache file name, relative to the working directory. Plain text,
/// one line, overwritten without versioning.
pub const KEY_CACHE_FILE: &str = "finnhub_key.txt";

/// File-backed store for the single upstream credential.
#[derive(Debug, Clone)]
pub struct ApiKeyStore {
    path: PathBuf,
}

impl Default for ApiKeyStore {
    fn default() -> Self {
        Self::new(KEY_CACHE_FILE)
    }
}

impl ApiKeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached key, if any. A present-but-blank file counts as a
    /// cache miss so a broken write never produces an empty credential.
    pub fn load(&self) -> Result<Option<String>, CredentialError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let key = contents.trim();
                if key.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(key.to_owned()))
                }
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CredentialError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Persist a key as a single line.
    pub fn save(&self, key: &str) -> Result<(), CredentialError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(CredentialError::EmptyKey);
        }

        fs::write(&self.path, format!("{key}\n")).map_err(|source| CredentialError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Remove the cache file. Missing file is not an error.
    pub fn clear(&self) -> Result<(), CredentialError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CredentialError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Resolve the credential: environment, then cache, then `prompt`.
    ///
    /// The prompt is only invoked when both the environment variable and
    /// the cache file miss; its answer is persisted before being returned.
    pub fn resolve_with<F>(&self, prompt: F) -> Result<String, CredentialError>
    where
        F: FnOnce() -> Result<String, CredentialError>,
    {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            let key = key.trim().to_owned();
            if !key.is_empty() {
                return Ok(key);
            }
        }

        if let Some(key) = self.load()? {
            return Ok(key);
        }

        let entered = prompt()?;
        let entered = entered.trim().to_owned();
        if entered.is_empty() {
            return Err(CredentialError::EmptyKey);
        }

        self.save(&entered)?;
        Ok(entered)
    }
}
