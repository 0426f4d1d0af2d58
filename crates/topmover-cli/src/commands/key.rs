use std::io::{BufRead, Write};

use topmover_core::{ApiKeyStore, CredentialError};

use crate::error::CliError;

/// Prompt on stderr so piped stdout stays machine-readable.
pub fn prompt_for_key() -> Result<String, CredentialError> {
    let mut stderr = std::io::stderr();
    write!(stderr, "Enter your Finnhub API key: ").map_err(CredentialError::Prompt)?;
    stderr.flush().map_err(CredentialError::Prompt)?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(CredentialError::Prompt)?;

    Ok(line)
}

pub fn set(store: &ApiKeyStore) -> Result<String, CliError> {
    let entered = prompt_for_key()?;
    store.save(entered.trim())?;
    Ok(format!("API key saved to {}", store.path().display()))
}

pub fn clear(store: &ApiKeyStore) -> Result<String, CliError> {
    store.clear()?;
    Ok(format!("removed {}", store.path().display()))
}
