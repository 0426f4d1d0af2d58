use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] topmover_core::ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error("quote fetch failed: {0}")]
    Fetch(#[from] topmover_core::SourceError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Credential(#[from] topmover_core::CredentialError),

    #[error(transparent)]
    Report(#[from] topmover_core::ReportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::Fetch(_) => 3,
            Self::Serialization(_) => 4,
            Self::Credential(_) => 7,
            Self::Report(_) => 8,
            Self::Io(_) => 10,
        }
    }
}
