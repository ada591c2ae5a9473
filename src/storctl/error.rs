use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorctlError {
    #[error("{kind} not found: {reference}")]
    NotFound {
        kind: &'static str,
        reference: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Render(#[from] stencil::Error),
}

impl StorctlError {
    pub fn not_found(kind: &'static str, reference: impl Into<String>) -> Self {
        StorctlError::NotFound {
            kind,
            reference: reference.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorctlError>;
