use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FootprintError {
    #[error("invalid value '{value}' for {field}")]
    InvalidInput { field: &'static str, value: String },

    #[error("failed to parse profile: {0}")]
    ProfileParse(#[from] serde_json::Error),

    #[error("failed to read profile '{}': {source}", .path.display())]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FootprintError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }
}
