// error.rs - Error taxonomy for the random book generator

use std::path::PathBuf;

use thiserror::Error;

use crate::config::MAX_DIMENSION;

pub type Result<T> = std::result::Result<T, BookError>;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} must be a whole number from 1 to {max}, got {value:?}", max = MAX_DIMENSION)]
    InvalidDimension { field: &'static str, value: String },

    #[error("interval must be a positive number of seconds, got {value:?}")]
    InvalidInterval { value: String },

    #[error("could not locate a home directory to save into")]
    NoHomeDirectory,

    #[error("could not write {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BookError {
    /// Title of the modal dialog that reports this error.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidDimension { .. } | Self::InvalidInterval { .. } => "Invalid parameters",
            Self::NoHomeDirectory | Self::Save { .. } => "Save failed",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimension { .. } | Self::InvalidInterval { .. }
        )
    }
}
