use crate::FieldErrors;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("Remote directory error: {message} {location}")]
    Remote {
        message: String,
        location: ErrorLocation,
    },

    #[error("Local store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error from collected field messages
    #[track_caller]
    pub fn validation(errors: FieldErrors) -> Self {
        CoreError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a remote source error
    #[track_caller]
    pub fn remote<S: Into<String>>(message: S) -> Self {
        CoreError::Remote {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a local store error
    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        CoreError::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field-level messages, if this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CoreError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CoreError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
