use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur during calls to the remote directory
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Remote returned status {status} for {url} {location}")]
    Status {
        status: u16,
        url: String,
        location: ErrorLocation,
    },

    #[error("Invalid base URL {url}: {message} {location}")]
    Url {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an invalid URL error with location
    #[track_caller]
    pub fn url<S: Into<String>>(url: &str, message: S) -> Self {
        ClientError::Url {
            url: url.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a status error with location
    #[track_caller]
    pub fn status(status: u16, url: String) -> Self {
        ClientError::Status {
            status,
            url,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<ClientError> for ud_core::CoreError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        ud_core::CoreError::remote(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
