// src/error.rs
//! Error taxonomy for the harvesting pipeline

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Transport-level failures of the session client.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Failed to create HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Invalid URL {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Session cookies for {url} are not a valid header value")]
    InvalidCookie {
        url: String,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// Login failures. Only transport failures are detected; the response
/// content of the credential POST is never inspected.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Could not load the login page")]
    LoginPage(#[source] NetworkError),

    #[error("Credential submission failed")]
    Submit(#[source] NetworkError),
}

impl AuthError {
    pub fn network(&self) -> &NetworkError {
        match self {
            AuthError::LoginPage(e) | AuthError::Submit(e) => e,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("Candidate query did not return a JSON document (session not authenticated?)")]
    Document(#[source] serde_json::Error),
}

/// A single candidate entry that could not be turned into a record.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Candidate {id} is listed in allIds but missing from byIds")]
    Missing { id: String },

    #[error("Candidate {id} is malformed")]
    Malformed {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported candidate id in allIds: {0}")]
    InvalidId(String),
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("{} already exists", path.display())]
    Exists { path: PathBuf },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Session(NetworkError),

    #[error("Login failed")]
    Auth(#[from] AuthError),

    #[error("Candidate query failed")]
    Fetch(#[from] FetchError),

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
