use std::fmt;

use crate::graphql::GraphQlError;

/// Result type for postboard-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the GraphQL endpoint
#[derive(Debug)]
pub enum Error {
    /// Transport failure (connect, TLS, timeout, body read)
    Http(reqwest::Error),

    /// Endpoint answered with a non-success status
    Status { code: u16, body: String },

    /// Server reported one or more GraphQL errors
    GraphQl(Vec<GraphQlError>),

    /// Response body was not the expected JSON shape
    Decode(serde_json::Error),

    /// Response carried neither errors nor data for the operation
    MissingData(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status { code, body } => {
                if body.is_empty() {
                    write!(f, "Response not successful: status {}", code)
                } else {
                    write!(f, "Response not successful: status {}: {}", code, body)
                }
            }
            Error::GraphQl(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "{}", messages.join("; "))
            }
            Error::Decode(err) => write!(f, "Malformed response: {}", err),
            Error::MissingData(operation) => write!(f, "No data returned for {}", operation),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Status { .. } | Error::GraphQl(_) | Error::MissingData(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}
