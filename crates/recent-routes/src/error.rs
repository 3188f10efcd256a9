//! Route error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Invalid location: {0}")]
    InvalidUrl(String),

    #[error("No route for path: {0}")]
    UnknownPath(String),
}

impl From<url::ParseError> for RouteError {
    fn from(err: url::ParseError) -> Self {
        RouteError::InvalidUrl(err.to_string())
    }
}
