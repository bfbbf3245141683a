// SPDX-License-Identifier: MPL-2.0
use crate::dates::DateError;
use crate::notifications::NotificationError;
use thiserror::Error;

/// Crate-level error aggregating the module errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Usage Error: {0}")]
    Usage(String),
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
