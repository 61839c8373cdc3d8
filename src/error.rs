// Error types
// Parse failures are per-record and recoverable; configuration failures are fatal.

use thiserror::Error;

/// A date, time or duration string that could not be turned into a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid date '{0}', expected MM/DD/YYYY")]
    InvalidDate(String),

    #[error("invalid time '{0}', expected HH:MM[:SS] or MM/DD/YYYY h:mm:ss AM|PM")]
    InvalidTime(String),

    #[error("invalid duration '{0}', expected H:MM[:SS]")]
    InvalidDuration(String),

    #[error("{component} value {value} is out of range")]
    OutOfRange { component: &'static str, value: i64 },
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type GridResult<T> = Result<T, GridError>;
