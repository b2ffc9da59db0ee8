//! Crate-level error types.

use std::fmt;

/// Errors produced by the flyview crate.
#[derive(Debug)]
pub enum FlyviewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but describe an unusable start pose.
    InvalidOptions(String),
    /// TOML tour parsing failure.
    TourParse(String),
    /// A tour parsed but describes an impossible sequence.
    InvalidTour(String),
}

impl fmt::Display for FlyviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::TourParse(msg) => write!(f, "tour parse error: {msg}"),
            Self::InvalidTour(msg) => write!(f, "invalid tour: {msg}"),
        }
    }
}

impl std::error::Error for FlyviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FlyviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
