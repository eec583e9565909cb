//! Crate-level error types.
//!
//! Navigation itself never fails: misses, drags and out-of-bounds clicks are
//! silent no-ops. The only fallible surface is options persistence.

use std::fmt;

/// Errors produced by the atrium crate.
#[derive(Debug)]
pub enum AtriumError {
    /// Generic I/O failure while reading or writing an options file.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for AtriumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for AtriumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for AtriumError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
