//! Error types for engine construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised while building a [`DistanceEngine`](crate::DistanceEngine).
///
/// Per-request failures never use this type; they are reported through
/// [`Status`](crate::Status) on the returned result.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    InvalidConfig(&'static str),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for EngineError {}
