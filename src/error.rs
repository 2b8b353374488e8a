//! Error taxonomy for the chain-method core.
//!
//! Purpose
//! - The teacher's own library layer never reaches for `thiserror` or
//!   `anyhow` (those live only at its CLI boundary); fallible operations
//!   here follow the same house style: a plain enum with a hand-written
//!   `Display` and `impl std::error::Error`.
//!
//! Policy (spec §7)
//! - All failures are raised at the boundary where they are detected;
//!   none are recovered locally, none are retried.

use std::fmt;

/// The three failure kinds the core can raise.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An operation received an argument of the wrong kind, e.g. adding
    /// a node that is not of the graph's node type.
    Type { message: String },
    /// A structural invariant was violated at construction, e.g. an
    /// edge references a node absent from the node set, a degenerate
    /// 2D line, or an unknown metric name.
    Validation { message: String },
    /// An ill-formed geometric configuration was reached during
    /// classification — a bug in the caller's input or in the
    /// algorithm's assumptions, not something to recover from.
    Domain { message: String },
}

impl Error {
    pub fn type_failure(message: impl Into<String>) -> Self {
        Error::Type { message: message.into() }
    }

    pub fn validation_failure(message: impl Into<String>) -> Self {
        Error::Validation { message: message.into() }
    }

    pub fn domain_failure(message: impl Into<String>) -> Self {
        Error::Domain { message: message.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Type { message } => write!(f, "type failure: {message}"),
            Error::Validation { message } => write!(f, "validation failure: {message}"),
            Error::Domain { message } => write!(f, "domain failure: {message}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
