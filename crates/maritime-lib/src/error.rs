use std::fmt;

use thiserror::Error;

/// Convenient result alias for the maritime library.
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of reference record a lookup was attempted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Port,
    BunkerHub,
    ShipType,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ReferenceKind::Port => "port",
            ReferenceKind::BunkerHub => "bunkering hub",
            ReferenceKind::ShipType => "ship type",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a port, bunkering hub or ship type is not in the catalog.
    #[error("unknown {kind}: {name}{}", format_suggestions(.suggestions))]
    InvalidReference {
        kind: ReferenceKind,
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when request parameters are malformed or out of range.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Raised when a numeric routine produced a non-finite result.
    #[error("degenerate computation: {message}")]
    ComputationDegenerate { message: String },

    /// Raised when reference data fails validation while building a catalog.
    #[error("invalid catalog data: {message}")]
    CatalogValidation { message: String },

    /// Raised when duplicate names are encountered during catalog load.
    #[error("duplicate {kind} name encountered: {name}")]
    DuplicateCatalogEntry { kind: ReferenceKind, name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
