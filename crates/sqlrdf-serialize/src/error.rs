//! Error types for the sqlrdf-serialize crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerializeError {
    #[error("Unknown serialization format: {0}")]
    UnknownFormat(String),

    #[error("XML write error: {0}")]
    Xml(String),

    /// Write failures, and terms a rio formatter cannot express (such as a
    /// predicate with no XML local name in RDF/XML).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SerializeError>;

/// Wrap a quick-xml writer failure.
pub(crate) fn xml_error(err: impl std::fmt::Display) -> SerializeError {
    SerializeError::Xml(err.to_string())
}
