//! Error types for the sqlrdf-convert crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Mapping error: {0}")]
    Mapping(#[from] sqlrdf_core::CoreError),

    #[error("Source error: {0}")]
    Source(#[from] sqlrdf_source::SourceError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] sqlrdf_serialize::SerializeError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
