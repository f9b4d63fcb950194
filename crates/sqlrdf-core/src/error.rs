use thiserror::Error;

/// Top-level error type for mapping configuration problems.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Invalid namespace IRI: {0}")]
    InvalidNamespace(#[from] oxrdf::IriParseError),

    #[error("Invalid label language: {0}")]
    InvalidLanguageTag(#[from] oxrdf::LanguageTagParseError),

    #[error("Main table {0} has no class mapping")]
    MainTableUnmapped(String),

    #[error("Table {0} is not mapped to a class")]
    UnmappedTable(String),

    #[error("Column {column} of table {table} links to {lookup}, which is not a lookup table")]
    UnknownLookupTable {
        table: String,
        column: String,
        lookup: String,
    },

    #[error("Column {column} of table {table} links to {lookup}, which is not in the database")]
    MissingLookupTable {
        table: String,
        column: String,
        lookup: String,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
