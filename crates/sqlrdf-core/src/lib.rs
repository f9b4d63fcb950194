//! sqlrdf-core: Shared types, configuration, and error handling for sqlite2rdf.
//!
//! This crate provides the foundational types used across all sqlite2rdf components:
//! - In-memory graphs over `oxrdf` terms
//! - Vocabulary constants (RDF, RDFS, XSD, SKOS, VoID)
//! - The table-to-graph mapping configuration
//! - Common error types

pub mod config;
pub mod error;
pub mod types;
pub mod vocab;

pub use config::{DatasetDescription, MappingConfig, TableMapping};
pub use error::CoreError;
pub use types::{
    integer_literal, lang_literal, string_literal, Graph, Literal, NamedGraph, NamedNode,
    NamedNodeRef, Subject, Term, Triple,
};
