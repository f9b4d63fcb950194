//! sqlrdf-serialize: RDF serializers for sqlite2rdf graphs.
//!
//! Writes [`sqlrdf_core::NamedGraph`]s as Turtle, N3, TriG, N-Triples,
//! N-Quads and RDF/XML through the rio formatters, and as TriX with
//! quick-xml. [`GraphWriter`] picks the formatter for an [`RdfFormat`] and
//! names output files after the graph.

pub mod error;
pub mod format;
pub mod model;
pub mod trix;
pub mod writer;

pub use error::SerializeError;
pub use format::RdfFormat;
pub use writer::GraphWriter;
