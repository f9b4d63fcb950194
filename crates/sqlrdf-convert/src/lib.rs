//! sqlrdf-convert: Relational-to-RDF conversion for sqlite2rdf.
//!
//! Turns the tables of a [`sqlrdf_source::RelationalSource`] into named RDF
//! graphs: lookup tables become SKOS concept schemes, domain tables become
//! typed entities linked to the main table, and the result is written with
//! [`sqlrdf_serialize::GraphWriter`].

pub mod assemble;
pub mod dataset;
pub mod entity;
pub mod error;
pub mod linker;
pub mod logging;
pub mod mint;
pub mod persist;
pub mod vocabulary;

pub use assemble::{assemble, Conversion};
pub use entity::{EntityConverter, ReferenceMap};
pub use error::ConvertError;
pub use mint::NodeMinter;
pub use vocabulary::VocabularyMap;
