//! sqlrdf-source: read-only access to the relational database being converted.
//!
//! The converter only ever sees the `RelationalSource` trait: a table listing,
//! per-table column introspection, and per-table row materialization.
//! `SqliteSource` implements it on top of rusqlite.

pub mod client;
pub mod queries;
pub mod schema;

pub use client::{SourceError, SqliteSource};
pub use queries::RelationalSource;
pub use schema::{Column, ColumnType, Row, Table, Value};
