//! Domain tables become typed entity nodes.
//!
//! Every row is minted as one node of the table's class, labeled with the
//! class name and the row identifier. Each non-null value becomes exactly one
//! statement: a concept reference when the column is linked to a lookup table
//! that knows the value, a typed literal otherwise.

use std::collections::BTreeMap;

use sqlrdf_core::vocab::{rdf, rdfs, xsd};
use sqlrdf_core::{
    integer_literal, lang_literal, string_literal, Graph, Literal, MappingConfig, NamedNode, Term,
};
use sqlrdf_source::{Column, ColumnType, Row, Table, Value};

use crate::error::Result;
use crate::mint::NodeMinter;
use crate::vocabulary::VocabularyMap;

/// Main-table identifier → entity node.
pub type ReferenceMap = BTreeMap<i64, NamedNode>;

/// Converts domain tables against a fixed mapping and vocabulary.
///
/// Both are only read; the converter writes into the graph it is handed.
pub struct EntityConverter<'a> {
    config: &'a MappingConfig,
    vocabulary: &'a VocabularyMap,
}

impl<'a> EntityConverter<'a> {
    pub fn new(config: &'a MappingConfig, vocabulary: &'a VocabularyMap) -> Self {
        Self { config, vocabulary }
    }

    /// IRI of `class` under the base namespace.
    pub fn class_iri(&self, class: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("{}{class}", self.config.namespace))
    }

    /// Predicate for a column or class name: the namespace plus the
    /// lowercased name.
    pub fn predicate(&self, name: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("{}{}", self.config.namespace, name.to_lowercase()))
    }

    /// Declare `class` as an `rdfs:Class` with a language-tagged label.
    pub fn declare_class(&self, class: &str, graph: &mut Graph) -> NamedNode {
        let iri = self.class_iri(class);
        graph.add(iri.clone(), rdf::TYPE, rdfs::CLASS.into_owned());
        graph.add(
            iri.clone(),
            rdfs::LABEL,
            lang_literal(class, &self.config.label_language),
        );
        iri
    }

    /// Convert the main table and return the identifier of every converted
    /// row mapped to its node.
    ///
    /// If the table has no identifier column no row is converted.
    pub fn convert_main(
        &self,
        table: &Table,
        minter: &mut NodeMinter,
        graph: &mut Graph,
    ) -> Result<ReferenceMap> {
        let class = self.config.class_of(&table.name)?;
        let class_iri = self.declare_class(class, graph);
        let mut references = ReferenceMap::new();

        let Some(id_idx) = table.column_index(&self.config.id_column) else {
            tracing::info!(
                table = %table.name,
                id_column = %self.config.id_column,
                skipped = table.rows.len(),
                "Main table has no identifier column, skipping rows"
            );
            return Ok(references);
        };

        for (idx, row) in table.rows.iter().enumerate() {
            let node = self.convert_row(table, class, &class_iri, idx + 1, row, minter, graph);

            match row.get(id_idx) {
                None | Some(Value::Null) => {
                    tracing::debug!(table = %table.name, ordinal = idx + 1, "Row has no identifier");
                }
                Some(value) => match value.to_identifier() {
                    Some(id) => {
                        if let Some(previous) = references.insert(id, node) {
                            tracing::warn!(table = %table.name, id, replaced = %previous, "Duplicate identifier");
                        }
                    }
                    None => {
                        tracing::warn!(
                            table = %table.name,
                            ordinal = idx + 1,
                            value = ?value,
                            "Identifier is not an integer, row cannot be referenced"
                        );
                    }
                },
            }
        }

        tracing::info!(
            table = %table.name,
            rows = table.rows.len(),
            references = references.len(),
            "Main table converted"
        );
        Ok(references)
    }

    /// Convert a secondary table. Returns the minted nodes in row order, so
    /// position `i` holds the node of ordinal `i + 1`.
    pub fn convert_secondary(
        &self,
        table: &Table,
        minter: &mut NodeMinter,
        graph: &mut Graph,
    ) -> Result<Vec<NamedNode>> {
        let class = self.config.class_of(&table.name)?;
        let class_iri = self.declare_class(class, graph);

        let nodes = table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.convert_row(table, class, &class_iri, idx + 1, row, minter, graph))
            .collect();
        Ok(nodes)
    }

    #[allow(clippy::too_many_arguments)]
    fn convert_row(
        &self,
        table: &Table,
        class: &str,
        class_iri: &NamedNode,
        ordinal: usize,
        row: &Row,
        minter: &mut NodeMinter,
        graph: &mut Graph,
    ) -> NamedNode {
        let node = minter.mint(&self.config.namespace);
        graph.add(node.clone(), rdf::TYPE, class_iri.clone());

        let ident = table
            .column_index(&self.config.id_column)
            .and_then(|idx| row.get(idx))
            .and_then(Value::lexical)
            .unwrap_or_else(|| ordinal.to_string());
        graph.add(
            node.clone(),
            rdfs::LABEL,
            string_literal(format!("{class} {ident}")),
        );

        for (column, value) in table.cells(row) {
            if let Some(object) = self.object_for(&table.name, column, value) {
                graph.add(node.clone(), self.predicate(&column.name), object);
            }
        }
        node
    }

    /// Object for one cell, or `None` for a null value.
    fn object_for(&self, table: &str, column: &Column, value: &Value) -> Option<Term> {
        let lexical = value.lexical()?;

        let concept = self
            .config
            .lookup_for(table, &column.name)
            .and_then(|lookup| self.vocabulary.resolve(lookup, &lexical));
        if let Some(concept) = concept {
            return Some(concept.clone().into());
        }

        let literal = match column.column_type {
            ColumnType::Integer => match value.to_integer() {
                Some(number) => integer_literal(number),
                None => {
                    tracing::warn!(
                        table,
                        column = %column.name,
                        value = %lexical,
                        "Value in integer column is not an integer"
                    );
                    Literal::new_typed_literal(lexical, xsd::ANY_TYPE)
                }
            },
            ColumnType::Text => string_literal(lexical),
            ColumnType::Unknown => Literal::new_typed_literal(lexical, xsd::ANY_TYPE),
        };
        Some(literal.into())
    }
}
