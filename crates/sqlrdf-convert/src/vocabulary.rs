//! Lookup tables become SKOS concept schemes.
//!
//! Every distinct value in a lookup table is minted as a `skos:Concept` in
//! the table's scheme. The [`VocabularyMap`] remembers, per table, which
//! concept stands for each lowercased value so domain columns can point at
//! the concept instead of repeating the string.

use std::collections::HashMap;

use sqlrdf_core::vocab::{rdf, rdfs, skos};
use sqlrdf_core::{string_literal, Graph, NamedNode};
use sqlrdf_source::Row;

use crate::mint::NodeMinter;

/// Lookup table name → (lowercased term → concept node).
#[derive(Debug, Clone, Default)]
pub struct VocabularyMap {
    tables: HashMap<String, HashMap<String, NamedNode>>,
}

impl VocabularyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `term` (case-insensitively) to `concept`. A later registration of
    /// the same term replaces the earlier one; the replaced node is returned.
    pub fn insert(&mut self, table: &str, term: &str, concept: NamedNode) -> Option<NamedNode> {
        self.tables
            .entry(table.to_string())
            .or_default()
            .insert(term.to_lowercase(), concept)
    }

    /// Concept for `value` in `table`, matched case-insensitively.
    pub fn resolve(&self, table: &str, value: &str) -> Option<&NamedNode> {
        self.tables.get(table)?.get(&value.to_lowercase())
    }

    /// Number of distinct terms registered for `table`.
    pub fn term_count(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, HashMap::len)
    }
}

/// Convert one lookup table into a concept-scheme graph and register its
/// terms in `vocabulary`.
///
/// Only the first value of each row is used. Rows whose first value is null
/// are skipped.
pub fn skosify(
    table: &str,
    rows: &[Row],
    vocab_namespace: &str,
    minter: &mut NodeMinter,
    vocabulary: &mut VocabularyMap,
) -> Graph {
    let mut graph = Graph::new();

    let scheme = minter.mint(vocab_namespace);
    graph.add(scheme.clone(), rdf::TYPE, skos::CONCEPT_SCHEME.into_owned());
    graph.add(scheme.clone(), rdfs::LABEL, string_literal(table));
    graph.add(scheme.clone(), skos::PREF_LABEL, string_literal(table));

    for row in rows {
        let Some(term) = row.get(0).and_then(|v| v.lexical()) else {
            continue;
        };
        let label = title_case(&term);

        let concept = minter.mint(vocab_namespace);
        graph.add(concept.clone(), rdf::TYPE, skos::CONCEPT.into_owned());
        graph.add(concept.clone(), rdfs::LABEL, string_literal(label.clone()));
        graph.add(concept.clone(), skos::PREF_LABEL, string_literal(label));
        graph.add(concept.clone(), skos::IN_SCHEME, scheme.clone());

        if let Some(previous) = vocabulary.insert(table, &term, concept) {
            tracing::debug!(table, term = %term, replaced = %previous, "Duplicate lookup term");
        }
    }

    tracing::info!(
        table,
        rows = rows.len(),
        terms = vocabulary.term_count(table),
        "Lookup table converted"
    );
    graph
}

/// Title-case `value`: a cased character directly after an uncased one (or
/// at the start) is upper-cased, every other cased character lower-cased.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_cased = false;
    for c in value.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && !previous_cased {
            out.extend(c.to_uppercase());
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        previous_cased = cased;
    }
    out
}
