//! RDF graphs for sqlite2rdf, built on the `oxrdf` term model.
//!
//! Subjects are always named nodes; converted rows never produce blank nodes.

use std::collections::HashSet;

pub use oxrdf::{Literal, NamedNode, NamedNodeRef, Subject, Term, Triple};

use crate::vocab::xsd;

// ── Literals ──────────────────────────────────────────────────────

/// An `xsd:string` literal.
pub fn string_literal(value: impl Into<String>) -> Literal {
    Literal::new_typed_literal(value, xsd::STRING)
}

/// An `xsd:integer` literal.
pub fn integer_literal(value: i64) -> Literal {
    Literal::new_typed_literal(value.to_string(), xsd::INTEGER)
}

/// A language-tagged string. The tag is lowercased; callers are expected to
/// have validated it (see [`crate::MappingConfig::validate`]).
pub fn lang_literal(value: impl Into<String>, language: &str) -> Literal {
    Literal::new_language_tagged_literal_unchecked(value, language.to_ascii_lowercase())
}

// ── Graphs ────────────────────────────────────────────────────────

/// A set of triples that remembers insertion order.
///
/// Adding a triple that is already present is a no-op, so serializers see
/// every statement once and in the order the converter produced it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    index: HashSet<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.index.contains(&triple) {
            return false;
        }
        self.index.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    pub fn add(
        &mut self,
        subject: NamedNode,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// All objects of `(subject, predicate, ?)`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a NamedNode,
        predicate: NamedNodeRef<'a>,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| {
                matches!(&t.subject, Subject::NamedNode(node) if node == subject)
                    && t.predicate.as_ref() == predicate
            })
            .map(|t| &t.object)
    }

    /// All named subjects of `(?, predicate, object)`.
    pub fn subjects<'a>(
        &'a self,
        predicate: NamedNodeRef<'a>,
        object: &'a Term,
    ) -> impl Iterator<Item = &'a NamedNode> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.predicate.as_ref() == predicate && &t.object == object)
            .filter_map(|t| match &t.subject {
                Subject::NamedNode(node) => Some(node),
                _ => None,
            })
    }
}

/// A graph paired with the name it is written out under.
#[derive(Debug, Clone)]
pub struct NamedGraph {
    pub name: String,
    pub graph: Graph,
}

impl NamedGraph {
    pub fn new(name: impl Into<String>, graph: Graph) -> Self {
        Self {
            name: name.into(),
            graph,
        }
    }
}
