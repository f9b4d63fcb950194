//! Borrowed `rio_api` views of `oxrdf` triples, as consumed by the rio
//! formatters.
//!
//! Literals without a language tag always carry their datatype, so
//! `xsd:string` values are written as `"..."^^xsd:string` rather than as
//! plain literals.

use rio_api::model as rio;
use sqlrdf_core::{Literal, NamedNode, NamedNodeRef, Subject, Term, Triple};

pub fn named_node(node: NamedNodeRef<'_>) -> rio::NamedNode<'_> {
    rio::NamedNode {
        iri: node.as_str(),
    }
}

fn subject(subject: &Subject) -> rio::Subject<'_> {
    match subject {
        Subject::NamedNode(node) => rio::Subject::NamedNode(named_node(node.as_ref())),
        Subject::BlankNode(node) => rio::Subject::BlankNode(rio::BlankNode { id: node.as_str() }),
    }
}

pub fn literal(literal: &Literal) -> rio::Literal<'_> {
    match literal.language() {
        Some(language) => rio::Literal::LanguageTaggedString {
            value: literal.value(),
            language,
        },
        None => rio::Literal::Typed {
            value: literal.value(),
            datatype: named_node(literal.datatype()),
        },
    }
}

fn term(term: &Term) -> rio::Term<'_> {
    match term {
        Term::NamedNode(node) => rio::Term::NamedNode(named_node(node.as_ref())),
        Term::BlankNode(node) => rio::Term::BlankNode(rio::BlankNode { id: node.as_str() }),
        Term::Literal(lit) => rio::Term::Literal(literal(lit)),
    }
}

pub fn triple(triple: &Triple) -> rio::Triple<'_> {
    rio::Triple {
        subject: subject(&triple.subject),
        predicate: named_node(triple.predicate.as_ref()),
        object: term(&triple.object),
    }
}

/// `triple` placed in the graph named `graph_name`.
pub fn quad<'a>(triple: &'a Triple, graph_name: &'a NamedNode) -> rio::Quad<'a> {
    let rio::Triple {
        subject,
        predicate,
        object,
    } = self::triple(triple);
    rio::Quad {
        subject,
        predicate,
        object,
        graph_name: Some(rio::GraphName::NamedNode(named_node(graph_name.as_ref()))),
    }
}
