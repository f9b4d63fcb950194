//! Vocabulary terms emitted by the converter.
//!
//! Each vocabulary is a module of `oxrdf` named-node constants, laid out the
//! way `oxrdf::vocab` lays out its own.

/// RDF core vocabulary.
pub mod rdf {
    use oxrdf::NamedNodeRef;

    pub const TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
}

/// RDF Schema.
pub mod rdfs {
    use oxrdf::NamedNodeRef;

    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#Class");
    pub const LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#label");
    pub const COMMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#comment");
}

/// XML Schema datatypes.
pub mod xsd {
    use oxrdf::NamedNodeRef;

    pub const STRING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#string");
    pub const INTEGER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#integer");
    pub const ANY_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#anyType");
}

/// Simple Knowledge Organization System.
pub mod skos {
    use oxrdf::NamedNodeRef;

    pub const CONCEPT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#Concept");
    pub const CONCEPT_SCHEME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#ConceptScheme");
    pub const IN_SCHEME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#inScheme");
    pub const PREF_LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#prefLabel");
}

/// Vocabulary of Interlinked Datasets.
pub mod void {
    use oxrdf::NamedNodeRef;

    pub const DATASET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://rdfs.org/ns/void#Dataset");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_are_valid_iris() {
        for term in [
            rdf::TYPE,
            rdfs::CLASS,
            rdfs::LABEL,
            rdfs::COMMENT,
            xsd::ANY_TYPE,
            skos::IN_SCHEME,
            void::DATASET,
        ] {
            assert!(oxrdf::NamedNode::new(term.as_str()).is_ok(), "{term}");
        }
    }
}
