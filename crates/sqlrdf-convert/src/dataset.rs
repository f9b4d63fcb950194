//! VoID description at the head of the domain graph.

use sqlrdf_core::vocab::{rdf, rdfs, void};
use sqlrdf_core::{lang_literal, Graph, MappingConfig, NamedNode};

/// Describe the dataset as `<namespace> a void:Dataset` with a label and,
/// when configured, a comment in the label language.
pub fn describe_dataset(config: &MappingConfig, graph: &mut Graph) -> NamedNode {
    let dataset = NamedNode::new_unchecked(config.namespace.as_str());
    let lang = config.label_language.as_str();

    graph.add(dataset.clone(), rdf::TYPE, void::DATASET.into_owned());
    graph.add(
        dataset.clone(),
        rdfs::LABEL,
        lang_literal(config.dataset.label.as_str(), lang),
    );
    if !config.dataset.description.is_empty() {
        graph.add(
            dataset.clone(),
            rdfs::COMMENT,
            lang_literal(config.dataset.description.as_str(), lang),
        );
    }
    dataset
}
