//! Back-links from main-table entities to secondary-table entities.
//!
//! Secondary rows are matched to main rows by position: the row with 1-based
//! ordinal `n` hangs off the main node whose identifier is `n`. Foreign-key
//! columns are not consulted. Databases whose secondary tables are not stored
//! in the same order as the main table will be linked incorrectly.

use sqlrdf_core::{Graph, NamedNode};

use crate::entity::ReferenceMap;

/// Emit `<main> predicate <secondary>` for every secondary node whose ordinal
/// is a key of `references`. Returns the number of links added.
pub fn link_by_ordinal(
    references: &ReferenceMap,
    predicate: &NamedNode,
    secondary: &[NamedNode],
    graph: &mut Graph,
) -> usize {
    let mut linked = 0;
    for (idx, node) in secondary.iter().enumerate() {
        let Ok(ordinal) = i64::try_from(idx + 1) else {
            break;
        };
        match references.get(&ordinal) {
            Some(main) => {
                graph.add(main.clone(), predicate.clone(), node.clone());
                linked += 1;
            }
            None => {
                tracing::debug!(ordinal, node = %node, "No main entity for ordinal");
            }
        }
    }
    linked
}
