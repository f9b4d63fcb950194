//! Fresh node identifiers.

use sqlrdf_core::NamedNode;
use uuid::Uuid;

/// Produces the local part of every minted node IRI.
///
/// `Random` yields UUID v4 hex strings; `Sequential` yields `n0`, `n1`, ...
/// so that two runs over the same database produce identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NodeMinter {
    #[default]
    Random,
    Sequential {
        next: u64,
    },
}

impl NodeMinter {
    pub fn sequential() -> Self {
        Self::Sequential { next: 0 }
    }

    pub fn fresh_id(&mut self) -> String {
        match self {
            Self::Random => Uuid::new_v4().simple().to_string(),
            Self::Sequential { next } => {
                let id = format!("n{next}");
                *next += 1;
                id
            }
        }
    }

    /// Mint a new node under `namespace`, which must already be a valid IRI.
    pub fn mint(&mut self, namespace: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("{namespace}{}", self.fresh_id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut minter = NodeMinter::sequential();
        assert_eq!(minter.mint("http://x/").as_str(), "http://x/n0");
        assert_eq!(minter.mint("http://x/vocab/").as_str(), "http://x/vocab/n1");
        assert_eq!(minter.fresh_id(), "n2");
    }

    #[test]
    fn test_random_ids_are_unique_hex() {
        let mut minter = NodeMinter::default();
        let a = minter.fresh_id();
        let b = minter.fresh_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.bytes().all(|c| c.is_ascii_hexdigit()));
    }
}
