//! Chain node for slab-based storage.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//!
//! Reuse is harmless here: order is defined by the `next` links, never by
//! key values.

/// Node stored in the slab.
///
/// The link is a slab key (`usize`), not a reference.
#[derive(Debug, Clone)]
pub struct ChainNode<T> {
    /// The stored value
    pub value: T,

    /// Next node in the chain (slab key)
    /// None if this is the tail
    pub next: Option<usize>,
}

impl<T> ChainNode<T> {
    /// Create a new, unlinked node
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_node_new() {
        let node = ChainNode::new(7u32);

        assert_eq!(node.value, 7);
        assert!(node.next.is_none());
    }

    #[test]
    fn test_chain_node_linking() {
        let mut node = ChainNode::new("a");
        node.next = Some(3);

        assert_eq!(node.next, Some(3));
        assert_eq!(node.value, "a");
    }
}
