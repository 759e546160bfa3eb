//! The chain itself: head/tail bookkeeping over a slab of nodes.

use slab::Slab;

use super::ChainNode;

/// Insertion-ordered singly-linked chain stored in a slab.
#[derive(Debug, Clone)]
pub struct SlabChain<T> {
    /// Node storage
    nodes: Slab<ChainNode<T>>,

    /// Oldest node (slab key)
    head: Option<usize>,

    /// Newest node (slab key); appends link from here
    tail: Option<usize>,
}

impl<T> Default for SlabChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlabChain<T> {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
        }
    }

    /// Create a chain with pre-allocated node slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Number of values in the chain
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a value at the tail
    ///
    /// # Returns
    ///
    /// The slab key of the new node
    pub fn push_back(&mut self, value: T) -> usize {
        let key = self.nodes.insert(ChainNode::new(value));

        match self.tail.and_then(|tail_key| self.nodes.get_mut(tail_key)) {
            // Link the old tail to the new node
            Some(tail_node) => tail_node.next = Some(key),
            // Empty chain - this is also the head
            None => self.head = Some(key),
        }

        self.tail = Some(key);
        key
    }

    /// Remove and return the head value (oldest)
    pub fn pop_front(&mut self) -> Option<T> {
        let key = self.head?;
        let node = self.nodes.try_remove(key)?;

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }

        Some(node.value)
    }

    /// Peek at the head value without removing it
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|key| self.nodes.get(key))
            .map(|node| &node.value)
    }

    /// Walk the chain from the head and return the first matching value
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(*value))
    }

    /// Iterate values in insertion order by following the links
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

/// Link-following iterator over a [`SlabChain`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a Slab<ChainNode<T>>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a SlabChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
