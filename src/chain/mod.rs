//! Arena-indexed singly-linked chain.
//!
//! ## Architecture
//!
//! Values live in a [`slab::Slab`]; each [`ChainNode`] carries the slab key
//! of its successor. The chain keeps head and tail keys so appends are O(1)
//! and removal from the head is O(1).
//!
//! ```text
//! head (oldest) -> node -> node -> tail (newest)
//! ```
//!
//! Both the restaurant registry and the order queue are built on it:
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Append | O(1) |
//! | Pop head | O(1) |
//! | Find by predicate | O(n) |
//! | Iterate in insertion order | O(n) |
//!
//! ## Example
//!
//! ```
//! use food_dispatch::chain::SlabChain;
//!
//! let mut chain = SlabChain::with_capacity(4);
//! chain.push_back("first");
//! chain.push_back("second");
//!
//! assert_eq!(chain.pop_front(), Some("first"));
//! assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec!["second"]);
//! ```

pub mod node;
pub mod list;

pub use node::ChainNode;
pub use list::{Iter, SlabChain};
