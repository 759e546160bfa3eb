//! FIFO order queue.
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) -> order2 -> order3 -> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Processing consumes orders from the head
//!
//! Built on the same [`SlabChain`] as the registry; slots freed by
//! dequeued orders are reused by later submissions.

use crate::chain::{Iter, SlabChain};
use crate::types::Order;

/// Default number of pre-allocated order slots
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Orders awaiting assignment, oldest first
#[derive(Debug, Clone)]
pub struct OrderQueue {
    orders: SlabChain<Order>,
}

impl Default for OrderQueue {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue with pre-allocated slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            orders: SlabChain::with_capacity(capacity),
        }
    }

    /// Append an order at the tail
    pub fn enqueue(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    /// Remove the order that has waited longest
    ///
    /// # Returns
    ///
    /// `None` when no orders are pending
    pub fn dequeue(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    /// The next order to be processed
    #[inline]
    pub fn peek(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Pending orders, head to tail
    pub fn iter(&self) -> Iter<'_, Order> {
        self.orders.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
