//! Completed operations as they appear in the history log.

use std::fmt;

use super::OrderId;

/// An operation that finished successfully.
///
/// The history stores the rendered text only, never the action itself, so
/// undoing an entry cannot reverse anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// An order was accepted into the queue
    PlacedOrder(OrderId),
    /// An order was dispatched to a rider
    ProcessedOrder(OrderId),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::PlacedOrder(id) => write!(f, "Placed Order #{}", id),
            Action::ProcessedOrder(id) => write!(f, "Processed Order #{}", id),
        }
    }
}
