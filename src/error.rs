//! Error types for the dispatch engine.
//!
//! Every condition is local and recoverable. None of them leaves the engine
//! half-updated; see each variant for exactly what has changed.

use thiserror::Error;

use crate::types::{OrderId, RestaurantId};

/// Errors that can occur during dispatch operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The submission referenced a restaurant that is not registered.
    /// No state changed; the order-id counter did not advance.
    #[error("Unknown restaurant: {0}")]
    UnknownRestaurant(RestaurantId),

    /// Processing was requested with no pending orders. No state changed.
    #[error("No orders pending")]
    EmptyQueue,

    /// The roster is empty. The head order has been consumed and dropped;
    /// it is not requeued and no history entry is written.
    #[error("No riders available for order #{order_id}")]
    NoRidersAvailable { order_id: OrderId },

    /// Undo was requested with an empty history.
    #[error("Nothing to undo")]
    EmptyHistory,

    /// State-root encoding failed.
    #[error("State encoding error: {0}")]
    Encoding(String),

    /// A thread panicked while holding the shared engine lock.
    #[error("Dispatch engine lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DispatchError::UnknownRestaurant(999).to_string(), "Unknown restaurant: 999");
        assert_eq!(DispatchError::EmptyQueue.to_string(), "No orders pending");
        assert_eq!(
            DispatchError::NoRidersAvailable { order_id: 4 }.to_string(),
            "No riders available for order #4"
        );
        assert_eq!(DispatchError::EmptyHistory.to_string(), "Nothing to undo");
    }
}
