//! # Food Dispatch
//!
//! Order-dispatch kernel for a food delivery loop.
//!
//! ## Architecture
//!
//! - **Types**: Restaurant, Rider, Order, Assignment, Action
//! - **Chain**: Slab-backed singly-linked chain (insertion ordered)
//! - **Registry**: Restaurants on the chain, linear lookup by id
//! - **Roster**: Riders with mutable position and workload
//! - **Queue**: FIFO of pending orders on the chain
//! - **History**: LIFO log of completed-action descriptions
//! - **Engine**: Submission, nearest-rider dispatch, undo, state root
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same operations in the same order give the same state
//!    (and the same state root)
//! 2. **Integer coordinates**: Distances are exact absolute differences; the
//!    only decimal is the informational rating (`rust_decimal`)
//! 3. **Synchronous Execution**: No async, no I/O in the core
//! 4. **Typed failures**: Every failure is a [`DispatchError`] variant

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types
pub mod types;

/// Slab-backed linked chain
pub mod chain;

/// Restaurant registry
pub mod registry;

/// Rider roster
pub mod roster;

/// Pending-order queue
pub mod queue;

/// Undo history
pub mod history;

/// Dispatch engine
pub mod engine;

/// Error types
pub mod error;

/// Seed data and startup configuration
pub mod config;

/// Subscriber setup for binaries
pub mod logging;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{
    Action, Assignment, Location, Order, OrderId, Restaurant, RestaurantId, Rider, RiderId,
};
pub use config::{EngineConfig, RestaurantSeed, RiderSeed};
pub use engine::{DispatchEngine, SharedDispatchEngine, StateRoot};
pub use error::DispatchError;
