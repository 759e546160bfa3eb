//! Core data types for the dispatch kernel
//!
//! ## Types
//!
//! - [`Restaurant`]: A registered restaurant (immutable after creation)
//! - [`Rider`]: A delivery rider with a mutable position and workload
//! - [`Order`]: A queued order holding a snapshot of its restaurant
//! - [`Assignment`]: The outcome of dispatching one order to one rider
//! - [`Action`]: A completed operation, rendered into the history log
//!
//! ## Coordinates
//!
//! Positions are scalar coordinates on a line. Distance is the absolute
//! difference, returned unsigned so it can never overflow.

mod restaurant;
mod rider;
mod order;
mod assignment;
mod action;
pub mod rating;
pub(crate) mod record;

pub use restaurant::Restaurant;
pub use rider::Rider;
pub use order::Order;
pub use assignment::Assignment;
pub use action::Action;

/// Caller-assigned restaurant identifier
pub type RestaurantId = u64;

/// Caller-assigned rider identifier
pub type RiderId = u64;

/// Engine-assigned order identifier (strictly increasing from 1)
pub type OrderId = u64;

/// Scalar position on the delivery line
pub type Location = i64;

/// Distance between two positions on the line.
///
/// # Example
///
/// ```
/// use food_dispatch::types::distance;
///
/// assert_eq!(distance(2, 7), 5);
/// assert_eq!(distance(7, 2), 5);
/// assert_eq!(distance(-3, 4), 7);
/// ```
#[inline]
pub fn distance(a: Location, b: Location) -> u64 {
    a.abs_diff(b)
}
