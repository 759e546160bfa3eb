//! Rider type held by the roster.

use super::{distance, Location, RiderId};

/// A delivery rider.
///
/// `location` and `deliveries_completed` are the only mutable parts. The
/// counter never decreases.
///
/// ## Example
///
/// ```
/// use food_dispatch::types::Rider;
///
/// let mut rider = Rider::new(201, "Ali", 1, 0);
/// rider.complete_delivery(7);
///
/// assert_eq!(rider.location, 7);
/// assert_eq!(rider.deliveries_completed, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rider {
    /// Rider identifier
    pub id: RiderId,

    /// Display name
    pub name: String,

    /// Current position on the delivery line
    pub location: Location,

    /// Cumulative completed deliveries (workload)
    pub deliveries_completed: u64,
}

impl Rider {
    /// Create a new rider with an initial workload
    pub fn new(
        id: RiderId,
        name: impl Into<String>,
        location: Location,
        deliveries_completed: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            deliveries_completed,
        }
    }

    /// Distance from the rider's current position to `target`
    #[inline]
    pub fn distance_to(&self, target: Location) -> u64 {
        distance(self.location, target)
    }

    /// Record one finished delivery and move the rider to the drop-off point.
    ///
    /// Both mutations happen together; there is no way to apply only one.
    pub fn complete_delivery(&mut self, drop_off: Location) {
        self.deliveries_completed = self.deliveries_completed.saturating_add(1);
        self.location = drop_off;
    }
}
