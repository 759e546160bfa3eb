//! Result of dispatching a single order.

use super::{OrderId, RiderId};

/// An order matched to a rider.
///
/// Distances are on the scalar delivery line:
///
/// ```text
/// rider ----(to_restaurant)----> restaurant ----(to_customer)----> customer
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// The order that was dispatched
    pub order_id: OrderId,

    /// Restaurant name captured in the order
    pub restaurant_name: String,

    /// Rider the order went to
    pub rider_id: RiderId,

    /// Rider display name
    pub rider_name: String,

    /// Rider's distance to the restaurant before the dispatch
    pub distance_to_restaurant: u64,

    /// Restaurant to customer distance
    pub distance_to_customer: u64,

    /// Sum of both legs
    pub total_distance: u64,
}

impl Assignment {
    /// Build an assignment; the total is derived from the two legs.
    pub fn new(
        order_id: OrderId,
        restaurant_name: impl Into<String>,
        rider_id: RiderId,
        rider_name: impl Into<String>,
        distance_to_restaurant: u64,
        distance_to_customer: u64,
    ) -> Self {
        Self {
            order_id,
            restaurant_name: restaurant_name.into(),
            rider_id,
            rider_name: rider_name.into(),
            distance_to_restaurant,
            distance_to_customer,
            total_distance: distance_to_restaurant.saturating_add(distance_to_customer),
        }
    }
}
