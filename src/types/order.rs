//! Order type for the dispatch queue.
//!
//! ## Snapshot Semantics
//!
//! An order copies the restaurant's name and location at submission time.
//! It holds no reference back into the registry, so an in-flight order is
//! unaffected by anything that happens to the registry afterwards.

use super::{distance, Location, OrderId, Restaurant};

/// A customer order waiting for a rider.
///
/// ## Example
///
/// ```
/// use food_dispatch::types::{Order, Restaurant};
/// use rust_decimal::Decimal;
///
/// let restaurant = Restaurant::new(101, "Burger King", Decimal::new(45, 1), 2);
/// let order = Order::snapshot(1, &restaurant, 7);
///
/// assert_eq!(order.restaurant_name, "Burger King");
/// assert_eq!(order.restaurant_location, 2);
/// assert_eq!(order.delivery_distance(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Sequential identifier (assigned by the engine)
    pub id: OrderId,

    /// Restaurant name at submission time
    pub restaurant_name: String,

    /// Restaurant position at submission time
    pub restaurant_location: Location,

    /// Drop-off position
    pub customer_location: Location,
}

impl Order {
    /// Create an order from raw parts
    pub fn new(
        id: OrderId,
        restaurant_name: impl Into<String>,
        restaurant_location: Location,
        customer_location: Location,
    ) -> Self {
        Self {
            id,
            restaurant_name: restaurant_name.into(),
            restaurant_location,
            customer_location,
        }
    }

    /// Create an order by copying the restaurant's name and location
    pub fn snapshot(id: OrderId, restaurant: &Restaurant, customer_location: Location) -> Self {
        Self::new(id, restaurant.name.clone(), restaurant.location, customer_location)
    }

    /// Distance from the restaurant to the customer
    #[inline]
    pub fn delivery_distance(&self) -> u64 {
        distance(self.restaurant_location, self.customer_location)
    }
}
