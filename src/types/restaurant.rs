//! Restaurant type held by the registry.

use rust_decimal::Decimal;

use super::{Location, RestaurantId};

/// A restaurant customers can order from.
///
/// The rating is informational only; dispatch never reads it.
///
/// ## Example
///
/// ```
/// use food_dispatch::types::Restaurant;
/// use rust_decimal::Decimal;
///
/// let restaurant = Restaurant::new(101, "Burger King", Decimal::new(45, 1), 2);
/// assert_eq!(restaurant.name, "Burger King");
/// assert_eq!(restaurant.location, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    /// Caller-assigned identifier
    pub id: RestaurantId,

    /// Display name
    pub name: String,

    /// Customer rating (one decimal place by convention)
    pub rating: Decimal,

    /// Position on the delivery line
    pub location: Location,
}

impl Restaurant {
    /// Create a new restaurant
    pub fn new(
        id: RestaurantId,
        name: impl Into<String>,
        rating: Decimal,
        location: Location,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
            location,
        }
    }
}
