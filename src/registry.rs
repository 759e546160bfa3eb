//! Restaurant registry.
//!
//! ## Design
//!
//! Restaurants are kept in a [`SlabChain`] in registration order. Lookup
//! walks the links from the head and stops at the first match, so cost is
//! linear in the number of restaurants.
//!
//! Identifiers are caller-assigned and not checked for duplicates. If the
//! caller registers the same id twice, lookups keep returning the earlier
//! restaurant.
//!
//! ## Example
//!
//! ```
//! use food_dispatch::registry::RestaurantRegistry;
//! use rust_decimal::Decimal;
//!
//! let mut registry = RestaurantRegistry::new();
//! registry.register(101, "Burger King", Decimal::new(45, 1), 2);
//! registry.register(102, "Pizza Hut", Decimal::new(42, 1), 8);
//!
//! assert_eq!(registry.find_by_id(102).map(|r| r.location), Some(8));
//! assert!(registry.find_by_id(999).is_none());
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::chain::{Iter, SlabChain};
use crate::types::{Location, Restaurant, RestaurantId};

/// Insertion-ordered collection of restaurants
#[derive(Debug, Clone, Default)]
pub struct RestaurantRegistry {
    restaurants: SlabChain<Restaurant>,
}

impl RestaurantRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            restaurants: SlabChain::new(),
        }
    }

    /// Create a registry with pre-allocated slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            restaurants: SlabChain::with_capacity(capacity),
        }
    }

    /// Append a restaurant. Always succeeds.
    ///
    /// # Returns
    ///
    /// The identifier the restaurant was registered under
    pub fn register(
        &mut self,
        id: RestaurantId,
        name: impl Into<String>,
        rating: Decimal,
        location: Location,
    ) -> RestaurantId {
        self.insert(Restaurant::new(id, name, rating, location))
    }

    /// Append an already-built restaurant
    pub fn insert(&mut self, restaurant: Restaurant) -> RestaurantId {
        let id = restaurant.id;
        debug!(
            restaurant_id = id,
            name = %restaurant.name,
            location = restaurant.location,
            "Registered restaurant"
        );
        self.restaurants.push_back(restaurant);
        id
    }

    /// Find a restaurant by identifier (first match in registration order)
    pub fn find_by_id(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.find(|restaurant| restaurant.id == id)
    }

    /// Read-only view of every restaurant in registration order
    pub fn list_all(&self) -> Vec<&Restaurant> {
        self.iter().collect()
    }

    /// Iterate restaurants in registration order
    pub fn iter(&self) -> Iter<'_, Restaurant> {
        self.restaurants.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
