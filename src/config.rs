//! Engine configuration and seed data.
//!
//! The engine owns no process-wide state; everything it starts with comes
//! from an [`EngineConfig`]. [`EngineConfig::reference`] is the fixed seed
//! set used by the demo binary and the scenario tests:
//!
//! | Restaurant  | id  | rating | location |
//! |-------------|-----|--------|----------|
//! | Burger King | 101 | 4.5    | 2        |
//! | Pizza Hut   | 102 | 4.2    | 8        |
//! | Subway      | 103 | 4.0    | 5        |
//!
//! | Rider | id  | location | deliveries |
//! |-------|-----|----------|------------|
//! | Ali   | 201 | 1        | 0          |
//! | Bilal | 202 | 6        | 2          |
//! | Hamza | 203 | 3        | 0          |

use rust_decimal::Decimal;

use crate::queue::DEFAULT_QUEUE_CAPACITY;
use crate::types::{Location, Restaurant, RestaurantId, Rider, RiderId};

/// Restaurant to register at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantSeed {
    pub id: RestaurantId,
    pub name: String,
    pub rating: Decimal,
    pub location: Location,
}

impl RestaurantSeed {
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

impl From<&RestaurantSeed> for Restaurant {
    fn from(seed: &RestaurantSeed) -> Self {
        Restaurant::new(seed.id, seed.name.clone(), seed.rating, seed.location)
    }
}

/// Rider to add to the roster at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiderSeed {
    pub id: RiderId,
    pub name: String,
    pub location: Location,
    pub deliveries_completed: u64,
}

impl RiderSeed {
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
}

impl From<&RiderSeed> for Rider {
    fn from(seed: &RiderSeed) -> Self {
        Rider::new(seed.id, seed.name.clone(), seed.location, seed.deliveries_completed)
    }
}

/// Startup configuration for a [`crate::DispatchEngine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Pre-allocated order-queue slots
    pub queue_capacity: usize,

    /// Restaurants in registration order
    pub restaurants: Vec<RestaurantSeed>,

    /// Riders in roster order
    pub riders: Vec<RiderSeed>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            restaurants: Vec::new(),
            riders: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// The reference seed set: three restaurants and three riders
    pub fn reference() -> Self {
        Self {
            restaurants: vec![
                RestaurantSeed::new(101, "Burger King", Decimal::new(45, 1), 2),
                RestaurantSeed::new(102, "Pizza Hut", Decimal::new(42, 1), 8),
                RestaurantSeed::new(103, "Subway", Decimal::new(40, 1), 5),
            ],
            riders: vec![
                RiderSeed::new(201, "Ali", 1, 0),
                RiderSeed::new(202, "Bilal", 6, 2),
                RiderSeed::new(203, "Hamza", 3, 0),
            ],
            ..Self::default()
        }
    }

    /// Override the queue capacity
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Append a restaurant seed
    pub fn with_restaurant(mut self, seed: RestaurantSeed) -> Self {
        self.restaurants.push(seed);
        self
    }

    /// Append a rider seed
    pub fn with_rider(mut self, seed: RiderSeed) -> Self {
        self.riders.push(seed);
        self
    }
}
