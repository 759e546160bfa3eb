//! Fixed-size SSZ records used to compute the engine state root.
//!
//! ## SSZ Serialization
//!
//! Records derive `SimpleSerialize` from ssz_rs. Every field is a `u64`, so
//! each record is a fixed-size container of little-endian words.
//!
//! Signed locations are stored as their two's complement bit pattern
//! (`location as u64`), in the same way enums are stored as raw `u8`s
//! elsewhere in SSZ containers. Names are variable length and are hashed
//! separately by the state-root builder.

use ssz_rs::prelude::*;

use super::rating::rating_to_fixed;
use super::{Location, Order, Restaurant, Rider};

#[inline]
fn location_raw(location: Location) -> u64 {
    location as u64
}

/// Fixed-size view of a [`Restaurant`]
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct RestaurantRecord {
    pub id: u64,
    /// Rating scaled by 10 (one decimal place)
    pub rating_raw: u64,
    pub location_raw: u64,
}

impl From<&Restaurant> for RestaurantRecord {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id,
            rating_raw: rating_to_fixed(restaurant.rating),
            location_raw: location_raw(restaurant.location),
        }
    }
}

/// Fixed-size view of a [`Rider`]
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct RiderRecord {
    pub id: u64,
    pub location_raw: u64,
    pub deliveries_completed: u64,
}

impl From<&Rider> for RiderRecord {
    fn from(rider: &Rider) -> Self {
        Self {
            id: rider.id,
            location_raw: location_raw(rider.location),
            deliveries_completed: rider.deliveries_completed,
        }
    }
}

/// Fixed-size view of a queued [`Order`]
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct OrderRecord {
    pub id: u64,
    pub restaurant_location_raw: u64,
    pub customer_location_raw: u64,
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            restaurant_location_raw: location_raw(order.restaurant_location),
            customer_location_raw: location_raw(order.customer_location),
        }
    }
}
