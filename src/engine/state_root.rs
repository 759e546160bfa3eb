//! Engine state root.
//!
//! ## State Root
//!
//! The 32-byte state root is a SHA-256 hash over, in this order:
//!
//! 1. the next order id
//! 2. every restaurant (SSZ record + name) in registration order
//! 3. every rider (SSZ record + name) in roster order
//! 4. every queued order (SSZ record + restaurant name), head to tail
//! 5. every history entry, oldest first
//!
//! Each section is prefixed with its element count and each string with its
//! byte length, so distinct states cannot collide by shifting bytes between
//! neighbours. Two engines that went through the same operations always have
//! the same root; any mutation changes it.

use sha2::{Digest, Sha256};
use ssz_rs::prelude::SimpleSerialize;

use crate::engine::DispatchEngine;
use crate::error::DispatchError;
use crate::types::record::{OrderRecord, RestaurantRecord, RiderRecord};

/// SHA-256 digest of the engine state
pub type StateRoot = [u8; 32];

fn encode<T: SimpleSerialize>(record: &T) -> Result<Vec<u8>, DispatchError> {
    ssz_rs::serialize(record).map_err(|e| DispatchError::Encoding(format!("{:?}", e)))
}

fn update_len(hasher: &mut Sha256, len: usize) {
    hasher.update((len as u64).to_le_bytes());
}

fn update_str(hasher: &mut Sha256, s: &str) {
    update_len(hasher, s.len());
    hasher.update(s.as_bytes());
}

/// Compute the state root of an engine
pub fn compute_state_root(engine: &DispatchEngine) -> Result<StateRoot, DispatchError> {
    let mut hasher = Sha256::new();

    hasher.update(engine.peek_next_order_id().to_le_bytes());

    update_len(&mut hasher, engine.registry().len());
    for restaurant in engine.registry().iter() {
        hasher.update(encode(&RestaurantRecord::from(restaurant))?);
        update_str(&mut hasher, &restaurant.name);
    }

    update_len(&mut hasher, engine.roster().len());
    for rider in engine.roster().iter() {
        hasher.update(encode(&RiderRecord::from(rider))?);
        update_str(&mut hasher, &rider.name);
    }

    update_len(&mut hasher, engine.queue().len());
    for order in engine.queue().iter() {
        hasher.update(encode(&OrderRecord::from(order))?);
        update_str(&mut hasher, &order.restaurant_name);
    }

    update_len(&mut hasher, engine.history().len());
    for entry in engine.history().iter() {
        update_str(&mut hasher, entry);
    }

    let mut root = [0u8; 32];
    root.copy_from_slice(&hasher.finalize());
    Ok(root)
}
