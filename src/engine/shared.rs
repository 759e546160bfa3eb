//! Thread-safe handle to a single dispatch engine.
//!
//! The core engine has no internal synchronization. When several threads
//! need to drive it, every operation must run as one critical section over
//! the registry, roster, queue, history and order-id counter together.
//! [`SharedDispatchEngine`] does exactly that: one `Mutex` around the whole
//! engine, taken once per operation and held until the operation returns.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::EngineConfig;
use crate::engine::DispatchEngine;
use crate::error::DispatchError;
use crate::types::{Assignment, Location, OrderId, RestaurantId, Rider};

/// Cloneable handle; all clones drive the same engine
#[derive(Debug, Clone, Default)]
pub struct SharedDispatchEngine {
    inner: Arc<Mutex<DispatchEngine>>,
}

impl SharedDispatchEngine {
    /// Wrap an existing engine
    pub fn new(engine: DispatchEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(DispatchEngine::from_config(config))
    }

    fn lock(&self) -> Result<MutexGuard<'_, DispatchEngine>, DispatchError> {
        self.inner.lock().map_err(|_| DispatchError::Poisoned)
    }

    /// See [`DispatchEngine::submit_order`]
    pub fn submit_order(
        &self,
        restaurant_id: RestaurantId,
        customer_location: Location,
    ) -> Result<OrderId, DispatchError> {
        self.lock()?.submit_order(restaurant_id, customer_location)
    }

    /// See [`DispatchEngine::process_next_order`]
    pub fn process_next_order(&self) -> Result<Assignment, DispatchError> {
        self.lock()?.process_next_order()
    }

    /// See [`DispatchEngine::undo_last_action`]
    pub fn undo_last_action(&self) -> Result<String, DispatchError> {
        self.lock()?.undo_last_action()
    }

    /// Rank the roster by workload and return an owned copy of it
    pub fn ranked_riders(&self) -> Result<Vec<Rider>, DispatchError> {
        let mut guard = self.lock()?;
        Ok(guard.ranked_rider_view().to_vec())
    }

    pub fn pending_orders(&self) -> Result<usize, DispatchError> {
        Ok(self.lock()?.pending_orders())
    }

    /// Run a read-only closure against the engine under the lock
    pub fn with_engine<R>(&self, f: impl FnOnce(&DispatchEngine) -> R) -> Result<R, DispatchError> {
        let guard = self.lock()?;
        Ok(f(&*guard))
    }
}
