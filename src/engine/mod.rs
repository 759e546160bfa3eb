//! Dispatch engine module.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: registry, roster, queue, history and the order-id
//!    counter live in one [`DispatchEngine`] value; nothing is global
//! 2. **All or nothing**: every operation either commits all of its
//!    mutations or returns an error having made none (the one documented
//!    exception is a dropped order when the roster is empty)
//! 3. **Synchronous**: no I/O, no suspension points
//!
//! ## Dispatch Rule
//!
//! - The order that has waited longest is processed first (FIFO)
//! - The rider closest to the restaurant takes it
//! - On a distance tie the rider earliest in roster order wins
//!
//! ## Example
//!
//! ```
//! use food_dispatch::config::EngineConfig;
//! use food_dispatch::engine::DispatchEngine;
//!
//! let mut engine = DispatchEngine::from_config(&EngineConfig::reference());
//!
//! let order_id = engine.submit_order(101, 7).unwrap();
//! assert_eq!(order_id, 1);
//!
//! let assignment = engine.process_next_order().unwrap();
//! assert_eq!(assignment.rider_name, "Ali");
//! assert_eq!(assignment.total_distance, 6);
//! ```

pub mod dispatcher;
pub mod nearest;
pub mod shared;
pub mod state_root;

pub use dispatcher::DispatchEngine;
pub use nearest::{find_nearest_rider, NearestRider};
pub use shared::SharedDispatchEngine;
pub use state_root::StateRoot;
