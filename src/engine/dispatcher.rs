//! The dispatch engine: order submission, FIFO processing, undo.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::engine::nearest::find_nearest_rider;
use crate::engine::state_root::{compute_state_root, StateRoot};
use crate::error::DispatchError;
use crate::history::ActionHistory;
use crate::queue::OrderQueue;
use crate::registry::RestaurantRegistry;
use crate::roster::RiderRoster;
use crate::types::{
    Action, Assignment, Location, Order, OrderId, Restaurant, RestaurantId, Rider,
};

/// Owns every piece of dispatch state.
///
/// ## Lifecycle
///
/// ```text
/// submit_order:        registry lookup -> allocate id -> enqueue -> history
/// process_next_order:  dequeue -> nearest rider -> move rider -> history
/// undo_last_action:    pop history (no state is reverted)
/// ```
#[derive(Debug, Clone)]
pub struct DispatchEngine {
    /// Restaurants, in registration order
    registry: RestaurantRegistry,

    /// Riders, in roster order
    roster: RiderRoster,

    /// Orders awaiting a rider
    queue: OrderQueue,

    /// Descriptions of completed actions
    history: ActionHistory,

    /// Next order ID; only advances on a successful submission
    next_order_id: OrderId,
}

impl Default for DispatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchEngine {
    /// Create an engine with no restaurants, riders or orders
    pub fn new() -> Self {
        Self {
            registry: RestaurantRegistry::new(),
            roster: RiderRoster::new(),
            queue: OrderQueue::new(),
            history: ActionHistory::new(),
            next_order_id: 1,
        }
    }

    /// Create an empty engine with pre-allocated queue slots
    pub fn with_queue_capacity(capacity: usize) -> Self {
        Self {
            queue: OrderQueue::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Create an engine populated from seed data
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut engine = Self {
            registry: RestaurantRegistry::with_capacity(config.restaurants.len()),
            ..Self::with_queue_capacity(config.queue_capacity)
        };

        for seed in &config.restaurants {
            engine.registry.insert(Restaurant::from(seed));
        }
        for seed in &config.riders {
            engine.roster.add(Rider::from(seed));
        }

        info!(
            restaurants = engine.registry.len(),
            riders = engine.roster.len(),
            "Dispatch engine initialized"
        );
        engine
    }

    // ========================================================================
    // Setup
    // ========================================================================

    /// Register a restaurant (no duplicate detection)
    pub fn register_restaurant(
        &mut self,
        id: RestaurantId,
        name: impl Into<String>,
        rating: Decimal,
        location: Location,
    ) -> RestaurantId {
        self.registry.register(id, name, rating, location)
    }

    /// Add a rider to the end of the roster
    pub fn add_rider(&mut self, rider: Rider) {
        debug!(
            rider_id = rider.id,
            name = %rider.name,
            location = rider.location,
            "Rider added"
        );
        self.roster.add(rider);
    }

    // ========================================================================
    // Dispatch Operations
    // ========================================================================

    /// Place an order against a registered restaurant.
    ///
    /// The restaurant's name and location are copied into the order.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnknownRestaurant`] if no restaurant has that id.
    /// Nothing is mutated in that case, including the order-id counter.
    pub fn submit_order(
        &mut self,
        restaurant_id: RestaurantId,
        customer_location: Location,
    ) -> Result<OrderId, DispatchError> {
        let Some(restaurant) = self.registry.find_by_id(restaurant_id) else {
            warn!(restaurant_id, "Order rejected: unknown restaurant");
            return Err(DispatchError::UnknownRestaurant(restaurant_id));
        };

        let order = Order::snapshot(self.next_order_id, restaurant, customer_location);
        let order_id = order.id;
        self.next_order_id += 1;

        debug!(
            order_id,
            restaurant = %order.restaurant_name,
            restaurant_location = order.restaurant_location,
            customer_location,
            "Order queued"
        );

        self.queue.enqueue(order);
        self.history.record_action(Action::PlacedOrder(order_id));

        Ok(order_id)
    }

    /// Assign the oldest pending order to the nearest rider.
    ///
    /// The chosen rider's delivery count goes up by one and the rider moves
    /// to the customer location.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::EmptyQueue`] if nothing is pending (no mutation)
    /// - [`DispatchError::NoRidersAvailable`] if the roster is empty; the
    ///   order has already been dequeued and is dropped
    pub fn process_next_order(&mut self) -> Result<Assignment, DispatchError> {
        let order = self.queue.dequeue().ok_or(DispatchError::EmptyQueue)?;
        let order_id = order.id;

        let nearest = find_nearest_rider(self.roster.iter(), order.restaurant_location);
        let Some(nearest) = nearest else {
            warn!(
                order_id,
                restaurant = %order.restaurant_name,
                "No riders available, order dropped"
            );
            return Err(DispatchError::NoRidersAvailable { order_id });
        };

        let rider = self
            .roster
            .get_mut(nearest.index)
            .ok_or(DispatchError::NoRidersAvailable { order_id })?;

        let distance_to_customer = order.delivery_distance();
        rider.complete_delivery(order.customer_location);

        let assignment = Assignment::new(
            order_id,
            order.restaurant_name,
            rider.id,
            rider.name.clone(),
            nearest.distance,
            distance_to_customer,
        );

        info!(
            order_id,
            rider_id = assignment.rider_id,
            rider = %assignment.rider_name,
            to_restaurant = assignment.distance_to_restaurant,
            to_customer = assignment.distance_to_customer,
            total = assignment.total_distance,
            "Order assigned"
        );

        self.history.record_action(Action::ProcessedOrder(order_id));

        Ok(assignment)
    }

    /// Sort the roster by ascending workload and return it.
    ///
    /// The sort is stable and persists, so later dispatch ties go to the
    /// rider that ranks first.
    pub fn ranked_rider_view(&mut self) -> &[Rider] {
        self.roster.rank_by_workload()
    }

    /// Remove the most recent history entry and return its text.
    ///
    /// This does not revert anything the recorded action did.
    ///
    /// # Errors
    ///
    /// [`DispatchError::EmptyHistory`] if there is nothing to undo
    pub fn undo_last_action(&mut self) -> Result<String, DispatchError> {
        let entry = self.history.undo_last().ok_or(DispatchError::EmptyHistory)?;
        debug!(entry = %entry, "History entry removed");
        Ok(entry)
    }

    // ========================================================================
    // Read Access
    // ========================================================================

    #[inline]
    pub fn registry(&self) -> &RestaurantRegistry {
        &self.registry
    }

    #[inline]
    pub fn roster(&self) -> &RiderRoster {
        &self.roster
    }

    #[inline]
    pub fn queue(&self) -> &OrderQueue {
        &self.queue
    }

    #[inline]
    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    /// Number of orders waiting for a rider
    #[inline]
    pub fn pending_orders(&self) -> usize {
        self.queue.len()
    }

    /// The id the next successful submission will receive
    #[inline]
    pub fn peek_next_order_id(&self) -> OrderId {
        self.next_order_id
    }

    /// SHA-256 digest of the whole engine state
    pub fn state_root(&self) -> Result<StateRoot, DispatchError> {
        compute_state_root(self)
    }

    /// State root as a hex string
    pub fn state_root_hex(&self) -> Result<String, DispatchError> {
        self.state_root().map(hex::encode)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_engine() -> DispatchEngine {
        DispatchEngine::from_config(&EngineConfig::reference())
    }

    #[test]
    fn test_engine_new() {
        let engine = DispatchEngine::new();

        assert!(engine.registry().is_empty());
        assert!(engine.roster().is_empty());
        assert_eq!(engine.pending_orders(), 0);
        assert!(engine.history().is_empty());
        assert_eq!(engine.peek_next_order_id(), 1);
    }

    #[test]
    fn test_from_config_seeds_state() {
        let engine = reference_engine();

        assert_eq!(engine.registry().len(), 3);
        assert_eq!(engine.roster().len(), 3);
        assert_eq!(engine.registry().find_by_id(102).unwrap().name, "Pizza Hut");
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_submit_order_assigns_sequential_ids() {
        let mut engine = reference_engine();

        assert_eq!(engine.submit_order(101, 7), Ok(1));
        assert_eq!(engine.submit_order(102, 0), Ok(2));
        assert_eq!(engine.submit_order(101, 3), Ok(3));

        assert_eq!(engine.pending_orders(), 3);
        assert_eq!(engine.history().peek(), Some("Placed Order #3"));
    }

    #[test]
    fn test_submit_order_snapshots_restaurant() {
        let mut engine = reference_engine();
        engine.submit_order(103, 9).unwrap();

        let order = engine.queue().peek().unwrap();
        assert_eq!(order.restaurant_name, "Subway");
        assert_eq!(order.restaurant_location, 5);
        assert_eq!(order.customer_location, 9);
    }

    #[test]
    fn test_submit_unknown_restaurant_no_mutation() {
        let mut engine = reference_engine();

        assert_eq!(engine.submit_order(999, 4), Err(DispatchError::UnknownRestaurant(999)));
        assert_eq!(engine.peek_next_order_id(), 1);
        assert_eq!(engine.pending_orders(), 0);
        assert!(engine.history().is_empty());

        // The failed attempt did not burn an id
        assert_eq!(engine.submit_order(101, 4), Ok(1));
    }

    #[test]
    fn test_process_assigns_nearest_rider() {
        let mut engine = reference_engine();
        engine.submit_order(101, 7).unwrap();

        let assignment = engine.process_next_order().unwrap();

        assert_eq!(assignment.order_id, 1);
        assert_eq!(assignment.rider_id, 201);
        assert_eq!(assignment.rider_name, "Ali");
        assert_eq!(assignment.restaurant_name, "Burger King");
        assert_eq!(assignment.distance_to_restaurant, 1);
        assert_eq!(assignment.distance_to_customer, 5);
        assert_eq!(assignment.total_distance, 6);

        let ali = engine.roster().find_by_id(201).unwrap();
        assert_eq!(ali.location, 7);
        assert_eq!(ali.deliveries_completed, 1);

        assert_eq!(engine.history().peek(), Some("Processed Order #1"));
        assert_eq!(engine.pending_orders(), 0);
    }

    #[test]
    fn test_process_rider_moves_affect_next_dispatch() {
        let mut engine = reference_engine();
        engine.submit_order(101, 7).unwrap(); // Ali: 1 -> 7
        engine.submit_order(102, 0).unwrap(); // Pizza Hut @ 8: Ali @ 7 is now closest

        engine.process_next_order().unwrap();
        let second = engine.process_next_order().unwrap();

        assert_eq!(second.rider_id, 201);
        assert_eq!(second.distance_to_restaurant, 1);
        assert_eq!(second.distance_to_customer, 8);
        assert_eq!(engine.roster().find_by_id(201).unwrap().location, 0);
    }

    #[test]
    fn test_process_empty_queue() {
        let mut engine = reference_engine();

        assert_eq!(engine.process_next_order(), Err(DispatchError::EmptyQueue));
        assert!(engine.history().is_empty());
        assert_eq!(engine.roster().find_by_id(201).unwrap().deliveries_completed, 0);
    }

    #[test]
    fn test_process_no_riders_drops_order() {
        let mut engine = DispatchEngine::new();
        engine.register_restaurant(1, "Deli", Decimal::new(41, 1), 0);
        engine.submit_order(1, 5).unwrap();
        engine.submit_order(1, 6).unwrap();

        assert_eq!(
            engine.process_next_order(),
            Err(DispatchError::NoRidersAvailable { order_id: 1 })
        );

        // Order 1 is gone; only the placement entries are in history
        assert_eq!(engine.pending_orders(), 1);
        assert_eq!(engine.queue().peek().map(|o| o.id), Some(2));
        assert_eq!(engine.history().len(), 2);

        // A rider joining later picks up the next order, not the dropped one
        engine.add_rider(Rider::new(7, "Late", 0, 0));
        assert_eq!(engine.process_next_order().unwrap().order_id, 2);
    }

    #[test]
    fn test_ranked_rider_view() {
        let mut engine = reference_engine();

        let names: Vec<_> = engine
            .ranked_rider_view()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(names, vec!["Ali", "Hamza", "Bilal"]);

        engine.submit_order(101, 7).unwrap();
        engine.process_next_order().unwrap(); // Ali
        engine.submit_order(103, 3).unwrap();
        engine.process_next_order().unwrap(); // Bilal @ 6 is 1 from Subway @ 5

        let ranked: Vec<_> = engine
            .ranked_rider_view()
            .iter()
            .map(|r| (r.id, r.deliveries_completed))
            .collect();
        assert_eq!(ranked, vec![(203, 0), (201, 1), (202, 3)]);
    }

    #[test]
    fn test_ranking_reorders_dispatch_ties() {
        let mut engine = DispatchEngine::new();
        engine.register_restaurant(1, "Deli", Decimal::new(41, 1), 5);
        engine.add_rider(Rider::new(10, "Busy", 4, 9));
        engine.add_rider(Rider::new(11, "Idle", 6, 0));

        engine.submit_order(1, 5).unwrap();
        engine.ranked_rider_view();

        // Both riders are 1 away; Idle now comes first in the roster
        assert_eq!(engine.process_next_order().unwrap().rider_id, 11);
    }

    #[test]
    fn test_undo_pops_without_reverting() {
        let mut engine = reference_engine();
        engine.submit_order(101, 7).unwrap();
        engine.process_next_order().unwrap();

        assert_eq!(engine.undo_last_action().as_deref(), Ok("Processed Order #1"));
        assert_eq!(engine.undo_last_action().as_deref(), Ok("Placed Order #1"));
        assert_eq!(engine.undo_last_action(), Err(DispatchError::EmptyHistory));

        let ali = engine.roster().find_by_id(201).unwrap();
        assert_eq!(ali.location, 7);
        assert_eq!(ali.deliveries_completed, 1);
        assert_eq!(engine.peek_next_order_id(), 2);
    }

    #[test]
    fn test_undo_placement_keeps_order_queued() {
        let mut engine = reference_engine();
        engine.submit_order(102, 1).unwrap();

        engine.undo_last_action().unwrap();

        assert_eq!(engine.pending_orders(), 1);
        assert!(engine.process_next_order().is_ok());
    }

    #[test]
    fn test_state_root_hex_length() {
        let engine = reference_engine();
        let hex_root = engine.state_root_hex().unwrap();

        assert_eq!(hex_root.len(), 64);
    }
}
