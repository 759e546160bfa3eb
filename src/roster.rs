//! Rider roster.
//!
//! Riders are held in a `Vec` in the order they were added. That order is
//! significant: the dispatcher scans it front to back and the first rider
//! with the strictly smallest distance wins.
//!
//! Ranking by workload sorts the roster itself. After a ranking, equal
//! distances in later dispatches go to the rider with the lighter workload.

use crate::types::{Rider, RiderId};

/// Collection of riders in insertion order
#[derive(Debug, Clone, Default)]
pub struct RiderRoster {
    riders: Vec<Rider>,
}

impl RiderRoster {
    pub fn new() -> Self {
        Self { riders: Vec::new() }
    }

    /// Append a rider; ids are not checked for uniqueness
    pub fn add(&mut self, rider: Rider) {
        self.riders.push(rider);
    }

    /// Sort the roster ascending by completed deliveries and return it.
    ///
    /// The sort is stable and in place: riders with equal workload keep
    /// their relative order, and the new order is the one the dispatcher
    /// scans from then on.
    ///
    /// # Example
    ///
    /// ```
    /// use food_dispatch::roster::RiderRoster;
    /// use food_dispatch::types::Rider;
    ///
    /// let mut roster = RiderRoster::new();
    /// roster.add(Rider::new(201, "Ali", 1, 0));
    /// roster.add(Rider::new(202, "Bilal", 6, 2));
    /// roster.add(Rider::new(203, "Hamza", 3, 0));
    ///
    /// let ranked = roster.rank_by_workload();
    /// let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
    /// assert_eq!(names, vec!["Ali", "Hamza", "Bilal"]);
    ///
    /// // The roster keeps the ranked order
    /// assert_eq!(roster.iter().last().map(|r| r.id), Some(202));
    /// ```
    pub fn rank_by_workload(&mut self) -> &[Rider] {
        self.riders.sort_by_key(|rider| rider.deliveries_completed);
        &self.riders
    }

    /// First rider with the given id
    pub fn find_by_id(&self, id: RiderId) -> Option<&Rider> {
        self.riders.iter().find(|rider| rider.id == id)
    }

    /// Mutable access by roster position (used by the dispatcher)
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Rider> {
        self.riders.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rider> {
        self.riders.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.riders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(riders: &[Rider]) -> Vec<RiderId> {
        riders.iter().map(|rider| rider.id).collect()
    }

    #[test]
    fn test_roster_add_keeps_order() {
        let mut roster = RiderRoster::new();
        roster.add(Rider::new(3, "C", 0, 0));
        roster.add(Rider::new(1, "A", 0, 0));

        let order: Vec<_> = roster.iter().map(|r| r.id).collect();
        assert_eq!(order, vec![3, 1]);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_rank_by_workload_stable() {
        let mut roster = RiderRoster::new();
        roster.add(Rider::new(1, "A", 0, 3));
        roster.add(Rider::new(2, "B", 0, 1));
        roster.add(Rider::new(3, "C", 0, 3));
        roster.add(Rider::new(4, "D", 0, 1));
        roster.add(Rider::new(5, "E", 0, 0));

        let first = ids(roster.rank_by_workload());
        let second = ids(roster.rank_by_workload());

        assert_eq!(first, vec![5, 2, 4, 1, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rank_by_workload_reorders_roster() {
        let mut roster = RiderRoster::new();
        roster.add(Rider::new(1, "A", 0, 5));
        roster.add(Rider::new(2, "B", 0, 0));
        roster.add(Rider::new(3, "C", 0, 0));

        roster.rank_by_workload();

        let order: Vec<_> = roster.iter().map(|r| r.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(roster.get_mut(0).map(|r| r.id), Some(2));
    }

    #[test]
    fn test_roster_get_mut() {
        let mut roster = RiderRoster::new();
        roster.add(Rider::new(201, "Ali", 1, 0));

        roster.get_mut(0).unwrap().complete_delivery(7);

        let ali = roster.find_by_id(201).unwrap();
        assert_eq!(ali.location, 7);
        assert_eq!(ali.deliveries_completed, 1);
        assert!(roster.get_mut(1).is_none());
    }

    #[test]
    fn test_roster_empty() {
        let mut roster = RiderRoster::new();

        assert!(roster.is_empty());
        assert!(roster.rank_by_workload().is_empty());
        assert!(roster.find_by_id(1).is_none());
    }
}
