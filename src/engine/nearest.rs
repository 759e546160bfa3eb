//! Nearest-rider search.

use crate::types::{Location, Rider};

/// The rider picked for an order, by roster position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestRider {
    /// Position in the roster
    pub index: usize,

    /// Distance from that rider to the target
    pub distance: u64,
}

/// Scan riders in order and return the one closest to `target`.
///
/// A rider replaces the current best only when strictly closer, so among
/// riders tied at the minimum distance the first one seen wins.
///
/// # Returns
///
/// `None` if `riders` is empty
///
/// # Example
///
/// ```
/// use food_dispatch::engine::find_nearest_rider;
/// use food_dispatch::types::Rider;
///
/// let riders = vec![
///     Rider::new(201, "Ali", 1, 0),
///     Rider::new(202, "Bilal", 6, 2),
///     Rider::new(203, "Hamza", 3, 0),
/// ];
///
/// let nearest = find_nearest_rider(&riders, 2).unwrap();
/// assert_eq!(nearest.index, 0);
/// assert_eq!(nearest.distance, 1);
/// ```
pub fn find_nearest_rider<'a, I>(riders: I, target: Location) -> Option<NearestRider>
where
    I: IntoIterator<Item = &'a Rider>,
{
    let mut best: Option<NearestRider> = None;

    for (index, rider) in riders.into_iter().enumerate() {
        let distance = rider.distance_to(target);
        match best {
            Some(current) if distance >= current.distance => {}
            _ => best = Some(NearestRider { index, distance }),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn riders_at(locations: &[Location]) -> Vec<Rider> {
        locations
            .iter()
            .enumerate()
            .map(|(i, &loc)| Rider::new(i as u64 + 1, format!("R{}", i + 1), loc, 0))
            .collect()
    }

    #[test]
    fn test_nearest_empty() {
        let riders: Vec<Rider> = Vec::new();
        assert!(find_nearest_rider(&riders, 5).is_none());
    }

    #[test]
    fn test_nearest_single() {
        let riders = riders_at(&[100]);
        assert_eq!(
            find_nearest_rider(&riders, 0),
            Some(NearestRider { index: 0, distance: 100 })
        );
    }

    #[test]
    fn test_nearest_picks_minimum() {
        let riders = riders_at(&[9, 4, 7]);
        let nearest = find_nearest_rider(&riders, 5).unwrap();

        assert_eq!(nearest.index, 1);
        assert_eq!(nearest.distance, 1);
    }

    #[test]
    fn test_nearest_tie_first_seen_wins() {
        // 1 and 3 are both one away from 2
        let riders = riders_at(&[1, 6, 3]);
        assert_eq!(find_nearest_rider(&riders, 2).unwrap().index, 0);

        // Equidistant on both sides, and a later exact duplicate
        let riders = riders_at(&[8, 2, 8, 2]);
        assert_eq!(find_nearest_rider(&riders, 5).unwrap().index, 0);
    }

    #[test]
    fn test_nearest_no_distance_ceiling() {
        // Far-away riders are still candidates
        let riders = riders_at(&[5_000, 2_000]);
        let nearest = find_nearest_rider(&riders, 0).unwrap();

        assert_eq!(nearest.index, 1);
        assert_eq!(nearest.distance, 2_000);
    }

    #[test]
    fn test_nearest_negative_coordinates() {
        let riders = riders_at(&[-10, -3, 4]);
        let nearest = find_nearest_rider(&riders, -2).unwrap();

        assert_eq!(nearest.index, 1);
        assert_eq!(nearest.distance, 1);
    }
}
