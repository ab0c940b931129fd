//! Deterministic min-priority frontier.
//!
//! A binary heap popping the lowest (cost, station) entry. Equal costs
//! pop in alphabetical name order, which is what makes both searches
//! reproducible run to run.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::domain::StationName;

/// A frontier cost: totally ordered for heap purposes.
///
/// `f64` is ordered with [`f64::total_cmp`]; search costs are sums of
/// great-circle distances and can never be NaN.
pub trait FrontierCost: Copy {
    fn cmp_cost(&self, other: &Self) -> Ordering;
}

impl FrontierCost for u32 {
    fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl FrontierCost for f64 {
    fn cmp_cost(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

#[derive(Debug, Clone)]
struct Entry<C> {
    cost: C,
    station: StationName,
}

impl<C: FrontierCost> Ord for Entry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp_cost(&other.cost)
            .then_with(|| self.station.cmp(&other.station))
    }
}

impl<C: FrontierCost> PartialOrd for Entry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: FrontierCost> PartialEq for Entry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: FrontierCost> Eq for Entry<C> {}

/// Min-priority queue of (cost, station) pairs with deterministic
/// tie-breaking: lowest cost first, then alphabetical station name.
#[derive(Debug, Clone)]
pub struct Frontier<C> {
    heap: BinaryHeap<Reverse<Entry<C>>>,
}

impl<C: FrontierCost> Frontier<C> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Add a station at the given cost.
    pub fn push(&mut self, cost: C, station: StationName) {
        self.heap.push(Reverse(Entry { cost, station }));
    }

    /// Remove and return the lowest (cost, station) entry.
    pub fn pop(&mut self) -> Option<(C, StationName)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.cost, entry.station))
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<C: FrontierCost> Default for Frontier<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    #[test]
    fn pops_in_cost_order() {
        let mut frontier = Frontier::new();
        frontier.push(3u32, name("Gamma"));
        frontier.push(1u32, name("Alpha"));
        frontier.push(2u32, name("Beta"));

        assert_eq!(frontier.pop(), Some((1, name("Alpha"))));
        assert_eq!(frontier.pop(), Some((2, name("Beta"))));
        assert_eq!(frontier.pop(), Some((3, name("Gamma"))));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn ties_break_alphabetically() {
        let mut frontier = Frontier::new();
        frontier.push(1u32, name("Vauxhall"));
        frontier.push(1u32, name("Balham"));
        frontier.push(1u32, name("Epping"));

        assert_eq!(frontier.pop(), Some((1, name("Balham"))));
        assert_eq!(frontier.pop(), Some((1, name("Epping"))));
        assert_eq!(frontier.pop(), Some((1, name("Vauxhall"))));
    }

    #[test]
    fn float_costs_order_correctly() {
        let mut frontier = Frontier::new();
        frontier.push(2.5f64, name("Far"));
        frontier.push(0.1f64, name("Near"));
        frontier.push(1.0f64, name("Middle"));

        assert_eq!(frontier.pop(), Some((0.1, name("Near"))));
        assert_eq!(frontier.pop(), Some((1.0, name("Middle"))));
        assert_eq!(frontier.pop(), Some((2.5, name("Far"))));
    }

    #[test]
    fn float_ties_break_alphabetically() {
        let mut frontier = Frontier::new();
        frontier.push(1.0f64, name("Beta"));
        frontier.push(1.0f64, name("Alpha"));

        assert_eq!(frontier.pop(), Some((1.0, name("Alpha"))));
        assert_eq!(frontier.pop(), Some((1.0, name("Beta"))));
    }

    #[test]
    fn len_and_is_empty() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        frontier.push(1u32, name("Alpha"));
        assert_eq!(frontier.len(), 1);
        assert!(!frontier.is_empty());
        frontier.pop();
        assert!(frontier.is_empty());
    }
}
