//! Exact delivery tours over a single load.
//!
//! - [`TourProblem`] — A load's unique addresses and their reduced distance table
//! - [`shortest_cost`] — Fast mode, minimum cost only
//! - [`shortest_tour`] — Slow mode, cost with visiting order and edge distances

mod branch_bound;
mod problem;

pub use branch_bound::{shortest_cost, shortest_tour};
pub use problem::{Tour, TourProblem, MAX_STOPS};
