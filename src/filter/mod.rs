//! Constraint filter for candidate loads.
//!
//! - [`exclude_vehicle_exclusive`] — Drops addresses reserved for another vehicle
//! - [`preload_urgent`] — Preloads deadline and group packages
//! - [`expand_by_address`] — Keeps same-address packages together
//! - [`reject_oversized_clusters`] — Fails on an address too large for the vehicle
//! - [`trim_to_capacity`] — Unloads packages until the load fits the vehicle

mod capacity;
mod rules;
mod staging;

pub use capacity::{reject_oversized_clusters, trim_to_capacity};
pub use rules::{exclude_vehicle_exclusive, expand_by_address, preload_urgent};
pub use staging::Staging;
