//! Committed vehicle assignment.

use serde::{Deserialize, Serialize};

use super::{Package, Route, StatusUpdate};

/// A load committed to a vehicle together with its delivery route.
///
/// Packages are held in delivery order: grouped by route stop, and in load
/// order within a stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    vehicle_id: usize,
    packages: Vec<Package>,
    route: Route,
    attempts: usize,
}

impl Assignment {
    pub(crate) fn new(
        vehicle_id: usize,
        packages: Vec<Package>,
        route: Route,
        attempts: usize,
    ) -> Self {
        Self {
            vehicle_id,
            packages,
            route,
            attempts,
        }
    }

    /// Vehicle carrying the load.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Loaded packages in delivery order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Package IDs in delivery order.
    pub fn package_ids(&self) -> Vec<usize> {
        self.packages.iter().map(|p| p.id()).collect()
    }

    /// Addresses driven to, without the leading depot.
    pub fn stops(&self) -> &[usize] {
        self.route.stops()
    }

    /// Distance of each leg, aligned with [`Assignment::stops`].
    pub fn edges(&self) -> &[f64] {
        self.route.edges()
    }

    /// Total route distance.
    pub fn cost(&self) -> f64 {
        self.route.cost()
    }

    /// The full route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Pipeline attempts used, the accepted one included.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Status changes to apply to the package-status store.
    pub fn status_updates(&self) -> Vec<StatusUpdate> {
        self.packages
            .iter()
            .map(|p| StatusUpdate {
                package_id: p.id(),
                status: p.status(),
            })
            .collect()
    }
}
