//! Deadline validation and load commit.

use std::collections::BTreeSet;

use crate::filter::Staging;
use crate::inventory::Inventory;
use crate::models::{Assignment, Package, PackageStatus, Route, Vehicle};

/// Checks a route against the deadline policy.
///
/// A vehicle that does not come back to the depot treats its last stop as
/// "whenever", so that stop must not be an urgent address. Returns the
/// offending address, or `None` if the route is acceptable.
///
/// The check is on the final delivery itself, not the stop before it.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use u_parcel::dispatch::deadline_violation;
/// use u_parcel::models::Route;
///
/// let urgent: BTreeSet<usize> = [4].into_iter().collect();
/// let open = Route::new(vec![0, 2, 4], vec![1.0, 1.0], 2.0);
/// assert_eq!(deadline_violation(&open, &urgent, false), Some(4));
/// assert_eq!(deadline_violation(&open, &urgent, true), None);
/// ```
pub fn deadline_violation(
    route: &Route,
    urgent: &BTreeSet<usize>,
    returns_to_depot: bool,
) -> Option<usize> {
    if returns_to_depot {
        return None;
    }
    route.last_delivery().filter(|a| urgent.contains(a))
}

/// Commits the staged load and route to the vehicle.
///
/// Loaded packages leave the inventory for good and are marked as loaded on
/// the vehicle. Packages are ordered by the stop that delivers them, keeping
/// load order within a stop.
pub fn commit(
    inventory: &mut Inventory,
    staging: Staging,
    route: Route,
    vehicle: &Vehicle,
    attempts: usize,
) -> Assignment {
    let mut remaining = staging.into_load().into_packages();
    let mut ordered: Vec<Package> = Vec::with_capacity(remaining.len());
    for &address in route.stops() {
        let (here, rest): (Vec<Package>, Vec<Package>) = remaining
            .into_iter()
            .partition(|p| p.address() == address);
        ordered.extend(here);
        remaining = rest;
    }
    ordered.extend(remaining);

    let status = PackageStatus::Loaded {
        vehicle: vehicle.id(),
    };
    for package in &mut ordered {
        if inventory.remove(package.id()).is_none() {
            log::warn!(
                "package {} committed to vehicle {} was not in the inventory",
                package.id(),
                vehicle.id()
            );
        }
        package.set_status(status);
    }

    log::info!(
        "vehicle {} departs with {} packages over {} miles",
        vehicle.id(),
        ordered.len(),
        route.cost()
    );
    Assignment::new(vehicle.id(), ordered, route, attempts)
}
