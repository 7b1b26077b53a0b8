//! Eligibility rules that shape a candidate load.

use std::collections::BTreeSet;

use super::Staging;

/// Drops packages reserved for another vehicle from this attempt.
///
/// Every other pool package sharing an address with a dropped package is
/// dropped too, so the address is served entirely by its reserved vehicle.
/// Returns how many packages were dropped.
///
/// # Examples
///
/// ```
/// use u_parcel::filter::{exclude_vehicle_exclusive, Staging};
/// use u_parcel::models::{Constraint, Package};
///
/// let mut staging = Staging::new(vec![
///     Package::new(1, 4).with_constraint(Constraint::VehicleOnly(2)),
///     Package::new(2, 4),
///     Package::new(3, 5),
/// ]);
/// assert_eq!(exclude_vehicle_exclusive(&mut staging, 1), 2);
/// assert_eq!(staging.pool().len(), 1);
/// ```
pub fn exclude_vehicle_exclusive(staging: &mut Staging, vehicle_id: usize) -> usize {
    let reserved: BTreeSet<usize> = staging
        .pool()
        .iter()
        .filter(|p| p.excluded_from(vehicle_id))
        .map(|p| p.address())
        .collect();
    if reserved.is_empty() {
        return 0;
    }
    let dropped = staging.discard_where(|p| reserved.contains(&p.address()));
    log::debug!(
        "vehicle {vehicle_id}: dropped {} packages reserved for other vehicles",
        dropped.len()
    );
    dropped.len()
}

/// Preloads every deadline or group package and records its address as urgent.
///
/// Returns how many packages were loaded.
pub fn preload_urgent(staging: &mut Staging) -> usize {
    let addresses: Vec<usize> = staging
        .pool()
        .iter()
        .filter(|p| p.is_urgent())
        .map(|p| p.address())
        .collect();
    for address in addresses {
        staging.mark_urgent(address);
    }
    staging.load_where(|p| p.is_urgent())
}

/// Loads every pool package whose address is already in the load.
///
/// Keeps packages for the same address on the same vehicle. Returns how many
/// packages were loaded.
pub fn expand_by_address(staging: &mut Staging) -> usize {
    if staging.load().is_empty() {
        return 0;
    }
    let addresses: BTreeSet<usize> = staging.load().addresses().into_iter().collect();
    staging.load_where(|p| addresses.contains(&p.address()))
}
