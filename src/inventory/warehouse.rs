//! Depot inventory with held packages.

use std::collections::BTreeSet;

use crate::models::{Constraint, Package, PackageStatus, StatusUpdate};

/// Packages waiting at the depot.
///
/// Delayed packages, packages sharing an address with a delayed one, and
/// packages with a bad address are held back from loading until released.
///
/// # Examples
///
/// ```
/// use u_parcel::inventory::Inventory;
/// use u_parcel::models::{Constraint, Package};
///
/// let inv = Inventory::new(vec![
///     Package::new(1, 3),
///     Package::new(2, 4).with_constraint(Constraint::Delayed),
///     Package::new(3, 4),
///     Package::new(4, 5).with_constraint(Constraint::BadAddress),
/// ]);
/// assert_eq!(inv.len(), 1);
/// assert_eq!(inv.held().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    available: Vec<Package>,
    held: Vec<Package>,
}

impl Inventory {
    /// Splits the given packages into available and held ones.
    pub fn new(packages: Vec<Package>) -> Self {
        let delayed_addresses: BTreeSet<usize> = packages
            .iter()
            .filter(|p| p.constraint() == Constraint::Delayed)
            .map(|p| p.address())
            .collect();

        let mut inventory = Self::default();
        for mut package in packages {
            match package.constraint() {
                Constraint::Delayed | Constraint::BadAddress => inventory.held.push(package),
                _ if delayed_addresses.contains(&package.address()) => {
                    package.set_status(PackageStatus::Unavailable);
                    inventory.held.push(package);
                }
                _ => inventory.available.push(package),
            }
        }
        inventory
    }

    /// Packages available for loading, in arrival order.
    pub fn available(&self) -> &[Package] {
        &self.available
    }

    /// Packages held back from loading.
    pub fn held(&self) -> &[Package] {
        &self.held
    }

    /// Number of available packages.
    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// Returns `true` if no package is available.
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Returns `true` if the package is available.
    pub fn contains(&self, package_id: usize) -> bool {
        self.available.iter().any(|p| p.id() == package_id)
    }

    /// Adds a package to the available pool.
    pub fn add(&mut self, package: Package) {
        self.available.push(package);
    }

    /// Removes an available package by ID.
    pub fn remove(&mut self, package_id: usize) -> Option<Package> {
        let pos = self.available.iter().position(|p| p.id() == package_id)?;
        Some(self.available.remove(pos))
    }

    /// Returns `true` if every available package fits in one vehicle.
    pub fn fits_within(&self, capacity: usize) -> bool {
        self.available.len() <= capacity
    }

    /// Releases every held package except those awaiting an address fix.
    pub fn release_delayed(&mut self) -> Vec<StatusUpdate> {
        let (released, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.held)
            .into_iter()
            .partition(|p| p.constraint() != Constraint::BadAddress);
        self.held = kept;
        let updates = self.release(released);
        log::info!("released {} delayed packages", updates.len());
        updates
    }

    /// Moves bad-address packages to `address` and releases all held packages.
    pub fn correct_addresses(&mut self, address: usize) -> Vec<StatusUpdate> {
        let mut released = std::mem::take(&mut self.held);
        for package in &mut released {
            if package.constraint() == Constraint::BadAddress {
                package.set_address(address);
            }
        }
        let updates = self.release(released);
        log::info!(
            "corrected addresses and released {} packages",
            updates.len()
        );
        updates
    }

    fn release(&mut self, packages: Vec<Package>) -> Vec<StatusUpdate> {
        let mut updates = Vec::with_capacity(packages.len());
        for mut package in packages {
            package.set_status(PackageStatus::ReadyForPickup);
            updates.push(StatusUpdate {
                package_id: package.id(),
                status: PackageStatus::ReadyForPickup,
            });
            self.available.push(package);
        }
        updates
    }
}
