//! Candidate load held in a vehicle bay.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Package;

/// The packages chosen for one vehicle run.
///
/// The load owns its packages; the package count is always the length of
/// the package list, and the unique address set is derived on demand.
///
/// # Examples
///
/// ```
/// use u_parcel::models::{CandidateLoad, Package};
///
/// let mut load = CandidateLoad::new();
/// load.push(Package::new(1, 5));
/// load.push(Package::new(2, 5));
/// load.push(Package::new(3, 2));
/// assert_eq!(load.len(), 3);
/// assert_eq!(load.addresses(), vec![2, 5]);
/// assert_eq!(load.address_count(5), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateLoad {
    packages: Vec<Package>,
}

impl CandidateLoad {
    /// Creates an empty load.
    pub fn new() -> Self {
        Self {
            packages: Vec::new(),
        }
    }

    /// Adds a package to the load.
    pub fn push(&mut self, package: Package) {
        self.packages.push(package);
    }

    /// Removes a package by ID, returning it if it was loaded.
    pub fn remove(&mut self, package_id: usize) -> Option<Package> {
        let pos = self.packages.iter().position(|p| p.id() == package_id)?;
        Some(self.packages.remove(pos))
    }

    /// Loaded packages in load order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Number of loaded packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns `true` if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Loaded package IDs in load order.
    pub fn ids(&self) -> Vec<usize> {
        self.packages.iter().map(|p| p.id()).collect()
    }

    /// Returns `true` if the package is loaded.
    pub fn contains(&self, package_id: usize) -> bool {
        self.packages.iter().any(|p| p.id() == package_id)
    }

    /// Unique delivery addresses, sorted ascending.
    pub fn addresses(&self) -> Vec<usize> {
        self.address_set().into_iter().collect()
    }

    /// Returns `true` if some loaded package goes to `address`.
    pub fn has_address(&self, address: usize) -> bool {
        self.packages.iter().any(|p| p.address() == address)
    }

    /// Number of loaded packages going to `address`.
    pub fn address_count(&self, address: usize) -> usize {
        self.packages
            .iter()
            .filter(|p| p.address() == address)
            .count()
    }

    /// Addresses shared by two or more loaded packages.
    pub fn shared_addresses(&self) -> BTreeSet<usize> {
        self.address_set()
            .into_iter()
            .filter(|&a| self.address_count(a) > 1)
            .collect()
    }

    pub(crate) fn into_packages(self) -> Vec<Package> {
        self.packages
    }

    fn address_set(&self) -> BTreeSet<usize> {
        self.packages.iter().map(|p| p.address()).collect()
    }
}
