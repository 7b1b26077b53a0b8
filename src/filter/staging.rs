//! Staging area for one loading attempt.

use std::collections::BTreeSet;

use crate::models::{CandidateLoad, Package};

/// A candidate load together with the working pool it is drawn from.
///
/// Packages move between the two through [`Staging::load_package`] and
/// [`Staging::unload_package`], so a package is never in both. Cloning a
/// staging area snapshots the whole attempt state.
///
/// # Examples
///
/// ```
/// use u_parcel::filter::Staging;
/// use u_parcel::models::Package;
///
/// let mut staging = Staging::new(vec![Package::new(1, 2), Package::new(2, 3)]);
/// assert!(staging.load_package(2));
/// assert_eq!(staging.load().ids(), vec![2]);
/// assert_eq!(staging.pool().len(), 1);
/// assert!(!staging.load_package(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Staging {
    load: CandidateLoad,
    pool: Vec<Package>,
    urgent: BTreeSet<usize>,
}

impl Staging {
    /// Starts an attempt with an empty load over the given pool.
    pub fn new(pool: Vec<Package>) -> Self {
        Self {
            load: CandidateLoad::new(),
            pool,
            urgent: BTreeSet::new(),
        }
    }

    /// The candidate load.
    pub fn load(&self) -> &CandidateLoad {
        &self.load
    }

    /// Packages still available to this attempt.
    pub fn pool(&self) -> &[Package] {
        &self.pool
    }

    /// Addresses of preloaded deadline or group packages.
    pub fn urgent_addresses(&self) -> &BTreeSet<usize> {
        &self.urgent
    }

    /// Moves a package from the pool into the load.
    ///
    /// Returns `false` if the package is not in the pool.
    pub fn load_package(&mut self, package_id: usize) -> bool {
        match self.pool.iter().position(|p| p.id() == package_id) {
            Some(pos) => {
                let package = self.pool.remove(pos);
                self.load.push(package);
                true
            }
            None => false,
        }
    }

    /// Moves a package from the load back into the pool.
    ///
    /// Returns `false` if the package is not loaded.
    pub fn unload_package(&mut self, package_id: usize) -> bool {
        match self.load.remove(package_id) {
            Some(package) => {
                self.pool.push(package);
                true
            }
            None => false,
        }
    }

    /// Loads every pool package matching `pred`, returning how many moved.
    pub(crate) fn load_where<F>(&mut self, pred: F) -> usize
    where
        F: Fn(&Package) -> bool,
    {
        let ids: Vec<usize> = self
            .pool
            .iter()
            .filter(|p| pred(p))
            .map(|p| p.id())
            .collect();
        for &id in &ids {
            self.load_package(id);
        }
        ids.len()
    }

    /// Drops every pool package matching `pred` from this attempt.
    pub(crate) fn discard_where<F>(&mut self, pred: F) -> Vec<Package>
    where
        F: Fn(&Package) -> bool,
    {
        let (discarded, kept): (Vec<Package>, Vec<Package>) = std::mem::take(&mut self.pool)
            .into_iter()
            .partition(|p| pred(p));
        self.pool = kept;
        discarded
    }

    pub(crate) fn mark_urgent(&mut self, address: usize) {
        self.urgent.insert(address);
    }

    pub(crate) fn into_load(self) -> CandidateLoad {
        self.load
    }
}
