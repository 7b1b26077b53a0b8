//! Capacity trimming.
//!
//! # Algorithm
//!
//! Pass 1 unloads single packages whose address no other loaded package
//! shares, so no address is split. In urgent mode any non-grouped package
//! qualifies; otherwise only non-grouped end-of-day packages do, which keeps
//! deadline packages on board while random picks are trimmed away.
//!
//! Pass 2 runs only if pass 1 could not reach capacity. It repeatedly takes
//! the first non-grouped package and unloads its whole address cluster,
//! skipping clusters that hold a grouped package. Grouped packages are never
//! unloaded, so a load whose every address holds a grouped package cannot be
//! trimmed further and is reported as an error.
//!
//! An address holding more packages than the vehicle carries can never be
//! loaded whole. Trimming reports it instead of unloading it, which would
//! leave an empty load behind.

use std::collections::BTreeMap;

use crate::error::LoadError;
use crate::models::{Deadline, Package};

use super::Staging;

/// Unloads packages until the load fits `capacity`.
///
/// Every unloaded package returns to the staging pool.
///
/// # Examples
///
/// ```
/// use u_parcel::filter::{trim_to_capacity, Staging};
/// use u_parcel::models::Package;
///
/// let mut staging = Staging::new((1..=4).map(|id| Package::new(id, id)).collect());
/// for id in 1..=4 {
///     staging.load_package(id);
/// }
/// trim_to_capacity(&mut staging, 2, false).unwrap();
/// assert_eq!(staging.load().len(), 2);
/// assert_eq!(staging.pool().len(), 2);
/// ```
pub fn trim_to_capacity(
    staging: &mut Staging,
    capacity: usize,
    urgent_mode: bool,
) -> Result<(), LoadError> {
    if staging.load().len() <= capacity {
        return Ok(());
    }
    if let Some((address, packages)) = oversized_cluster(staging.load().packages(), capacity) {
        return Err(oversized(address, packages, capacity));
    }

    let shared = staging.load().shared_addresses();
    let singles: Vec<usize> = staging
        .load()
        .packages()
        .iter()
        .filter(|p| !p.is_grouped() && !shared.contains(&p.address()))
        .filter(|p| urgent_mode || p.deadline() == Deadline::EndOfDay)
        .map(|p| p.id())
        .collect();
    for id in singles {
        if staging.load().len() <= capacity {
            return Ok(());
        }
        staging.unload_package(id);
    }

    while staging.load().len() > capacity {
        let load = staging.load();
        let removable = load.packages().iter().find(|p| {
            !p.is_grouped()
                && !load
                    .packages()
                    .iter()
                    .any(|q| q.is_grouped() && q.address() == p.address())
        });
        let address = match removable {
            Some(p) => p.address(),
            None => {
                log::error!(
                    "load of {} packages exceeds capacity {capacity} and only grouped addresses remain",
                    staging.load().len()
                );
                return Err(LoadError::CapacityUnreachable {
                    load: staging.load().len(),
                    capacity,
                });
            }
        };
        let cluster: Vec<usize> = staging
            .load()
            .packages()
            .iter()
            .filter(|p| p.address() == address)
            .map(|p| p.id())
            .collect();
        for id in cluster {
            staging.unload_package(id);
        }
    }
    Ok(())
}

/// Fails if any address in the load or the pool holds more than
/// `capacity` packages.
///
/// # Examples
///
/// ```
/// use u_parcel::filter::{reject_oversized_clusters, Staging};
/// use u_parcel::models::Package;
/// use u_parcel::LoadError;
///
/// let staging = Staging::new(vec![Package::new(1, 4), Package::new(2, 4), Package::new(3, 5)]);
/// assert!(reject_oversized_clusters(&staging, 2).is_ok());
/// assert_eq!(
///     reject_oversized_clusters(&staging, 1),
///     Err(LoadError::OversizedCluster { address: 4, packages: 2, capacity: 1 })
/// );
/// ```
pub fn reject_oversized_clusters(staging: &Staging, capacity: usize) -> Result<(), LoadError> {
    let packages = staging.load().packages().iter().chain(staging.pool());
    match oversized_cluster(packages, capacity) {
        Some((address, packages)) => Err(oversized(address, packages, capacity)),
        None => Ok(()),
    }
}

fn oversized_cluster<'a, I>(packages: I, capacity: usize) -> Option<(usize, usize)>
where
    I: IntoIterator<Item = &'a Package>,
{
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for p in packages {
        *counts.entry(p.address()).or_insert(0) += 1;
    }
    counts.into_iter().find(|&(_, n)| n > capacity)
}

fn oversized(address: usize, packages: usize, capacity: usize) -> LoadError {
    log::error!("address {address} has {packages} packages and capacity is {capacity}");
    LoadError::OversizedCluster {
        address,
        packages,
        capacity,
    }
}
