//! Bounded-retry vehicle loading.
//!
//! # Algorithm
//!
//! Each attempt stages a fresh copy of the available inventory, applies the
//! eligibility rules, trims to capacity, runs the randomized load search and
//! finally the exact tour search with path recording. A route that breaks
//! the deadline policy restarts the attempt with fresh random samples; the
//! first acceptable route is committed.
//!
//! An address with more packages than the vehicle carries fails the call
//! before any search, and an empty load is never committed while the
//! vehicle still has packages to choose from.

use crate::config::LoaderConfig;
use crate::distance::DistanceMatrix;
use crate::error::LoadError;
use crate::filter::{
    exclude_vehicle_exclusive, expand_by_address, preload_urgent, reject_oversized_clusters,
    trim_to_capacity, Staging,
};
use crate::inventory::Inventory;
use crate::models::{Assignment, Vehicle};
use crate::search::{search_load, PackageSampler};
use crate::tour::{shortest_tour, TourProblem};

use super::validator::{commit, deadline_violation};

/// Loads vehicles from a shared inventory, one call per departure.
///
/// # Examples
///
/// ```
/// use u_parcel::dispatch::VehicleLoader;
/// use u_parcel::distance::DistanceMatrix;
/// use u_parcel::inventory::Inventory;
/// use u_parcel::models::{Package, Vehicle};
/// use u_parcel::search::RandomSampler;
/// use u_parcel::LoaderConfig;
///
/// let dm = DistanceMatrix::from_lower_triangle(&[
///     vec![0.0],
///     vec![2.0, 0.0],
///     vec![4.0, 3.0, 0.0],
///     vec![5.0, 6.0, 2.0, 0.0],
/// ])
/// .unwrap();
/// let mut inventory = Inventory::new(vec![
///     Package::new(1, 1),
///     Package::new(2, 2),
///     Package::new(3, 3),
/// ]);
/// let mut loader =
///     VehicleLoader::new(&dm, LoaderConfig::default(), RandomSampler::seeded(1)).unwrap();
///
/// let assignment = loader.load_vehicle(&mut inventory, &Vehicle::new(1)).unwrap();
/// assert_eq!(assignment.cost(), 12.0);
/// assert_eq!(assignment.packages().len(), 3);
/// assert!(inventory.is_empty());
/// ```
#[derive(Debug)]
pub struct VehicleLoader<'a, S> {
    distances: &'a DistanceMatrix,
    config: LoaderConfig,
    sampler: S,
}

impl<'a, S: PackageSampler> VehicleLoader<'a, S> {
    /// Creates a loader over the full distance table.
    ///
    /// Fails if the configuration is out of range.
    pub fn new(
        distances: &'a DistanceMatrix,
        config: LoaderConfig,
        sampler: S,
    ) -> Result<Self, LoadError> {
        config.validate()?;
        Ok(Self {
            distances,
            config,
            sampler,
        })
    }

    /// Returns the loader configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Returns the package sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Consumes the loader and returns its sampler.
    pub fn into_sampler(self) -> S {
        self.sampler
    }

    /// Chooses, routes and commits one load for `vehicle`.
    ///
    /// On success the loaded packages are gone from `inventory`. On error
    /// the inventory is untouched.
    pub fn load_vehicle(
        &mut self,
        inventory: &mut Inventory,
        vehicle: &Vehicle,
    ) -> Result<Assignment, LoadError> {
        let returns = vehicle.returns_to_depot();
        for attempt in 1..=self.config.max_attempts() {
            let staging = self.stage(inventory, vehicle)?;
            if staging.load().is_empty() && !staging.pool().is_empty() {
                log::error!(
                    "vehicle {}: load search came back empty with {} packages available",
                    vehicle.id(),
                    staging.pool().len()
                );
                return Err(LoadError::EmptyLoad {
                    vehicle: vehicle.id(),
                    available: staging.pool().len(),
                });
            }
            let problem = TourProblem::new(&staging.load().addresses(), self.distances)?;
            let tour = shortest_tour(&problem, returns, self.config.precision())
                .ok_or(LoadError::NoTour {
                    stops: problem.len(),
                })?;
            let route = problem.route(&tour);

            if let Some(address) = deadline_violation(&route, staging.urgent_addresses(), returns) {
                log::warn!(
                    "vehicle {} attempt {attempt}: route ends at urgent address {address}, retrying",
                    vehicle.id()
                );
                continue;
            }
            return Ok(commit(inventory, staging, route, vehicle, attempt));
        }

        log::error!(
            "vehicle {}: no acceptable route after {} attempts",
            vehicle.id(),
            self.config.max_attempts()
        );
        Err(LoadError::RetriesExhausted {
            vehicle: vehicle.id(),
            attempts: self.config.max_attempts(),
        })
    }

    fn stage(&mut self, inventory: &Inventory, vehicle: &Vehicle) -> Result<Staging, LoadError> {
        let mut staging = Staging::new(inventory.available().to_vec());
        exclude_vehicle_exclusive(&mut staging, vehicle.id());
        reject_oversized_clusters(&staging, vehicle.capacity())?;
        let preloaded = preload_urgent(&mut staging);
        expand_by_address(&mut staging);
        trim_to_capacity(&mut staging, vehicle.capacity(), true)?;
        log::debug!(
            "vehicle {}: {preloaded} urgent packages preloaded, {} staged",
            vehicle.id(),
            staging.load().len()
        );
        search_load(
            staging,
            self.distances,
            vehicle,
            &self.config,
            &mut self.sampler,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Constraint, Deadline, Package, PackageStatus};
    use crate::search::RandomSampler;
    use crate::test_support::ScriptedSampler;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn line_table(n: usize) -> DistanceMatrix {
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..=i).map(|j| (i - j) as f64).collect())
            .collect();
        DistanceMatrix::from_lower_triangle(&rows).expect("valid")
    }

    // d01=5 d02=1 d03=9 d12=1 d13=1 d23=4
    fn deadline_table() -> DistanceMatrix {
        DistanceMatrix::from_lower_triangle(&[
            vec![0.0],
            vec![5.0, 0.0],
            vec![1.0, 1.0, 0.0],
            vec![9.0, 1.0, 4.0, 0.0],
        ])
        .expect("valid")
    }

    fn deadline_inventory() -> Inventory {
        Inventory::new(vec![
            Package::new(1, 1).with_deadline(Deadline::Timed),
            Package::new(2, 2),
            Package::new(3, 3),
        ])
    }

    #[test]
    fn test_last_trip_never_ends_at_urgent_address() {
        let dm = deadline_table();
        let mut inventory = deadline_inventory();
        let vehicle = Vehicle::new(1).with_capacity(2).with_last_trip(true);
        let config = LoaderConfig::default().with_trials(1);
        // Attempt 1 draws package 2: best open route 0-2-1 ends at the
        // deadline address. Attempt 2 draws package 3: 0-1-3 is accepted.
        let sampler = ScriptedSampler::new(vec![vec![0], vec![1]]);
        let mut loader = VehicleLoader::new(&dm, config, sampler).expect("valid");

        let assignment = loader.load_vehicle(&mut inventory, &vehicle).expect("loaded");

        assert_eq!(assignment.attempts(), 2);
        assert_eq!(assignment.stops(), &[1, 3]);
        assert_eq!(assignment.package_ids(), vec![1, 3]);
        assert_eq!(assignment.cost(), 6.0);
        assert!(!assignment.route().returns_to_depot());
        assert_eq!(inventory.len(), 1);
        assert!(inventory.contains(2));
        assert_eq!(loader.sampler().calls(), 2);
    }

    #[test]
    fn test_retries_exhausted() {
        let dm = deadline_table();
        let mut inventory = deadline_inventory();
        let vehicle = Vehicle::new(1).with_capacity(2).with_last_trip(true);
        let config = LoaderConfig::default().with_trials(1).with_max_attempts(3);
        let mut loader =
            VehicleLoader::new(&dm, config, ScriptedSampler::new(vec![])).expect("valid");

        let err = loader.load_vehicle(&mut inventory, &vehicle).unwrap_err();

        assert_eq!(
            err,
            LoadError::RetriesExhausted {
                vehicle: 1,
                attempts: 3
            }
        );
        assert_eq!(inventory.len(), 3);
        assert_eq!(loader.into_sampler().calls(), 3);
    }

    #[test]
    fn test_returning_vehicle_ignores_deadline_policy() {
        let dm = deadline_table();
        let mut inventory = deadline_inventory();
        let vehicle = Vehicle::new(1).with_capacity(2);
        let config = LoaderConfig::default().with_trials(1);
        let mut loader =
            VehicleLoader::new(&dm, config, ScriptedSampler::new(vec![])).expect("valid");

        let assignment = loader.load_vehicle(&mut inventory, &vehicle).expect("loaded");

        assert_eq!(assignment.attempts(), 1);
        assert_eq!(assignment.package_ids(), vec![2, 1]);
        assert_eq!(assignment.stops(), &[2, 1, 0]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dm = line_table(3);
        let config = LoaderConfig::default().with_max_attempts(0);
        assert!(matches!(
            VehicleLoader::new(&dm, config, ScriptedSampler::new(vec![])),
            Err(LoadError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_reserved_packages_wait_for_their_vehicle() {
        let dm = line_table(6);
        let mut inventory = Inventory::new(vec![
            Package::new(1, 1).with_constraint(Constraint::VehicleOnly(2)),
            Package::new(2, 1),
            Package::new(3, 4),
            Package::new(4, 5),
        ]);
        let mut loader = VehicleLoader::new(
            &dm,
            LoaderConfig::default(),
            ScriptedSampler::new(vec![]),
        )
        .expect("valid");

        let first = loader
            .load_vehicle(&mut inventory, &Vehicle::new(1))
            .expect("loaded");
        let mut ids = first.package_ids();
        ids.sort_unstable();
        assert_eq!(ids, vec![3, 4]);

        let second = loader
            .load_vehicle(&mut inventory, &Vehicle::new(2))
            .expect("loaded");
        let mut ids = second.package_ids();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_group_loaded_together() {
        let dm = line_table(8);
        let mut packages: Vec<Package> = (1..=5).map(|id| Package::new(id, id)).collect();
        packages.push(Package::new(6, 7).with_constraint(Constraint::Group(1)));
        packages.push(Package::new(7, 6).with_constraint(Constraint::Group(1)));
        let mut inventory = Inventory::new(packages);
        let mut loader = VehicleLoader::new(
            &dm,
            LoaderConfig::default(),
            RandomSampler::seeded(5),
        )
        .expect("valid");

        let assignment = loader
            .load_vehicle(&mut inventory, &Vehicle::new(1).with_capacity(3))
            .expect("loaded");

        let ids = assignment.package_ids();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&6) && ids.contains(&7));
    }

    #[test]
    fn test_oversized_group_fails_loudly() {
        let dm = line_table(5);
        let packages: Vec<Package> = (1..=4)
            .map(|id| Package::new(id, id).with_constraint(Constraint::Group(1)))
            .collect();
        let mut inventory = Inventory::new(packages);
        let mut loader = VehicleLoader::new(
            &dm,
            LoaderConfig::default(),
            ScriptedSampler::new(vec![]),
        )
        .expect("valid");

        let err = loader
            .load_vehicle(&mut inventory, &Vehicle::new(1).with_capacity(2))
            .unwrap_err();
        assert!(matches!(err, LoadError::CapacityUnreachable { capacity: 2, .. }));
        assert_eq!(inventory.len(), 4);
    }

    #[test]
    fn test_unknown_address_reported() {
        let dm = line_table(3);
        let mut inventory = Inventory::new(vec![Package::new(1, 9)]);
        let mut loader = VehicleLoader::new(
            &dm,
            LoaderConfig::default(),
            ScriptedSampler::new(vec![]),
        )
        .expect("valid");

        let err = loader
            .load_vehicle(&mut inventory, &Vehicle::new(1))
            .unwrap_err();
        assert!(matches!(err, LoadError::UnknownAddress { address: 9, .. }));
    }

    #[test]
    fn test_empty_inventory_yields_empty_route() {
        let dm = line_table(3);
        let mut inventory = Inventory::new(vec![]);
        let mut loader = VehicleLoader::new(
            &dm,
            LoaderConfig::default(),
            ScriptedSampler::new(vec![]),
        )
        .expect("valid");

        let assignment = loader
            .load_vehicle(&mut inventory, &Vehicle::new(1))
            .expect("loaded");
        assert!(assignment.packages().is_empty());
        assert!(assignment.stops().is_empty());
        assert_eq!(assignment.route().sequence(), &[0]);
        assert_eq!(assignment.cost(), 0.0);
    }

    #[test]
    fn test_oversized_plain_address_fails_every_call() {
        let dm = line_table(3);
        let mut inventory = Inventory::new((1..=3).map(|id| Package::new(id, 1)).collect());
        let mut loader = VehicleLoader::new(
            &dm,
            LoaderConfig::default(),
            ScriptedSampler::new(vec![]),
        )
        .expect("valid");

        for vehicle_id in 1..=3 {
            let err = loader
                .load_vehicle(&mut inventory, &Vehicle::new(vehicle_id).with_capacity(2))
                .unwrap_err();
            assert_eq!(
                err,
                LoadError::OversizedCluster {
                    address: 1,
                    packages: 3,
                    capacity: 2
                }
            );
            assert_eq!(inventory.len(), 3);
        }
        assert_eq!(loader.sampler().calls(), 0);
    }

    #[test]
    fn test_oversized_timed_address_fails() {
        let dm = line_table(3);
        let mut inventory = Inventory::new(
            (1..=3)
                .map(|id| Package::new(id, 1).with_deadline(Deadline::Timed))
                .collect(),
        );
        let mut loader = VehicleLoader::new(
            &dm,
            LoaderConfig::default(),
            ScriptedSampler::new(vec![]),
        )
        .expect("valid");

        let err = loader
            .load_vehicle(&mut inventory, &Vehicle::new(1).with_capacity(2))
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::OversizedCluster { address: 1, packages: 3, capacity: 2 }
        ));
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn test_oversized_address_of_other_vehicle_ignored() {
        let dm = line_table(4);
        let mut inventory = Inventory::new(vec![
            Package::new(1, 1).with_constraint(Constraint::VehicleOnly(2)),
            Package::new(2, 1),
            Package::new(3, 1),
            Package::new(4, 3),
        ]);
        let mut loader = VehicleLoader::new(
            &dm,
            LoaderConfig::default(),
            ScriptedSampler::new(vec![]),
        )
        .expect("valid");

        let assignment = loader
            .load_vehicle(&mut inventory, &Vehicle::new(1).with_capacity(2))
            .expect("loaded");
        assert_eq!(assignment.package_ids(), vec![4]);
    }

    #[test]
    fn test_empty_sample_not_committed() {
        let dm = line_table(4);
        let mut inventory = Inventory::new(vec![Package::new(1, 1), Package::new(2, 3)]);
        let config = LoaderConfig::default().with_trials(1);
        let mut loader =
            VehicleLoader::new(&dm, config, ScriptedSampler::new(vec![vec![]])).expect("valid");

        let err = loader
            .load_vehicle(&mut inventory, &Vehicle::new(1))
            .unwrap_err();
        assert_eq!(
            err,
            LoadError::EmptyLoad {
                vehicle: 1,
                available: 2
            }
        );
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_released_packages_join_later_loads() {
        let dm = line_table(6);
        let mut inventory = Inventory::new(vec![
            Package::new(1, 2),
            Package::new(2, 3).with_constraint(Constraint::Delayed),
            Package::new(3, 3),
        ]);
        let mut loader = VehicleLoader::new(
            &dm,
            LoaderConfig::default(),
            ScriptedSampler::new(vec![]),
        )
        .expect("valid");

        let first = loader
            .load_vehicle(&mut inventory, &Vehicle::new(1))
            .expect("loaded");
        assert_eq!(first.package_ids(), vec![1]);

        let released = inventory.release_delayed();
        assert_eq!(released.len(), 2);
        assert!(released
            .iter()
            .all(|u| u.status == PackageStatus::ReadyForPickup));

        let second = loader
            .load_vehicle(&mut inventory, &Vehicle::new(2))
            .expect("loaded");
        let mut ids = second.package_ids();
        ids.sort_unstable();
        assert_eq!(ids, vec![2, 3]);
    }

    proptest! {
        #[test]
        fn prop_fleet_partitions_inventory(
            addresses in prop::collection::vec(1usize..10, 0..30),
            seed in any::<u64>(),
        ) {
            let dm = line_table(10);
            let total = addresses.len();
            let packages: Vec<Package> = addresses
                .iter()
                .enumerate()
                .map(|(id, &a)| Package::new(id, a))
                .collect();
            let mut inventory = Inventory::new(packages);
            let config = LoaderConfig::default().with_trials(3);
            let mut loader = VehicleLoader::new(&dm, config, RandomSampler::seeded(seed))
                .expect("valid");

            let largest = (1..10)
                .map(|a| addresses.iter().filter(|&&x| x == a).count())
                .max()
                .unwrap_or(0);
            if largest > 4 {
                let result = loader.load_vehicle(&mut inventory, &Vehicle::new(1).with_capacity(4));
                let is_oversized = matches!(result, Err(LoadError::OversizedCluster { .. }));
                prop_assert!(is_oversized);
                prop_assert_eq!(inventory.len(), total);
                return Ok(());
            }

            let mut seen = BTreeSet::new();
            let mut vehicle_id = 1;
            while !inventory.is_empty() && vehicle_id <= total {
                let vehicle = Vehicle::new(vehicle_id).with_capacity(4);
                let assignment = loader.load_vehicle(&mut inventory, &vehicle).expect("loaded");
                prop_assert!(assignment.packages().len() <= 4);
                for id in assignment.package_ids() {
                    prop_assert!(seen.insert(id));
                }
                vehicle_id += 1;
            }
            prop_assert!(inventory.is_empty());
            prop_assert_eq!(seen.len(), total);
        }
    }
}
