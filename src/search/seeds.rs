//! Randomized-restart load search.
//!
//! # Algorithm
//!
//! Starting from the preloaded staging state, each trial tops the load up
//! with a random sample of the pool, pulls in same-address packages, trims
//! back to capacity, and prices the load with the fast tour search. The
//! cheapest trial wins; ties keep the earlier trial. The search stops early
//! once a trial leaves the pool empty, since every later trial would draw
//! the same packages.

use crate::config::LoaderConfig;
use crate::distance::DistanceMatrix;
use crate::error::LoadError;
use crate::filter::{expand_by_address, trim_to_capacity, Staging};
use crate::models::Vehicle;
use crate::tour::{shortest_cost, TourProblem};

use super::PackageSampler;

/// Fills the load with the cheapest-to-deliver sample found in
/// `config.trials()` trials.
///
/// A load already at capacity is returned unchanged.
///
/// # Examples
///
/// ```
/// use u_parcel::distance::DistanceMatrix;
/// use u_parcel::filter::Staging;
/// use u_parcel::models::{Package, Vehicle};
/// use u_parcel::search::{search_load, RandomSampler};
/// use u_parcel::LoaderConfig;
///
/// let dm = DistanceMatrix::from_lower_triangle(&[
///     vec![0.0],
///     vec![1.0, 0.0],
///     vec![2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let staging = Staging::new(vec![Package::new(1, 1), Package::new(2, 2)]);
/// let vehicle = Vehicle::new(1).with_capacity(4);
/// let mut sampler = RandomSampler::seeded(3);
///
/// let best = search_load(staging, &dm, &vehicle, &LoaderConfig::default(), &mut sampler).unwrap();
/// assert_eq!(best.load().len(), 2);
/// assert!(best.pool().is_empty());
/// ```
pub fn search_load<S>(
    staging: Staging,
    distances: &DistanceMatrix,
    vehicle: &Vehicle,
    config: &LoaderConfig,
    sampler: &mut S,
) -> Result<Staging, LoadError>
where
    S: PackageSampler + ?Sized,
{
    let capacity = vehicle.capacity();
    if staging.load().len() >= capacity {
        return Ok(staging);
    }

    let mut best: Option<(f64, Staging)> = None;
    for trial in 1..=config.trials() {
        let mut candidate = staging.clone();
        let room = capacity - candidate.load().len();
        let amount = room.min(candidate.pool().len());
        let picks: Vec<usize> = sampler
            .sample(candidate.pool().len(), amount)
            .into_iter()
            .filter_map(|i| candidate.pool().get(i).map(|p| p.id()))
            .collect();
        for id in picks {
            candidate.load_package(id);
        }
        expand_by_address(&mut candidate);
        trim_to_capacity(&mut candidate, capacity, false)?;

        let problem = TourProblem::new(&candidate.load().addresses(), distances)?;
        let cost = shortest_cost(&problem, vehicle.returns_to_depot(), config.precision());
        let exhausted = candidate.pool().is_empty();

        let record = best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost);
        if record {
            log::info!(
                "vehicle {} trial {trial}/{}: new best {cost} with packages {:?}",
                vehicle.id(),
                config.trials(),
                candidate.load().ids()
            );
            best = Some((cost, candidate));
        } else {
            log::debug!(
                "vehicle {} trial {trial}/{}: {cost}",
                vehicle.id(),
                config.trials()
            );
        }
        if exhausted {
            break;
        }
    }

    Ok(best.map(|(_, s)| s).unwrap_or(staging))
}
