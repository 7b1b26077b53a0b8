//! # u-parcel
//!
//! Depot package loading and exact delivery routing for a small fleet.
//! Each vehicle departure picks a capacity-bounded load that honors
//! delivery constraints, searches random load samples for a cheap one, and
//! routes it with a branch-and-bound shortest tour.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Package, Vehicle, CandidateLoad, Route, Assignment)
//! - [`distance`] — Symmetric distance table between addresses
//! - [`inventory`] — Packages at the depot, with held packages and releases
//! - [`filter`] — Eligibility rules and capacity trimming for a candidate load
//! - [`tour`] — Exact shortest tour by branch-and-bound
//! - [`search`] — Randomized-restart load search
//! - [`dispatch`] — Bounded-retry vehicle loading with deadline validation
//! - [`config`] — Loader configuration
//! - [`error`] — Error type
//!
//! ## Example
//!
//! ```
//! use u_parcel::dispatch::VehicleLoader;
//! use u_parcel::distance::DistanceMatrix;
//! use u_parcel::inventory::Inventory;
//! use u_parcel::models::{Deadline, Package, Vehicle};
//! use u_parcel::search::RandomSampler;
//! use u_parcel::LoaderConfig;
//!
//! let dm = DistanceMatrix::from_lower_triangle(&[
//!     vec![0.0],
//!     vec![3.0, 0.0],
//!     vec![4.0, 5.0, 0.0],
//! ])
//! .unwrap();
//! let mut inventory = Inventory::new(vec![
//!     Package::new(1, 1).with_deadline(Deadline::Timed),
//!     Package::new(2, 2),
//! ]);
//! let mut loader =
//!     VehicleLoader::new(&dm, LoaderConfig::default(), RandomSampler::seeded(7)).unwrap();
//!
//! let assignment = loader.load_vehicle(&mut inventory, &Vehicle::new(1)).unwrap();
//! assert_eq!(assignment.cost(), 12.0);
//! assert!(inventory.is_empty());
//! ```

pub mod config;
pub mod dispatch;
pub mod distance;
pub mod error;
pub mod filter;
pub mod inventory;
pub mod models;
pub mod search;
pub mod tour;

#[cfg(test)]
mod test_support;

pub use config::LoaderConfig;
pub use error::LoadError;
