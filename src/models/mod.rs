//! Domain model types for depot package loading.
//!
//! Packages with their deadline and handling constraints, vehicles with a
//! package capacity, the candidate load assembled for one run, and the
//! routes and assignments the loader commits.

mod assignment;
mod load;
mod package;
mod route;
mod vehicle;

pub use assignment::Assignment;
pub use load::CandidateLoad;
pub use package::{Constraint, Deadline, Package, PackageStatus, StatusUpdate};
pub use route::Route;
pub use vehicle::Vehicle;
