//! Error type shared by the loading pipeline.

use thiserror::Error;

/// Errors raised while building distance tables or loading a vehicle.
///
/// Deadline violations and short inventories are handled inside the
/// pipeline and never surface here; a caller sees an error only when the
/// inputs are unusable or the retry budget runs out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// A configuration value is out of range.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// A distance table is malformed.
    #[error("invalid distance table at ({row}, {col}): {reason}")]
    InvalidMatrix {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// What is wrong with the entry or the row.
        reason: &'static str,
    },
    /// A package refers to an address outside the distance table.
    #[error("address {address} is outside the distance table of size {size}")]
    UnknownAddress {
        /// Address that could not be resolved.
        address: usize,
        /// Number of addresses in the table.
        size: usize,
    },
    /// A load has more unique stops than the tour search can represent.
    #[error("load has {stops} stops including the depot, at most {max} are supported")]
    TooManyStops {
        /// Stops in the load, depot included.
        stops: usize,
        /// Largest supported stop count.
        max: usize,
    },
    /// Every loaded address holds a grouped package and the load still
    /// exceeds capacity.
    #[error("load of {load} packages cannot be trimmed to capacity {capacity}: only grouped addresses remain")]
    CapacityUnreachable {
        /// Packages in the load when trimming gave up.
        load: usize,
        /// Vehicle capacity.
        capacity: usize,
    },
    /// One address holds more packages than the vehicle carries, so it can
    /// never be delivered without splitting it.
    #[error("address {address} has {packages} packages, more than capacity {capacity}")]
    OversizedCluster {
        /// Address of the cluster.
        address: usize,
        /// Packages at the address.
        packages: usize,
        /// Vehicle capacity.
        capacity: usize,
    },
    /// The load search came back empty while packages were still available.
    #[error("vehicle {vehicle} would depart empty with {available} packages available")]
    EmptyLoad {
        /// Vehicle being loaded.
        vehicle: usize,
        /// Packages left in the attempt's pool.
        available: usize,
    },
    /// The tour search completed no tour.
    #[error("no tour found over {stops} stops")]
    NoTour {
        /// Stops in the load, depot included.
        stops: usize,
    },
    /// Every loading attempt violated the deadline policy.
    #[error("vehicle {vehicle} could not be loaded within {attempts} attempts")]
    RetriesExhausted {
        /// Vehicle being loaded.
        vehicle: usize,
        /// Attempts made.
        attempts: usize,
    },
}
