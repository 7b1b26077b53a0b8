//! Reduced tour problem over one load's addresses.

use std::collections::BTreeSet;

use crate::distance::DistanceMatrix;
use crate::error::LoadError;
use crate::models::Route;

/// Largest number of stops, depot included, a tour search can handle.
///
/// The visited set is a `u64` bitmask.
pub const MAX_STOPS: usize = 64;

/// A tour found by the branch-and-bound search, in reduced indices.
///
/// Index 0 is the depot; index `i` stands for `TourProblem::addresses()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub(crate) sequence: Vec<usize>,
    pub(crate) edges: Vec<f64>,
    pub(crate) cost: f64,
}

impl Tour {
    /// Visiting order, starting at the depot.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Distance of each leg, aligned with `sequence()[1..]`.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Rounded total distance.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// The unique addresses of a load, with the distance table restricted to them.
///
/// # Examples
///
/// ```
/// use u_parcel::distance::DistanceMatrix;
/// use u_parcel::tour::TourProblem;
///
/// let dm = DistanceMatrix::from_lower_triangle(&[
///     vec![0.0],
///     vec![7.0, 0.0],
///     vec![1.0, 10.4, 0.0],
///     vec![5.2, 4.7, 3.1, 0.0],
/// ])
/// .unwrap();
/// let problem = TourProblem::new(&[3, 2, 3], &dm).unwrap();
/// assert_eq!(problem.addresses(), &[0, 2, 3]);
/// assert_eq!(problem.distances().get(1, 2), 3.1);
/// ```
#[derive(Debug, Clone)]
pub struct TourProblem {
    addresses: Vec<usize>,
    distances: DistanceMatrix,
}

impl TourProblem {
    /// Builds the reduced problem for the given delivery addresses.
    ///
    /// Duplicates are merged and the depot is added as index 0.
    pub fn new(addresses: &[usize], distances: &DistanceMatrix) -> Result<Self, LoadError> {
        let mut unique: BTreeSet<usize> = addresses.iter().copied().collect();
        unique.insert(0);
        let addresses: Vec<usize> = unique.into_iter().collect();
        if addresses.len() > MAX_STOPS {
            return Err(LoadError::TooManyStops {
                stops: addresses.len(),
                max: MAX_STOPS,
            });
        }
        let distances = distances.submatrix(&addresses)?;
        Ok(Self {
            addresses,
            distances,
        })
    }

    /// Real address ids, sorted, depot first.
    pub fn addresses(&self) -> &[usize] {
        &self.addresses
    }

    /// Distance table restricted to [`TourProblem::addresses`].
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of stops, depot included.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Returns `true` if the only stop is the depot.
    pub fn is_empty(&self) -> bool {
        self.addresses.len() <= 1
    }

    /// Translates a tour back to real address ids.
    pub fn route(&self, tour: &Tour) -> Route {
        let sequence = tour
            .sequence
            .iter()
            .map(|&i| self.addresses[i])
            .collect();
        Route::new(sequence, tour.edges.clone(), tour.cost)
    }
}

/// Rounds `value` to `precision` decimal places.
pub(crate) fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}
