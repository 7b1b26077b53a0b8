//! Delivery route type.

use serde::{Deserialize, Serialize};

/// An ordered delivery route over real address ids.
///
/// The sequence starts at the depot (address 0) and ends there only when
/// the vehicle returns. `edges[i]` is the distance driven to reach
/// `sequence[i + 1]`.
///
/// # Examples
///
/// ```
/// use u_parcel::models::Route;
///
/// let route = Route::new(vec![0, 4, 2, 0], vec![1.5, 2.0, 3.5], 7.0);
/// assert_eq!(route.stops(), &[4, 2, 0]);
/// assert_eq!(route.last_delivery(), Some(2));
/// assert!(route.returns_to_depot());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    sequence: Vec<usize>,
    edges: Vec<f64>,
    cost: f64,
}

impl Route {
    /// Creates a route from a depot-first sequence, its edge distances and
    /// the rounded total.
    pub fn new(sequence: Vec<usize>, edges: Vec<f64>, cost: f64) -> Self {
        Self {
            sequence,
            edges,
            cost,
        }
    }

    /// Full address sequence, leading depot included.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Addresses driven to, without the leading depot.
    pub fn stops(&self) -> &[usize] {
        self.sequence.get(1..).unwrap_or(&[])
    }

    /// Distance of each leg, aligned with [`Route::stops`].
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Total route distance.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns `true` if the route ends back at the depot.
    pub fn returns_to_depot(&self) -> bool {
        self.sequence.len() > 1 && self.sequence.last() == Some(&0)
    }

    /// Last delivery address, ignoring a trailing return to the depot.
    ///
    /// `None` for an empty route.
    pub fn last_delivery(&self) -> Option<usize> {
        let stops = self.stops();
        let deliveries = if self.returns_to_depot() {
            &stops[..stops.len() - 1]
        } else {
            stops
        };
        deliveries.last().copied()
    }
}
