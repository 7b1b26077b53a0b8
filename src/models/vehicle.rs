//! Vehicle descriptor.

use serde::{Deserialize, Serialize};

/// A delivery vehicle departing from the depot.
///
/// # Examples
///
/// ```
/// use u_parcel::models::Vehicle;
///
/// let v = Vehicle::new(1);
/// assert_eq!(v.capacity(), 16);
/// assert!(v.returns_to_depot());
///
/// let last = Vehicle::new(2).with_capacity(8).with_last_trip(true);
/// assert_eq!(last.capacity(), 8);
/// assert!(!last.returns_to_depot());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    capacity: usize,
    last_trip: bool,
}

impl Vehicle {
    /// Packages a vehicle carries unless configured otherwise.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates a vehicle with the default capacity that returns to the depot.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            capacity: Self::DEFAULT_CAPACITY,
            last_trip: false,
        }
    }

    /// Sets the package capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Marks whether this run is the vehicle's final one.
    pub fn with_last_trip(mut self, last_trip: bool) -> Self {
        self.last_trip = last_trip;
        self
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum number of packages per run.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if this is the vehicle's final run.
    pub fn is_last_trip(&self) -> bool {
        self.last_trip
    }

    /// Returns `true` if the route ends back at the depot.
    pub fn returns_to_depot(&self) -> bool {
        !self.last_trip
    }
}
