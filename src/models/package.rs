//! Package, deadline, and constraint types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Delivery deadline class of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Deadline {
    /// Deliver any time before the end of the day.
    #[default]
    EndOfDay,
    /// Deliver before a fixed time of day.
    Timed,
}

/// Special handling rule attached to a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Constraint {
    /// No special handling.
    #[default]
    None,
    /// Must travel on the same vehicle as the rest of its group.
    Group(usize),
    /// May only be loaded onto the given vehicle.
    VehicleOnly(usize),
    /// Not at the depot yet.
    Delayed,
    /// Address is wrong and awaits correction.
    BadAddress,
}

/// Lifecycle status of a package, as reported to the status store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PackageStatus {
    /// Waiting at the depot.
    #[default]
    AtHub,
    /// Held at the depot because it shares an address with a delayed package.
    Unavailable,
    /// Released from hold and available for loading.
    ReadyForPickup,
    /// Loaded onto the given vehicle.
    Loaded {
        /// Vehicle carrying the package.
        vehicle: usize,
    },
    /// Delivered to its address.
    ///
    /// Never set by the loader; the delivery run that drives the vehicles
    /// reports it to the status store.
    Delivered,
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtHub => write!(f, "At hub"),
            Self::Unavailable => write!(f, "Unavailable at hub"),
            Self::ReadyForPickup => write!(f, "Ready for pickup"),
            Self::Loaded { vehicle } => write!(f, "Loaded on vehicle {vehicle}"),
            Self::Delivered => write!(f, "Delivered"),
        }
    }
}

/// A package to be delivered from the depot.
///
/// # Examples
///
/// ```
/// use u_parcel::models::{Constraint, Deadline, Package};
///
/// let p = Package::new(7, 12)
///     .with_deadline(Deadline::Timed)
///     .with_constraint(Constraint::Group(1));
/// assert_eq!(p.id(), 7);
/// assert_eq!(p.address(), 12);
/// assert!(p.is_urgent());
/// assert!(p.is_grouped());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    id: usize,
    address: usize,
    deadline: Deadline,
    constraint: Constraint,
    status: PackageStatus,
}

impl Package {
    /// Creates an end-of-day package with no constraint.
    pub fn new(id: usize, address: usize) -> Self {
        Self {
            id,
            address,
            deadline: Deadline::EndOfDay,
            constraint: Constraint::None,
            status: PackageStatus::AtHub,
        }
    }

    /// Sets the deadline class.
    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the special constraint.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = constraint;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: PackageStatus) -> Self {
        self.status = status;
        self
    }

    /// Package ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Delivery address (index into the distance table).
    pub fn address(&self) -> usize {
        self.address
    }

    /// Deadline class.
    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Special constraint.
    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    /// Current status.
    pub fn status(&self) -> PackageStatus {
        self.status
    }

    /// Returns `true` if the package belongs to a delivery group.
    pub fn is_grouped(&self) -> bool {
        matches!(self.constraint, Constraint::Group(_))
    }

    /// Returns `true` if the package is preloaded ahead of the load search.
    pub fn is_urgent(&self) -> bool {
        self.deadline == Deadline::Timed || self.is_grouped()
    }

    /// Returns `true` if the package may not ride on `vehicle`.
    pub fn excluded_from(&self, vehicle: usize) -> bool {
        matches!(self.constraint, Constraint::VehicleOnly(v) if v != vehicle)
    }

    pub(crate) fn set_status(&mut self, status: PackageStatus) {
        self.status = status;
    }

    pub(crate) fn set_address(&mut self, address: usize) {
        self.address = address;
    }
}

/// A status change for the external package-status store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// Package whose status changed.
    pub package_id: usize,
    /// New status.
    pub status: PackageStatus,
}
