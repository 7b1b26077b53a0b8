//! Vehicle dispatch: load selection, routing and commit.
//!
//! - [`VehicleLoader`] — Bounded-retry loading of one vehicle from the inventory
//! - [`deadline_violation`] — Rejects open routes that end at an urgent address
//! - [`commit`] — Moves a chosen load out of the inventory onto the vehicle

mod loader;
mod validator;

pub use loader::VehicleLoader;
pub use validator::{commit, deadline_violation};
