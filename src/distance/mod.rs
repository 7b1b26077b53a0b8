//! Distance tables between delivery addresses.
//!
//! Provides the dense, depot-indexed distance matrix shared by every
//! loading run, and the reduced sub-tables the tour search works on.

mod matrix;

pub use matrix::DistanceMatrix;
