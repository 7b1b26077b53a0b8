//! Depot inventory.
//!
//! Tracks the packages available for loading and the ones held back by a
//! flight delay or a bad address, with the events that release them.

mod warehouse;

pub use warehouse::Inventory;
