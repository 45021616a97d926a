//! Adapters that serve recorded data instead of a live system.

pub mod catalog;

pub use catalog::SnapshotCatalog;
