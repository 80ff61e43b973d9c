//! Catalog: immutable category → priced-options lookup.
//!
//! This crate contains the leaf component of the engine, implemented purely as
//! deterministic lookup logic (no IO, no HTTP, no storage). The catalog is
//! constructed once at startup and read-only thereafter.

pub mod catalog;

pub use catalog::{Catalog, CatalogBuilder, CatalogEntry};
