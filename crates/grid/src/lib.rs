//! Row reconciliation engine for the inventory grid.
//!
//! This crate contains the business rules that keep a row's dependent fields
//! (attribute, price, total) consistent after any single-field edit,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). The View owns rendering and cell editors; it drives this engine
//! through [`Grid::dispatch_edit`] and re-renders only the affected row.

pub mod edit;
pub mod grid;
pub mod policy;
pub mod reconciler;
pub mod row;

pub use edit::{Edit, EditValue, Field};
pub use grid::Grid;
pub use policy::EditRules;
pub use reconciler::Reconciler;
pub use row::Row;
