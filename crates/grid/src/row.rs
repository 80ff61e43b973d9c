use serde::{Deserialize, Serialize};

use stockgrid_catalog::Catalog;
use stockgrid_core::{EngineError, EngineResult, RowId};

/// One editable record of the inventory grid.
///
/// A row is consistent from birth: construction validates category and
/// attribute against the catalog and derives price and total, and every
/// later change goes through the reconciler one field at a time. After each
/// reconciliation:
/// 1. `attribute` labels an option of `category`;
/// 2. `price` equals that option's catalog price;
/// 3. `total` equals `price * quantity` exactly.
///
/// `editable` is the row's editability class: whether category edits are
/// permitted on it. It replaces hardcoded identity checks ("only row 1") with
/// an explicit per-row capability flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub(crate) id: RowId,
    pub(crate) category: String,
    pub(crate) attribute: String,
    pub(crate) price: u64,
    pub(crate) quantity: u64,
    pub(crate) total: u64,
    pub(crate) editable: bool,
}

impl Row {
    /// Create a consistent row: category and attribute are validated against
    /// the catalog, price and total are derived.
    pub fn new(
        id: RowId,
        category: impl Into<String>,
        attribute: impl Into<String>,
        quantity: u64,
        editable: bool,
        catalog: &Catalog,
    ) -> EngineResult<Self> {
        let category = category.into();
        let attribute = attribute.into();
        let price = catalog.price_of(&category, &attribute)?;
        Ok(Self {
            id,
            total: derived_total(price, quantity)?,
            category,
            attribute,
            price,
            quantity,
            editable,
        })
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether category edits are permitted on this row.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Check the row invariants against a catalog. Reconciliation guarantees
    /// this holds; exposed for callers that assert it (tests, debug paths).
    pub fn is_consistent(&self, catalog: &Catalog) -> bool {
        catalog.price_of(&self.category, &self.attribute) == Ok(self.price)
            && self.price.checked_mul(self.quantity) == Some(self.total)
    }
}

/// `price * quantity` with overflow surfaced instead of wrapped.
pub(crate) fn derived_total(price: u64, quantity: u64) -> EngineResult<u64> {
    price.checked_mul(quantity).ok_or_else(|| {
        EngineError::invalid_quantity(format!("{quantity} overflows the total at unit price {price}"))
    })
}
