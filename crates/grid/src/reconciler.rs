use stockgrid_catalog::Catalog;
use stockgrid_core::{EngineError, EngineResult};

use crate::edit::{Edit, Field};
use crate::policy::EditRules;
use crate::row::{derived_total, Row};

/// Pure transition function on one row: `(row, edit) -> next row`.
///
/// Never mutates its input and retains no state of its own; a failed call has
/// no effect. All dependent fields of an edit update together or not at all,
/// so a returned row always satisfies the row invariants.
#[derive(Debug, Copy, Clone)]
pub struct Reconciler<'c> {
    catalog: &'c Catalog,
    rules: &'c EditRules,
}

impl<'c> Reconciler<'c> {
    pub fn new(catalog: &'c Catalog, rules: &'c EditRules) -> Self {
        Self { catalog, rules }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Apply one single-field edit, recomputing the dependent fields from the
    /// catalog as source of truth.
    pub fn reconcile(&self, row: &Row, edit: &Edit) -> EngineResult<Row> {
        if edit.row_id != row.id() {
            return Err(EngineError::RowNotFound(edit.row_id));
        }

        match edit.field {
            Field::Quantity => self.apply_quantity(row, edit),
            Field::Attribute => self.apply_attribute(row, edit),
            Field::Category => self.apply_category(row, edit),
            Field::Id | Field::Price | Field::Total => {
                Err(EngineError::immutable_field(edit.field.name()))
            }
        }
    }

    /// Quantity is the one edit unconditionally permitted on any row.
    fn apply_quantity(&self, row: &Row, edit: &Edit) -> EngineResult<Row> {
        let quantity = edit.value.as_quantity()?;
        let mut next = row.clone();
        next.quantity = quantity;
        next.total = derived_total(next.price, quantity)?;
        Ok(next)
    }

    fn apply_attribute(&self, row: &Row, edit: &Edit) -> EngineResult<Row> {
        if !self.rules.allows(Field::Attribute)
            || !self.catalog.is_attribute_editable(row.category())?
        {
            return Err(EngineError::attribute_not_editable(row.category()));
        }
        let label = edit.value.as_label();
        let price = self.catalog.price_of(row.category(), &label)?;
        let mut next = row.clone();
        next.attribute = label;
        next.price = price;
        next.total = derived_total(price, next.quantity)?;
        Ok(next)
    }

    fn apply_category(&self, row: &Row, edit: &Edit) -> EngineResult<Row> {
        if !self.rules.allows(Field::Category) || !row.is_editable() {
            return Err(EngineError::CategoryNotEditable);
        }
        let name = edit.value.as_label();
        // Validate the new category before touching any dependent field. The
        // prior attribute may not exist there, so the attribute resets to the
        // first option in catalog order (deterministic, never value-based).
        let default = self.catalog.first_entry(&name)?.clone();
        let mut next = row.clone();
        next.category = name;
        next.attribute = default.label;
        next.price = default.price;
        next.total = derived_total(next.price, next.quantity)?;
        Ok(next)
    }
}
