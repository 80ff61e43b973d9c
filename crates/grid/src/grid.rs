use tracing::debug;

use stockgrid_catalog::Catalog;
use stockgrid_core::{EngineError, EngineResult, RowId};

use crate::edit::Edit;
use crate::policy::EditRules;
use crate::reconciler::Reconciler;
use crate::row::Row;

/// The row collection the View drives.
///
/// Single-threaded and synchronous: each edit is reconciled to completion
/// before the next is accepted, and rows are replaced whole, so a caller only
/// ever observes a pre-edit or a fully reconciled post-edit row.
#[derive(Debug, Clone)]
pub struct Grid {
    catalog: Catalog,
    rules: EditRules,
    rows: Vec<Row>,
}

impl Grid {
    pub fn new(catalog: Catalog, rules: EditRules) -> Self {
        Self {
            catalog,
            rules,
            rows: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &EditRules {
        &self.rules
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Add a row with an initial consistent state (price and total derived
    /// from the catalog). Fails on a duplicate id.
    pub fn add_row(
        &mut self,
        id: RowId,
        category: impl Into<String>,
        attribute: impl Into<String>,
        quantity: u64,
        editable: bool,
    ) -> EngineResult<&Row> {
        if self.row(id).is_some() {
            return Err(EngineError::conflict(format!("row {id} already exists")));
        }
        let row = Row::new(id, category, attribute, quantity, editable, &self.catalog)?;
        self.rows.push(row);
        let index = self.rows.len() - 1;
        Ok(&self.rows[index])
    }

    /// Remove a row. No special teardown; the row is simply gone.
    pub fn remove_row(&mut self, id: RowId) -> EngineResult<Row> {
        let index = self.index_of(id)?;
        Ok(self.rows.remove(index))
    }

    /// Reconcile a completed cell edit and replace the affected row, leaving
    /// all other rows untouched. Returns the post-edit row.
    pub fn dispatch_edit(&mut self, edit: Edit) -> EngineResult<&Row> {
        let index = self.index_of(edit.row_id)?;
        let reconciler = Reconciler::new(&self.catalog, &self.rules);
        match reconciler.reconcile(&self.rows[index], &edit) {
            Ok(next) => {
                debug!(row_id = %edit.row_id, field = %edit.field, "edit applied");
                self.rows[index] = next;
                Ok(&self.rows[index])
            }
            Err(err) => {
                debug!(row_id = %edit.row_id, field = %edit.field, %err, "edit rejected");
                Err(err)
            }
        }
    }

    /// View query: should the attribute cell of this category render as a
    /// dropdown (true) or plain text (false)?
    pub fn is_attribute_editable(&self, category: &str) -> EngineResult<bool> {
        self.catalog.is_attribute_editable(category)
    }

    fn index_of(&self, id: RowId) -> EngineResult<usize> {
        self.rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or(EngineError::RowNotFound(id))
    }
}
