use serde::{Deserialize, Serialize};

use crate::edit::Field;

/// Declarative edit rules: which fields accept edits in this deployment.
///
/// The observed deployment variants differ only in configuration, not in
/// engine behavior: the earliest variant lets the category itself be edited,
/// later ones make category read-only and keep only the dependent attribute
/// and the quantity editable. One rules value per grid serves all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRules {
    editable: Vec<Field>,
}

impl EditRules {
    /// Category, attribute and quantity all editable (the earliest variant).
    pub fn all_fields() -> Self {
        Self {
            editable: vec![Field::Category, Field::Attribute, Field::Quantity],
        }
    }

    /// Category read-only; attribute and quantity editable (later variants).
    pub fn locked_category() -> Self {
        Self {
            editable: vec![Field::Attribute, Field::Quantity],
        }
    }

    pub fn allows(&self, field: Field) -> bool {
        self.editable.contains(&field)
    }

    /// The dependent fields recomputed as a side effect of editing `field`,
    /// in recomputation order. The View uses this to know which cells to
    /// repaint besides the edited one.
    pub fn cascade(field: Field) -> &'static [Field] {
        match field {
            Field::Category => &[Field::Attribute, Field::Price, Field::Total],
            Field::Attribute => &[Field::Price, Field::Total],
            Field::Quantity => &[Field::Total],
            Field::Id | Field::Price | Field::Total => &[],
        }
    }
}

impl Default for EditRules {
    fn default() -> Self {
        Self::all_fields()
    }
}
