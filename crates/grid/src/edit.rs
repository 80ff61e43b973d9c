use serde::{Deserialize, Serialize};

use stockgrid_core::{EngineError, EngineResult, RowId};

/// A row field, as named by the View's column definitions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Id,
    Category,
    Attribute,
    Price,
    Quantity,
    Total,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Category => "category",
            Field::Attribute => "attribute",
            Field::Price => "price",
            Field::Quantity => "quantity",
            Field::Total => "total",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Cell value as handed over by the View: plain text or a number.
///
/// Attribute labels may look numeric (the year-based deployments), so a
/// number is always convertible to a label; quantity input may arrive as
/// text, so a label is parseable as a quantity when it is in fact numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditValue {
    Number(i64),
    Text(String),
}

impl EditValue {
    /// The value rendered as an option label.
    pub fn as_label(&self) -> String {
        match self {
            EditValue::Number(n) => n.to_string(),
            EditValue::Text(s) => s.clone(),
        }
    }

    /// The value interpreted as a non-negative integer quantity.
    pub fn as_quantity(&self) -> EngineResult<u64> {
        match self {
            EditValue::Number(n) => u64::try_from(*n)
                .map_err(|_| EngineError::invalid_quantity(format!("{n} is negative"))),
            EditValue::Text(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| EngineError::invalid_quantity(format!("{s:?} is not a non-negative integer"))),
        }
    }
}

impl From<&str> for EditValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for EditValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for EditValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// A completed single-cell edit reported by the View. Transient input value,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub row_id: RowId,
    pub field: Field,
    pub value: EditValue,
}

impl Edit {
    pub fn new(row_id: RowId, field: Field, value: impl Into<EditValue>) -> Self {
        Self {
            row_id,
            field,
            value: value.into(),
        }
    }

    pub fn set_quantity(row_id: RowId, quantity: i64) -> Self {
        Self::new(row_id, Field::Quantity, quantity)
    }

    pub fn set_attribute(row_id: RowId, label: impl Into<EditValue>) -> Self {
        Self::new(row_id, Field::Attribute, label)
    }

    pub fn set_category(row_id: RowId, name: impl Into<EditValue>) -> Self {
        Self::new(row_id, Field::Category, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_render_as_labels() {
        assert_eq!(EditValue::Number(2024).as_label(), "2024");
        assert_eq!(EditValue::from("Laptop").as_label(), "Laptop");
    }

    #[test]
    fn quantity_accepts_numbers_and_numeric_text() {
        assert_eq!(EditValue::Number(3).as_quantity().unwrap(), 3);
        assert_eq!(EditValue::from(" 12 ").as_quantity().unwrap(), 12);
        assert_eq!(EditValue::Number(0).as_quantity().unwrap(), 0);
    }

    #[test]
    fn quantity_rejects_negative_input() {
        let err = EditValue::Number(-1).as_quantity().unwrap_err();
        match err {
            EngineError::InvalidQuantity(_) => {}
            other => panic!("expected InvalidQuantity, got {other:?}"),
        }
        let err = EditValue::from("-4").as_quantity().unwrap_err();
        match err {
            EngineError::InvalidQuantity(_) => {}
            other => panic!("expected InvalidQuantity, got {other:?}"),
        }
    }

    #[test]
    fn quantity_rejects_non_numeric_text() {
        for input in ["abc", "", "3.5", "1e3"] {
            let err = EditValue::from(input).as_quantity().unwrap_err();
            match err {
                EngineError::InvalidQuantity(_) => {}
                other => panic!("expected InvalidQuantity for {input:?}, got {other:?}"),
            }
        }
    }
}
