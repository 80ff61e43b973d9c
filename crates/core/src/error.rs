//! Engine error model.

use thiserror::Error;

use crate::id::RowId;

/// Result type used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-level error.
///
/// Every failure here is deterministic, synchronous and recoverable: a
/// rejected edit leaves the prior row state completely untouched. The engine
/// performs no IO, so there is no partial-failure or retry scenario.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A category name has no entry in the catalog.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// An attribute label does not exist within the category's options.
    #[error("unknown attribute {attribute:?} in category {category:?}")]
    UnknownAttribute { category: String, attribute: String },

    /// Attribute edits are rejected by policy (e.g. single-option category).
    #[error("attribute is not editable in category {0:?}")]
    AttributeNotEditable(String),

    /// Category edits are rejected by policy (locked row or variant rules).
    #[error("category is not editable for this row")]
    CategoryNotEditable,

    /// Quantity input was non-numeric, negative, or out of range.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// The field can never be edited directly (id, price, total).
    #[error("field {0:?} cannot be edited directly")]
    ImmutableField(String),

    /// No row with the given id exists in the grid.
    #[error("row not found: {0}")]
    RowNotFound(RowId),

    /// A value failed construction-time validation (catalog or row setup).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A conflict occurred (e.g. duplicate row id).
    #[error("conflict: {0}")]
    Conflict(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl EngineError {
    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory(name.into())
    }

    pub fn unknown_attribute(category: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            category: category.into(),
            attribute: attribute.into(),
        }
    }

    pub fn attribute_not_editable(category: impl Into<String>) -> Self {
        Self::AttributeNotEditable(category.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn immutable_field(field: impl Into<String>) -> Self {
        Self::ImmutableField(field.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
