//! Strongly-typed row identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Identifier of a grid row.
///
/// Unique within one grid, immutable after row creation. Plain integer payload;
/// the View assigns ids and the engine never generates them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(u64);

impl RowId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for RowId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for RowId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<RowId> for u64 {
    fn from(value: RowId) -> Self {
        value.0
    }
}

impl FromStr for RowId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = u64::from_str(s).map_err(|e| EngineError::invalid_id(format!("RowId: {e}")))?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_id_round_trips_through_str() {
        let id: RowId = "42".parse().unwrap();
        assert_eq!(id, RowId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn row_id_rejects_non_numeric() {
        let err = "abc".parse::<RowId>().unwrap_err();
        match err {
            EngineError::InvalidId(_) => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }
}
