use serde::{Deserialize, Serialize};

use stockgrid_core::{EngineError, EngineResult};

/// One selectable option within a category: display label plus fixed unit
/// price (smallest currency unit, e.g. cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub label: String,
    pub price: u64,
}

impl CatalogEntry {
    pub fn new(label: impl Into<String>, price: u64) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

/// One category and its ordered option sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CategoryOptions {
    name: String,
    entries: Vec<CatalogEntry>,
}

/// Immutable lookup table mapping a category to its ordered set of priced
/// options.
///
/// Constructed once at startup (builder or JSON document), never mutated at
/// runtime. Category order and option order are both preserved as given;
/// option order is significant — a category change resets the dependent
/// attribute to the *first* option.
///
/// Every lookup miss surfaces as a typed error; there is no silent
/// default-to-empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<CategoryOptions>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder {
            categories: Vec::new(),
        }
    }

    /// Load a catalog from a JSON document of the form
    /// `[{"name": "...", "entries": [{"label": "...", "price": 0}]}]`.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let categories: Vec<CategoryOptions> = serde_json::from_str(json)
            .map_err(|e| EngineError::validation(format!("catalog JSON: {e}")))?;
        Self::from_categories(categories)
    }

    fn from_categories(categories: Vec<CategoryOptions>) -> EngineResult<Self> {
        if categories.is_empty() {
            return Err(EngineError::validation("catalog must have at least one category"));
        }
        for (i, category) in categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(EngineError::validation("category name cannot be empty"));
            }
            if categories[..i].iter().any(|c| c.name == category.name) {
                return Err(EngineError::validation(format!(
                    "duplicate category: {}",
                    category.name
                )));
            }
            if category.entries.is_empty() {
                return Err(EngineError::validation(format!(
                    "category {} has no options",
                    category.name
                )));
            }
            for (j, entry) in category.entries.iter().enumerate() {
                if entry.label.trim().is_empty() {
                    return Err(EngineError::validation(format!(
                        "category {} has an option with an empty label",
                        category.name
                    )));
                }
                if category.entries[..j].iter().any(|e| e.label == entry.label) {
                    return Err(EngineError::validation(format!(
                        "duplicate label {} in category {}",
                        entry.label, category.name
                    )));
                }
            }
        }
        Ok(Self { categories })
    }

    fn category(&self, name: &str) -> EngineResult<&CategoryOptions> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| EngineError::unknown_category(name))
    }

    /// Ordered option sequence of a category.
    pub fn options_for(&self, category: &str) -> EngineResult<&[CatalogEntry]> {
        Ok(&self.category(category)?.entries)
    }

    /// Fixed unit price of the option labelled `attribute` within `category`.
    pub fn price_of(&self, category: &str, attribute: &str) -> EngineResult<u64> {
        let options = self.options_for(category)?;
        options
            .iter()
            .find(|e| e.label == attribute)
            .map(|e| e.price)
            .ok_or_else(|| EngineError::unknown_attribute(category, attribute))
    }

    /// First option of a category, the deterministic default whenever a
    /// category change forces a new attribute choice.
    pub fn first_entry(&self, category: &str) -> EngineResult<&CatalogEntry> {
        // Non-empty option sequences are a construction invariant.
        Ok(&self.options_for(category)?[0])
    }

    /// Whether the attribute field is meaningfully selectable for a category.
    ///
    /// A category with exactly one option is display-only for the attribute
    /// field; edits to it are rejected by policy, not by catalog absence.
    pub fn is_attribute_editable(&self, category: &str) -> EngineResult<bool> {
        Ok(self.options_for(category)?.len() > 1)
    }

    /// Whether `attribute` labels an option of `category`.
    pub fn contains(&self, category: &str, attribute: &str) -> bool {
        self.price_of(category, attribute).is_ok()
    }

    /// Category names in insertion order (the View's category dropdown).
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

/// Builder for [`Catalog`]; validation happens in [`CatalogBuilder::build`].
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    categories: Vec<CategoryOptions>,
}

impl CatalogBuilder {
    /// Add a category with its ordered `(label, price)` options.
    pub fn category<L, I>(mut self, name: impl Into<String>, options: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, u64)>,
    {
        self.categories.push(CategoryOptions {
            name: name.into(),
            entries: options
                .into_iter()
                .map(|(label, price)| CatalogEntry::new(label, price))
                .collect(),
        });
        self
    }

    pub fn build(self) -> EngineResult<Catalog> {
        Catalog::from_categories(self.categories)
    }
}
