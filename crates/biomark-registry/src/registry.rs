use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::RegistryError;
use crate::table::BIOMARKER_GROUPS;

/// Category used for keys that have no registry entry.
pub const OTHER_CATEGORY: &str = "Other";

/// Display metadata for one canonical biomarker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiomarkerDefinition {
    pub key: String,
    pub label: String,
    pub unit: String,
    pub category: String,
}

/// Flattened, key-indexed view of the built-in biomarker table.
///
/// Built once at startup and passed by reference; never mutated afterwards.
/// Flattening is idempotent and produces exactly one entry per key — a
/// duplicate key across categories is a construction error, since the source
/// table does not guard against it on its own.
#[derive(Debug, Clone)]
pub struct BiomarkerRegistry {
    by_key: BTreeMap<String, BiomarkerDefinition>,
    keys: Vec<String>,
    categories: Vec<String>,
}

impl BiomarkerRegistry {
    /// Build the registry from the built-in grouped table.
    pub fn from_builtin() -> Result<Self, RegistryError> {
        let mut by_key: BTreeMap<String, BiomarkerDefinition> = BTreeMap::new();
        let mut keys = Vec::new();
        let mut categories = Vec::new();

        for (category, markers) in BIOMARKER_GROUPS {
            categories.push((*category).to_string());
            for (key, label, unit) in *markers {
                if let Some(existing) = by_key.get(*key) {
                    return Err(RegistryError::DuplicateKey {
                        key: (*key).to_string(),
                        first_category: existing.category.clone(),
                        second_category: (*category).to_string(),
                    });
                }
                by_key.insert(
                    (*key).to_string(),
                    BiomarkerDefinition {
                        key: (*key).to_string(),
                        label: (*label).to_string(),
                        unit: (*unit).to_string(),
                        category: (*category).to_string(),
                    },
                );
                keys.push((*key).to_string());
            }
        }

        Ok(Self {
            by_key,
            keys,
            categories,
        })
    }

    /// Look up a registered biomarker. `None` for unknown keys — callers fall
    /// back via [`definition_or_fallback`].
    ///
    /// [`definition_or_fallback`]: BiomarkerRegistry::definition_or_fallback
    pub fn lookup(&self, key: &str) -> Option<&BiomarkerDefinition> {
        self.by_key.get(key)
    }

    /// All registered keys, in the grouped table's flattening order. This is
    /// the iteration order of every transform pass.
    pub fn all_keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Category names in fixed display order. Categories not in this
    /// sequence are never appended to grouped displays.
    pub fn categories_in_order(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Registered markers of one category, in table order.
    pub fn markers_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a BiomarkerDefinition> {
        self.keys
            .iter()
            .filter_map(move |key| self.by_key.get(key))
            .filter(move |def| def.category == category)
    }

    /// Display metadata for `key`, falling back to the raw key as label,
    /// empty unit, and the `Other` category when unregistered.
    pub fn definition_or_fallback(&self, key: &str) -> BiomarkerDefinition {
        match self.by_key.get(key) {
            Some(def) => def.clone(),
            None => BiomarkerDefinition {
                key: key.to_string(),
                label: key.to_string(),
                unit: String::new(),
                category: OTHER_CATEGORY.to_string(),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
