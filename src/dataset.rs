//! Potion dataset loading and name indexing
//!
//! The dataset is a JSON document with a `potions` array. It is loaded
//! once at startup; no computation runs against a missing or malformed
//! dataset.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::models::PotionDefinition;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct PotionDocument {
    potions: Vec<PotionDefinition>,
}

/// All known potion definitions, indexed by name for O(1) lookup.
#[derive(Debug, Default)]
pub struct Dataset {
    potions: IndexMap<String, PotionDefinition>,
}

impl Dataset {
    /// Load and index a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path)?;
        let document: PotionDocument = serde_json::from_str(&content)?;
        log::info!(
            "Loaded {} potion definitions from {}",
            document.potions.len(),
            path.display()
        );
        Ok(Self::from_potions(document.potions))
    }

    /// Index a list of definitions. Duplicate names keep the first
    /// definition, matching first-match lookup in the dataset order.
    pub fn from_potions(potions: Vec<PotionDefinition>) -> Self {
        let mut index = IndexMap::new();
        for potion in potions {
            if index.contains_key(&potion.name) {
                log::warn!("Duplicate potion definition '{}' ignored", potion.name);
                continue;
            }
            index.insert(potion.name.clone(), potion);
        }
        Dataset { potions: index }
    }

    pub fn get(&self, name: &str) -> Option<&PotionDefinition> {
        self.potions.get(name)
    }

    /// All definitions in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &PotionDefinition> {
        self.potions.values()
    }

    pub fn len(&self) -> usize {
        self.potions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.potions.is_empty()
    }
}
