//! Assembly catalog snapshot.
//!
//! Read-only lookup from assembly code to display name and ordering
//! metadata. Loaded once per batch of compilations; per-entry lookup
//! misses fall back to a synthesized name and never abort BOM
//! generation, while a failed load is fatal and surfaced to the caller.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use crate::error::{SteriflowError, SteriflowResult};
use crate::validation::validate_assembly_code;

/// Catalog metadata for one assembly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssemblyRecord {
    pub name: String,
    #[serde(rename = "type", default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_kit: bool,
    #[serde(default = "default_can_order")]
    pub can_order: bool,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_can_order() -> bool {
    true
}

fn default_status() -> String {
    "ACTIVE".to_string()
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    assemblies: HashMap<String, AssemblyRecord>,
}

/// Immutable snapshot of the assembly catalog.
#[derive(Debug, Clone)]
pub struct AssemblyCatalog {
    assemblies: HashMap<String, AssemblyRecord>,
}

impl AssemblyCatalog {
    /// Load a catalog snapshot from a JSON document of the form
    /// `{ "assemblies": { "<code>": { "name": ..., ... } } }`.
    pub fn load(path: impl AsRef<Path>) -> SteriflowResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SteriflowError::catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let document: CatalogDocument = serde_json::from_str(&raw).map_err(|e| {
            SteriflowError::catalog(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        for code in document.assemblies.keys() {
            if validate_assembly_code(code).is_err() {
                warn!(code = %code, "Catalog entry has unexpected assembly code format");
            }
        }

        Ok(Self {
            assemblies: document.assemblies,
        })
    }

    /// Build a catalog from in-memory entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, AssemblyRecord)>) -> Self {
        Self {
            assemblies: entries.into_iter().collect(),
        }
    }

    /// An empty catalog; every lookup falls back to a synthesized name.
    pub fn empty() -> Self {
        Self {
            assemblies: HashMap::new(),
        }
    }

    pub fn get(&self, code: &str) -> Option<&AssemblyRecord> {
        self.assemblies.get(code)
    }

    /// Display name for an assembly code. Unknown codes get the
    /// deterministic fallback `Assembly <code>` so that early
    /// configurations compile before the catalog is fully synced.
    pub fn name_for(&self, code: &str) -> String {
        self.assemblies
            .get(code)
            .map(|record| record.name.clone())
            .unwrap_or_else(|| format!("Assembly {}", code))
    }

    pub fn len(&self) -> usize {
        self.assemblies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assemblies.is_empty()
    }
}
