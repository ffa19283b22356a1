//! Bill of Materials output models.

use serde::{Deserialize, Serialize};

/// One line of a compiled Bill of Materials.
///
/// Entries are ordered for display and export; entries sharing an
/// assembly code are intentionally kept separate so each line stays
/// traceable to the rule that produced it. Callers that need a merged
/// view aggregate by code themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BomEntry {
    pub assembly_code: String,
    pub quantity: u32,
    pub assembly_name: String,
}

impl BomEntry {
    pub fn new(
        assembly_code: impl Into<String>,
        quantity: u32,
        assembly_name: impl Into<String>,
    ) -> Self {
        Self {
            assembly_code: assembly_code.into(),
            quantity,
            assembly_name: assembly_name.into(),
        }
    }
}
