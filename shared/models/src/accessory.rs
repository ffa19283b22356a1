//! Accessory line models.
//!
//! Accessories are selected from the catalog by assembly code and pass
//! through BOM compilation unchanged.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// One accessory line: an assembly code picked from the catalog and a
/// quantity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryLine {
    #[validate(custom = "validate_assembly_code")]
    pub assembly_code: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

impl AccessoryLine {
    pub fn new(assembly_code: impl Into<String>, quantity: u32) -> Self {
        Self {
            assembly_code: assembly_code.into(),
            quantity,
        }
    }
}

fn validate_assembly_code(code: &str) -> Result<(), ValidationError> {
    if !is_valid_assembly_code(code) {
        return Err(ValidationError::new("invalid_assembly_code"));
    }
    Ok(())
}

/// Assembly codes are dot-separated numeric segments, e.g. `706.58` or
/// `720.215.001`.
pub fn is_valid_assembly_code(code: &str) -> bool {
    let segments: Vec<&str> = code.split('.').collect();
    if segments.len() < 2 {
        return false;
    }
    segments
        .iter()
        .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
}
