//! Basin specification models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Basin drain/control technology.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BasinType {
    #[serde(rename = "E-Sink")]
    ESink,
    #[serde(rename = "E-Sink DI")]
    ESinkDi,
    #[serde(rename = "E-Drain")]
    EDrain,
}

impl BasinType {
    /// E-Sink and E-Sink DI share electronics; control-box selection
    /// counts them together.
    pub fn is_esink_family(&self) -> bool {
        matches!(self, Self::ESink | Self::ESinkDi)
    }
}

/// Named basin size, or `Custom` with dimensions supplied separately.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BasinSize {
    #[serde(rename = "20X20X8")]
    Size20X20X8,
    #[serde(rename = "24X20X8")]
    Size24X20X8,
    #[serde(rename = "24X20X10")]
    Size24X20X10,
    #[serde(rename = "30X20X8")]
    Size30X20X8,
    #[serde(rename = "30X20X10")]
    Size30X20X10,
    Custom,
}

/// Custom basin dimensions in inches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct BasinDimensions {
    #[validate(range(min = 1, message = "Width must be positive"))]
    pub width: u32,
    #[validate(range(min = 1, message = "Length must be positive"))]
    pub length: u32,
    #[validate(range(min = 1, message = "Depth must be positive"))]
    pub depth: u32,
}

/// One basin within a sink configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BasinSpec {
    #[serde(rename = "type")]
    pub basin_type: BasinType,
    pub size: BasinSize,
    #[validate]
    #[serde(default)]
    pub custom_size: Option<BasinDimensions>,
    #[serde(default)]
    pub has_p_trap: bool,
    #[serde(default)]
    pub has_basin_light: bool,
}
