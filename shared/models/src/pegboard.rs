//! Pegboard option models.

use serde::{Deserialize, Serialize};

/// Pegboard material.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PegboardType {
    #[serde(rename = "Colorsafe+")]
    ColorsafePlus,
    Perforated,
    Solid,
}

/// Pegboard color. Collected by intake; not consumed by BOM selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PegboardColor {
    Green,
    Black,
    Yellow,
    Grey,
    Red,
    Blue,
    Orange,
    White,
}

/// How the pegboard is sized: matched to the sink length band, or
/// custom dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PegboardSize {
    #[serde(rename = "Same as Sink Length")]
    SameAsSinkLength,
    #[serde(rename = "Custom Size")]
    CustomSize,
}
