//! Sink configuration domain models for the SteriFlow order system.
//!
//! This module defines the root configuration collected by the intake
//! workflow for one sink unit: structural selections (body, legs, feet),
//! the optional pegboard cluster, and the per-unit basin, faucet and
//! accessory lists.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::accessory::AccessoryLine;
use crate::basin::BasinSpec;
use crate::faucet::FaucetSpec;
use crate::pegboard::{PegboardColor, PegboardSize, PegboardType};

/// Product family of the configured sink. Only `MDRD` carries
/// family-specific mandatory components in the BOM.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SinkFamily {
    #[serde(rename = "MDRD")]
    Mdrd,
    Endoscope,
    InstroSink,
}

/// Sink model, fixing how many basins the unit is built for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SinkModel {
    #[serde(rename = "T2-B1")]
    SingleBasin,
    #[serde(rename = "T2-B2")]
    DualBasin,
    #[serde(rename = "T2-B3")]
    TripleBasin,
}

impl SinkModel {
    /// Number of basins this model is built for. The intake layer is
    /// responsible for keeping `basins.len()` consistent with this.
    pub fn basin_count(&self) -> usize {
        match self {
            Self::SingleBasin => 1,
            Self::DualBasin => 2,
            Self::TripleBasin => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LegType {
    #[serde(rename = "DL27")]
    Dl27,
    #[serde(rename = "DL14")]
    Dl14,
    #[serde(rename = "LC1")]
    Lc1,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LegHeightType {
    #[serde(rename = "Height Adjustable")]
    HeightAdjustable,
    #[serde(rename = "Fixed Height")]
    FixedHeight,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FeetType {
    #[serde(rename = "Lock & Leveling Casters")]
    LockLevelingCasters,
    #[serde(rename = "S.S Adjustable Seismic Feet")]
    SsAdjustableSeismicFeet,
}

/// Direction of workflow across the sink, as seen by the operator.
/// Collected by intake for drawings; not consumed by BOM selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WorkflowDirection {
    #[serde(rename = "Left to Right")]
    LeftToRight,
    #[serde(rename = "Right to Left")]
    RightToLeft,
}

/// Complete configuration for one sink unit within an order.
///
/// The configuration is immutable for the duration of BOM compilation;
/// the compiler only borrows it. Field consistency (basin count vs model,
/// pegboard sub-fields only when `has_pegboard`) is owned by the intake
/// validation layer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SinkConfiguration {
    /// Opaque identifier, unique per sink unit within an order.
    #[validate(length(min = 1, message = "Build number is required"))]
    pub build_number: String,
    pub sink_family: SinkFamily,
    pub sink_model: SinkModel,
    /// Outer width in inches.
    #[validate(range(min = 1, message = "Width is required"))]
    pub sink_width: u32,
    /// Outer length in inches; drives body and pegboard size selection.
    #[validate(range(min = 1, message = "Length is required"))]
    pub sink_length: u32,
    pub leg_type: LegType,
    pub leg_height_type: LegHeightType,
    pub feet_type: FeetType,
    pub workflow_direction: WorkflowDirection,
    pub has_pegboard: bool,
    #[serde(default)]
    pub pegboard_type: Option<PegboardType>,
    #[serde(default)]
    pub pegboard_color: Option<PegboardColor>,
    #[serde(default)]
    pub pegboard_size: Option<PegboardSize>,
    #[serde(default)]
    pub pegboard_width: Option<u32>,
    #[serde(default)]
    pub pegboard_length: Option<u32>,
    #[validate]
    pub basins: Vec<BasinSpec>,
    #[validate]
    pub faucets: Vec<FaucetSpec>,
    #[validate]
    #[serde(default)]
    pub accessories: Vec<AccessoryLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_model_basin_count() {
        assert_eq!(SinkModel::SingleBasin.basin_count(), 1);
        assert_eq!(SinkModel::DualBasin.basin_count(), 2);
        assert_eq!(SinkModel::TripleBasin.basin_count(), 3);
    }

    #[test]
    fn enums_serialize_to_intake_strings() {
        assert_eq!(
            serde_json::to_value(SinkFamily::Mdrd).unwrap(),
            serde_json::json!("MDRD")
        );
        assert_eq!(
            serde_json::to_value(SinkModel::DualBasin).unwrap(),
            serde_json::json!("T2-B2")
        );
        assert_eq!(
            serde_json::to_value(LegHeightType::HeightAdjustable).unwrap(),
            serde_json::json!("Height Adjustable")
        );
        assert_eq!(
            serde_json::to_value(FeetType::LockLevelingCasters).unwrap(),
            serde_json::json!("Lock & Leveling Casters")
        );
    }
}
