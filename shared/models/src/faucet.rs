//! Faucet and sprayer specification models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Faucet kit as presented by the intake catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FaucetType {
    #[serde(rename = "10\" WRIST BLADE SWING SPOUT WALL MOUNTED FAUCET KIT")]
    WristBlade,
    #[serde(rename = "PRE-RINSE OVERHEAD SPRAY UNIT KIT")]
    PreRinse,
    #[serde(rename = "GOOSENECK TREATED WATER FAUCET KIT PVC")]
    Gooseneck,
}

/// Sprayer kit: water or air gun, turret or rosette mounting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SprayerType {
    #[serde(rename = "DI WATER GUN KIT & TURRET")]
    DiWaterGunTurret,
    #[serde(rename = "DI WATER GUN KIT & ROSETTE")]
    DiWaterGunRosette,
    #[serde(rename = "AIR GUN KIT & TURRET")]
    AirGunTurret,
    #[serde(rename = "AIR GUN KIT & ROSETTE")]
    AirGunRosette,
}

/// Faucet placement relative to the basins. Collected by intake for
/// drawings; not consumed by BOM selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FaucetPlacement {
    Center,
    #[serde(rename = "Between Basins")]
    BetweenBasins,
}

/// Sprayer mounting side. Collected by intake; not consumed by BOM
/// selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SprayerLocation {
    #[serde(rename = "Left Side")]
    LeftSide,
    #[serde(rename = "Right Side")]
    RightSide,
}

/// One faucet line within a sink configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaucetSpec {
    #[serde(rename = "type")]
    pub faucet_type: FaucetType,
    #[validate(range(min = 1, max = 3, message = "Faucet quantity must be 1-3"))]
    pub quantity: u32,
    #[serde(default)]
    pub placement: Option<FaucetPlacement>,
    #[serde(default)]
    pub has_sprayer: bool,
    #[serde(default)]
    pub sprayer_type: Option<SprayerType>,
    #[validate(range(min = 1, max = 2, message = "Sprayer quantity must be 1-2"))]
    #[serde(default)]
    pub sprayer_quantity: Option<u32>,
    #[serde(default)]
    pub sprayer_location: Option<SprayerLocation>,
}

impl FaucetSpec {
    /// Sprayer kit quantity, defaulting to one when not specified.
    pub fn sprayer_units(&self) -> u32 {
        self.sprayer_quantity.unwrap_or(1)
    }
}
