//! # SteriFlow Core Domain Models
//!
//! This module contains the core domain models for the SteriFlow medical
//! sink order system. All models implement serialization/deserialization
//! with serde using the exact wire strings produced by the intake
//! workflow, and validation with the validator crate.
//!
//! ## Key Models
//!
//! - **SinkConfiguration**: Complete configuration for one sink unit
//!   (body, legs, feet, pegboard cluster, basins, faucets, accessories)
//! - **BasinSpec**: One basin with type, size and optional extras
//! - **FaucetSpec**: One faucet line with optional sprayer kit
//! - **AccessoryLine**: Catalog accessory pass-through line
//! - **BomEntry**: One line of a compiled Bill of Materials
//!
//! ## Design
//!
//! Every selection the intake presents as a string is a closed tagged
//! enum here, so each BOM selection rule is an exhaustive match and a
//! new variant is a compile error until every rule handles it.

pub mod accessory;
pub mod basin;
pub mod bom;
pub mod configuration;
pub mod faucet;
pub mod pegboard;


pub use accessory::*;
pub use basin::*;
pub use bom::*;
pub use configuration::*;
pub use faucet::*;
pub use pegboard::*;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn minimal_configuration() -> SinkConfiguration {
        SinkConfiguration {
            build_number: "BN-001".to_string(),
            sink_family: SinkFamily::Mdrd,
            sink_model: SinkModel::SingleBasin,
            sink_width: 30,
            sink_length: 55,
            leg_type: LegType::Dl27,
            leg_height_type: LegHeightType::HeightAdjustable,
            feet_type: FeetType::LockLevelingCasters,
            workflow_direction: WorkflowDirection::LeftToRight,
            has_pegboard: false,
            pegboard_type: None,
            pegboard_color: None,
            pegboard_size: None,
            pegboard_width: None,
            pegboard_length: None,
            basins: vec![BasinSpec {
                basin_type: BasinType::ESink,
                size: BasinSize::Size20X20X8,
                custom_size: None,
                has_p_trap: false,
                has_basin_light: false,
            }],
            faucets: vec![FaucetSpec {
                faucet_type: FaucetType::WristBlade,
                quantity: 1,
                placement: None,
                has_sprayer: false,
                sprayer_type: None,
                sprayer_quantity: None,
                sprayer_location: None,
            }],
            accessories: vec![],
        }
    }

    #[test]
    fn minimal_configuration_validates() {
        assert!(minimal_configuration().validate().is_ok());
    }

    #[test]
    fn empty_build_number_is_rejected() {
        let mut config = minimal_configuration();
        config.build_number = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn nested_faucet_quantity_is_validated() {
        let mut config = minimal_configuration();
        config.faucets[0].quantity = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn nested_accessory_code_is_validated() {
        let mut config = minimal_configuration();
        config.accessories.push(AccessoryLine::new("bogus", 1));
        assert!(config.validate().is_err());
    }

    #[test]
    fn configuration_deserializes_from_intake_json() {
        let json = r#"{
            "buildNumber": "BN-114-A",
            "sinkFamily": "MDRD",
            "sinkModel": "T2-B2",
            "sinkWidth": 30,
            "sinkLength": 72,
            "legType": "DL14",
            "legHeightType": "Fixed Height",
            "feetType": "S.S Adjustable Seismic Feet",
            "workflowDirection": "Right to Left",
            "hasPegboard": true,
            "pegboardType": "Perforated",
            "pegboardColor": "Blue",
            "pegboardSize": "Same as Sink Length",
            "basins": [
                {"type": "E-Sink", "size": "24X20X8"},
                {"type": "E-Drain", "size": "20X20X8", "hasPTrap": true}
            ],
            "faucets": [
                {"type": "PRE-RINSE OVERHEAD SPRAY UNIT KIT", "quantity": 2}
            ],
            "accessories": [
                {"assemblyCode": "702.4", "quantity": 2}
            ]
        }"#;

        let config: SinkConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.sink_model, SinkModel::DualBasin);
        assert_eq!(config.basins.len(), 2);
        assert_eq!(config.basins[1].basin_type, BasinType::EDrain);
        assert!(config.basins[1].has_p_trap);
        assert_eq!(config.faucets[0].quantity, 2);
        assert_eq!(config.accessories[0].assembly_code, "702.4");
        assert!(config.validate().is_ok());
    }
}
