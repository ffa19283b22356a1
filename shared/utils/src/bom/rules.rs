//! Selection rules.
//!
//! Each rule is a pure, total function over its closed enum or range
//! domain, returning `Option` where the domain has deliberate gaps.
//! Rules never consult each other; the compiler applies them in order.
//! Codes and display names follow the production assembly catalog.

use steriflow_models::{
    BasinDimensions, BasinSize, BasinSpec, BasinType, FaucetType, FeetType, LegHeightType, LegType,
    PegboardType, SprayerType,
};

/// Constant code for custom-size pegboards; only the synthesized name
/// carries the dimensions.
pub const CUSTOM_PEGBOARD_CODE: &str = "720.215.002";

/// Constant code for custom-size basins; only the synthesized name
/// carries the dimensions.
pub const CUSTOM_BASIN_CODE: &str = "720.215.001";

/// Mandatory overhead light kit for MDRD-family sinks with a pegboard.
pub const MDRD_OVERHEAD_LIGHT_KIT: (&str, &str) = ("716.128", "T2-OHL-MDRD-KIT");

/// P-Trap disinfection drain unit, one per basin that requests it.
pub const P_TRAP_KIT: (&str, &str) = ("706.65", "T2-OA-MS-1026");

/// Sink body assembly, selected by overall length in inches.
/// Lengths outside the three bands have no body assembly.
pub fn body_assembly(sink_length: u32) -> Option<&'static str> {
    match sink_length {
        48..=60 => Some("709.82"),
        61..=72 => Some("709.83"),
        73..=120 => Some("709.84"),
        _ => None,
    }
}

/// Leg kit, keyed by leg type and height type. LC1 legs are not made
/// in a fixed-height variant.
pub fn leg_assembly(leg_type: LegType, height_type: LegHeightType) -> Option<&'static str> {
    match (height_type, leg_type) {
        (LegHeightType::HeightAdjustable, LegType::Dl27) => Some("711.97"),
        (LegHeightType::HeightAdjustable, LegType::Dl14) => Some("711.98"),
        (LegHeightType::HeightAdjustable, LegType::Lc1) => Some("711.99"),
        (LegHeightType::FixedHeight, LegType::Dl27) => Some("711.100"),
        (LegHeightType::FixedHeight, LegType::Dl14) => Some("711.101"),
        (LegHeightType::FixedHeight, LegType::Lc1) => None,
    }
}

/// Feet assembly, total over the feet enum.
pub fn feet_assembly(feet_type: FeetType) -> &'static str {
    match feet_type {
        FeetType::LockLevelingCasters => "711.95",
        FeetType::SsAdjustableSeismicFeet => "711.96",
    }
}

/// Pegboard material kit, total over the pegboard type enum.
pub fn pegboard_material_kit(pegboard_type: PegboardType) -> (&'static str, &'static str) {
    match pegboard_type {
        PegboardType::Perforated => ("716.130", "T2-ADW-PB-PERF-KIT"),
        PegboardType::Solid => ("716.131", "T2-ADW-PB-SOLID-KIT"),
        PegboardType::ColorsafePlus => ("708.77", "T-OA-PB-COLOR"),
    }
}

/// Pegboard sized to the sink length, in eight bands covering 34"-130".
pub fn pegboard_size_assembly(sink_length: u32) -> Option<(&'static str, &'static str)> {
    match sink_length {
        34..=47 => Some(("715.120", "T2-ADW-PB-3436")),
        48..=59 => Some(("715.121", "T2-ADW-PB-4836")),
        60..=71 => Some(("715.122", "T2-ADW-PB-6036")),
        72..=83 => Some(("715.123", "T2-ADW-PB-7236")),
        84..=95 => Some(("715.124", "T2-ADW-PB-8436")),
        96..=107 => Some(("715.125", "T2-ADW-PB-9636")),
        108..=119 => Some(("715.126", "T2-ADW-PB-10836")),
        120..=130 => Some(("715.127", "T2-ADW-PB-12036")),
        _ => None,
    }
}

/// Synthesized display name for a custom-size pegboard.
pub fn custom_pegboard_name(width: u32, length: u32) -> String {
    format!("T2-ADW-PB-{}x{}", width, length)
}

/// Basin technology kit, total over the basin type enum.
pub fn basin_type_kit(basin_type: BasinType) -> (&'static str, &'static str) {
    match basin_type {
        BasinType::ESink => ("713.109", "T2-BSN-ESK-KIT"),
        BasinType::EDrain => ("713.107", "T2-BSN-EDR-KIT"),
        BasinType::ESinkDi => ("713.108", "T2-BSN-ESK-DI-KIT"),
    }
}

/// Basin assembly for the five named sizes. `Custom` has no table
/// entry; its assembly is synthesized from the supplied dimensions.
pub fn basin_size_assembly(size: BasinSize) -> Option<(&'static str, &'static str)> {
    match size {
        BasinSize::Size20X20X8 => Some(("712.102", "T2-ADW-BASIN20X20X8")),
        BasinSize::Size24X20X8 => Some(("712.103", "T2-ADW-BASIN24X20X8")),
        BasinSize::Size24X20X10 => Some(("712.104", "T2-ADW-BASIN24X20X10")),
        BasinSize::Size30X20X8 => Some(("712.105", "T2-ADW-BASIN30X20X8")),
        BasinSize::Size30X20X10 => Some(("712.106", "T2-ADW-BASIN30X20X10")),
        BasinSize::Custom => None,
    }
}

/// Synthesized display name for a custom-size basin.
pub fn custom_basin_name(dimensions: &BasinDimensions) -> String {
    format!(
        "T2-ADW-BASIN{}X{}X{}",
        dimensions.width, dimensions.length, dimensions.depth
    )
}

/// Basin light kit; E-Drain basins take a different kit than the
/// E-Sink family.
pub fn basin_light_kit(basin_type: BasinType) -> (&'static str, &'static str) {
    match basin_type {
        BasinType::EDrain => ("706.67", "T2-OA-BASIN-LIGHT-EDR-KIT"),
        BasinType::ESink | BasinType::ESinkDi => ("706.68", "T2-OA-BASIN-LIGHT-ESK-KIT"),
    }
}

/// Control box, selected by the split of E-Sink-family versus E-Drain
/// basins across the whole basin list. Nine splits covering one to
/// three basins are defined; anything else has no control box.
pub fn control_box_assembly(basins: &[BasinSpec]) -> Option<&'static str> {
    let e_sink_count = basins
        .iter()
        .filter(|b| b.basin_type.is_esink_family())
        .count();
    let e_drain_count = basins
        .iter()
        .filter(|b| b.basin_type == BasinType::EDrain)
        .count();

    match (e_sink_count, e_drain_count) {
        (0, 1) => Some("719.176"),
        (1, 0) => Some("719.177"),
        (1, 1) => Some("719.178"),
        (0, 2) => Some("719.179"),
        (2, 0) => Some("719.180"),
        (0, 3) => Some("719.181"),
        (3, 0) => Some("719.182"),
        (2, 1) => Some("719.183"),
        (1, 2) => Some("719.184"),
        _ => None,
    }
}

/// Primary faucet kit, total over the faucet type enum.
pub fn faucet_kit(faucet_type: FaucetType) -> &'static str {
    match faucet_type {
        FaucetType::WristBlade => "706.58",
        FaucetType::PreRinse => "706.59",
        FaucetType::Gooseneck => "706.60",
    }
}

/// Sprayer kit, total over the sprayer type enum.
pub fn sprayer_kit(sprayer_type: SprayerType) -> &'static str {
    match sprayer_type {
        SprayerType::DiWaterGunTurret => "706.61",
        SprayerType::DiWaterGunRosette => "706.62",
        SprayerType::AirGunTurret => "706.63",
        SprayerType::AirGunRosette => "706.64",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basin(basin_type: BasinType) -> BasinSpec {
        BasinSpec {
            basin_type,
            size: BasinSize::Size20X20X8,
            custom_size: None,
            has_p_trap: false,
            has_basin_light: false,
        }
    }

    #[test]
    fn body_bands_have_exclusive_boundaries() {
        assert_eq!(body_assembly(47), None);
        assert_eq!(body_assembly(48), Some("709.82"));
        assert_eq!(body_assembly(60), Some("709.82"));
        assert_eq!(body_assembly(61), Some("709.83"));
        assert_eq!(body_assembly(72), Some("709.83"));
        assert_eq!(body_assembly(73), Some("709.84"));
        assert_eq!(body_assembly(120), Some("709.84"));
        assert_eq!(body_assembly(121), None);
    }

    #[test]
    fn five_of_six_leg_pairs_are_defined() {
        assert_eq!(
            leg_assembly(LegType::Dl27, LegHeightType::HeightAdjustable),
            Some("711.97")
        );
        assert_eq!(
            leg_assembly(LegType::Dl14, LegHeightType::HeightAdjustable),
            Some("711.98")
        );
        assert_eq!(
            leg_assembly(LegType::Lc1, LegHeightType::HeightAdjustable),
            Some("711.99")
        );
        assert_eq!(
            leg_assembly(LegType::Dl27, LegHeightType::FixedHeight),
            Some("711.100")
        );
        assert_eq!(
            leg_assembly(LegType::Dl14, LegHeightType::FixedHeight),
            Some("711.101")
        );
        assert_eq!(leg_assembly(LegType::Lc1, LegHeightType::FixedHeight), None);
    }

    #[test]
    fn pegboard_bands_cover_34_to_130() {
        assert_eq!(pegboard_size_assembly(33), None);
        assert_eq!(pegboard_size_assembly(34).unwrap().0, "715.120");
        assert_eq!(pegboard_size_assembly(47).unwrap().0, "715.120");
        assert_eq!(pegboard_size_assembly(48).unwrap().0, "715.121");
        assert_eq!(pegboard_size_assembly(59).unwrap().0, "715.121");
        assert_eq!(pegboard_size_assembly(60).unwrap().0, "715.122");
        assert_eq!(pegboard_size_assembly(72).unwrap().0, "715.123");
        assert_eq!(pegboard_size_assembly(84).unwrap().0, "715.124");
        assert_eq!(pegboard_size_assembly(96).unwrap().0, "715.125");
        assert_eq!(pegboard_size_assembly(108).unwrap().0, "715.126");
        assert_eq!(pegboard_size_assembly(120).unwrap().0, "715.127");
        assert_eq!(pegboard_size_assembly(130).unwrap().0, "715.127");
        assert_eq!(pegboard_size_assembly(131), None);
    }

    #[test]
    fn control_box_covers_the_nine_defined_splits() {
        use BasinType::*;

        let cases: Vec<(Vec<BasinSpec>, Option<&str>)> = vec![
            (vec![basin(EDrain)], Some("719.176")),
            (vec![basin(ESink)], Some("719.177")),
            (vec![basin(ESink), basin(EDrain)], Some("719.178")),
            (vec![basin(EDrain), basin(EDrain)], Some("719.179")),
            (vec![basin(ESink), basin(ESinkDi)], Some("719.180")),
            (
                vec![basin(EDrain), basin(EDrain), basin(EDrain)],
                Some("719.181"),
            ),
            (
                vec![basin(ESink), basin(ESink), basin(ESink)],
                Some("719.182"),
            ),
            (
                vec![basin(ESink), basin(ESinkDi), basin(EDrain)],
                Some("719.183"),
            ),
            (
                vec![basin(ESink), basin(EDrain), basin(EDrain)],
                Some("719.184"),
            ),
            (vec![], None),
            (
                vec![
                    basin(ESink),
                    basin(ESink),
                    basin(EDrain),
                    basin(EDrain),
                ],
                None,
            ),
        ];

        for (basins, expected) in cases {
            assert_eq!(control_box_assembly(&basins), expected);
        }
    }

    #[test]
    fn esink_di_counts_toward_the_esink_family() {
        assert_eq!(
            control_box_assembly(&[basin(BasinType::ESinkDi)]),
            Some("719.177")
        );
    }

    #[test]
    fn custom_names_embed_dimensions() {
        assert_eq!(custom_pegboard_name(36, 48), "T2-ADW-PB-36x48");
        let dims = BasinDimensions {
            width: 22,
            length: 18,
            depth: 9,
        };
        assert_eq!(custom_basin_name(&dims), "T2-ADW-BASIN22X18X9");
    }

    #[test]
    fn basin_light_differs_by_drain_family() {
        assert_eq!(basin_light_kit(BasinType::EDrain).0, "706.67");
        assert_eq!(basin_light_kit(BasinType::ESink).0, "706.68");
        assert_eq!(basin_light_kit(BasinType::ESinkDi).0, "706.68");
    }
}
