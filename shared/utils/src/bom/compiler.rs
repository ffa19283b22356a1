//! BOM compiler.
//!
//! Applies the selection rules to one sink configuration in a fixed
//! order and assembles the resulting entries into one ordered list.
//! Rules with no match contribute zero entries and never fail the
//! compilation; each such gap is recorded on a diagnostics side
//! channel so an incomplete BOM is observable without changing the
//! primary output contract.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use steriflow_models::{BasinSpec, BomEntry, FaucetSpec, PegboardSize, SinkConfiguration, SinkFamily};

use super::catalog::AssemblyCatalog;
use super::rules;

/// Rule that produced a diagnostics gap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GapRule {
    Body,
    Legs,
    PegboardSize,
    BasinSize,
    ControlBox,
    Sprayer,
}

/// One selection rule that matched nothing for this configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompileGap {
    pub rule: GapRule,
    pub detail: String,
}

/// Result of one compilation: the ordered BOM plus any gaps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompiledBom {
    pub build_number: String,
    pub entries: Vec<BomEntry>,
    pub gaps: Vec<CompileGap>,
}

/// Compiles sink configurations against one immutable catalog
/// snapshot. Cheap to clone; compilations are pure and may run in
/// parallel over the shared snapshot.
#[derive(Debug, Clone)]
pub struct BomCompiler {
    catalog: Arc<AssemblyCatalog>,
}

impl BomCompiler {
    pub fn new(catalog: Arc<AssemblyCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AssemblyCatalog {
        &self.catalog
    }

    /// Compile a configuration into its ordered BOM entry list.
    ///
    /// Never fails: rules without a match contribute nothing. Gaps are
    /// logged at WARN; use [`compile_with_diagnostics`] to inspect them.
    ///
    /// [`compile_with_diagnostics`]: Self::compile_with_diagnostics
    pub fn compile(&self, config: &SinkConfiguration) -> Vec<BomEntry> {
        let compiled = self.compile_with_diagnostics(config);
        for gap in &compiled.gaps {
            warn!(
                build_number = %compiled.build_number,
                rule = ?gap.rule,
                "{}", gap.detail
            );
        }
        compiled.entries
    }

    /// Compile a configuration, returning the entries together with a
    /// side list of every rule that silently matched nothing.
    ///
    /// Application order: body, legs, feet, pegboard (if enabled),
    /// basins in list order, control box, faucets in list order,
    /// accessories in list order. Entries sharing an assembly code are
    /// not merged.
    pub fn compile_with_diagnostics(&self, config: &SinkConfiguration) -> CompiledBom {
        let mut entries = Vec::new();
        let mut gaps = Vec::new();

        match rules::body_assembly(config.sink_length) {
            Some(code) => entries.push(self.catalog_entry(code, 1)),
            None => gaps.push(CompileGap {
                rule: GapRule::Body,
                detail: format!(
                    "No body assembly covers sink length {}\"",
                    config.sink_length
                ),
            }),
        }

        match rules::leg_assembly(config.leg_type, config.leg_height_type) {
            Some(code) => entries.push(self.catalog_entry(code, 1)),
            None => gaps.push(CompileGap {
                rule: GapRule::Legs,
                detail: format!(
                    "No leg kit for {:?} legs with {:?}",
                    config.leg_type, config.leg_height_type
                ),
            }),
        }

        entries.push(self.catalog_entry(rules::feet_assembly(config.feet_type), 1));

        if config.has_pegboard {
            self.pegboard_entries(config, &mut entries, &mut gaps);
        }

        for basin in &config.basins {
            self.basin_entries(basin, &mut entries, &mut gaps);
        }

        match rules::control_box_assembly(&config.basins) {
            Some(code) => entries.push(self.catalog_entry(code, 1)),
            None => {
                if !config.basins.is_empty() {
                    gaps.push(CompileGap {
                        rule: GapRule::ControlBox,
                        detail: format!(
                            "No control box for {} basin(s)",
                            config.basins.len()
                        ),
                    });
                }
            }
        }

        for faucet in &config.faucets {
            self.faucet_entries(faucet, &mut entries, &mut gaps);
        }

        for accessory in &config.accessories {
            entries.push(BomEntry::new(
                accessory.assembly_code.clone(),
                accessory.quantity,
                self.catalog.name_for(&accessory.assembly_code),
            ));
        }

        CompiledBom {
            build_number: config.build_number.clone(),
            entries,
            gaps,
        }
    }

    fn pegboard_entries(
        &self,
        config: &SinkConfiguration,
        entries: &mut Vec<BomEntry>,
        gaps: &mut Vec<CompileGap>,
    ) {
        if config.sink_family == SinkFamily::Mdrd {
            let (code, name) = rules::MDRD_OVERHEAD_LIGHT_KIT;
            entries.push(BomEntry::new(code, 1, name));
        }

        if let Some(pegboard_type) = config.pegboard_type {
            let (code, name) = rules::pegboard_material_kit(pegboard_type);
            entries.push(BomEntry::new(code, 1, name));
        }

        match config.pegboard_size {
            Some(PegboardSize::SameAsSinkLength) => {
                match rules::pegboard_size_assembly(config.sink_length) {
                    Some((code, name)) => entries.push(BomEntry::new(code, 1, name)),
                    None => gaps.push(CompileGap {
                        rule: GapRule::PegboardSize,
                        detail: format!(
                            "No pegboard size band covers sink length {}\"",
                            config.sink_length
                        ),
                    }),
                }
            }
            Some(PegboardSize::CustomSize) => {
                match (config.pegboard_width, config.pegboard_length) {
                    (Some(width), Some(length)) => entries.push(BomEntry::new(
                        rules::CUSTOM_PEGBOARD_CODE,
                        1,
                        rules::custom_pegboard_name(width, length),
                    )),
                    _ => gaps.push(CompileGap {
                        rule: GapRule::PegboardSize,
                        detail: "Custom pegboard size selected without dimensions".to_string(),
                    }),
                }
            }
            None => {}
        }
    }

    fn basin_entries(
        &self,
        basin: &BasinSpec,
        entries: &mut Vec<BomEntry>,
        gaps: &mut Vec<CompileGap>,
    ) {
        let (code, name) = rules::basin_type_kit(basin.basin_type);
        entries.push(BomEntry::new(code, 1, name));

        // Supplied dimensions take precedence over the named size.
        if let Some(dimensions) = &basin.custom_size {
            entries.push(BomEntry::new(
                rules::CUSTOM_BASIN_CODE,
                1,
                rules::custom_basin_name(dimensions),
            ));
        } else {
            match rules::basin_size_assembly(basin.size) {
                Some((code, name)) => entries.push(BomEntry::new(code, 1, name)),
                None => gaps.push(CompileGap {
                    rule: GapRule::BasinSize,
                    detail: "Custom basin size selected without dimensions".to_string(),
                }),
            }
        }

        if basin.has_p_trap {
            let (code, name) = rules::P_TRAP_KIT;
            entries.push(BomEntry::new(code, 1, name));
        }

        if basin.has_basin_light {
            let (code, name) = rules::basin_light_kit(basin.basin_type);
            entries.push(BomEntry::new(code, 1, name));
        }
    }

    fn faucet_entries(
        &self,
        faucet: &FaucetSpec,
        entries: &mut Vec<BomEntry>,
        gaps: &mut Vec<CompileGap>,
    ) {
        entries.push(self.catalog_entry(rules::faucet_kit(faucet.faucet_type), faucet.quantity));

        if faucet.has_sprayer {
            match faucet.sprayer_type {
                Some(sprayer_type) => entries.push(
                    self.catalog_entry(rules::sprayer_kit(sprayer_type), faucet.sprayer_units()),
                ),
                None => gaps.push(CompileGap {
                    rule: GapRule::Sprayer,
                    detail: "Sprayer requested without a sprayer type".to_string(),
                }),
            }
        }
    }

    fn catalog_entry(&self, code: &str, quantity: u32) -> BomEntry {
        BomEntry::new(code, quantity, self.catalog.name_for(code))
    }
}
