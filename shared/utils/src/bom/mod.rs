//! BOM (Bill of Materials) compilation module.
//!
//! Translates one sink configuration into the flat, ordered list of
//! assembly codes and quantities used for procurement and production.
//! Selection rules are pure lookups over closed enum/range domains;
//! the compiler applies them in a fixed order against an immutable
//! catalog snapshot.

pub mod catalog;
pub mod compiler;
pub mod export;
pub mod rules;

pub use catalog::{AssemblyCatalog, AssemblyRecord};
pub use compiler::{BomCompiler, CompileGap, CompiledBom, GapRule};
pub use export::write_bom_csv;
