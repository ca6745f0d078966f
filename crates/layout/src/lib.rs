//! The Layout module consolidates the storage layouts that solc emits into Hardhat build-info
//! files into a single table of state variables.
//!
//! Slots declared by a shared upgradeable library (by default
//! `@openzeppelin/contracts-upgradeable`) are excluded per compilation unit, so only a
//! project's own state variables are reported.

/// Error types for the layout module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::{
    assemble::{assemble, process_unit},
    catalog::{Catalog, NameCollator},
    exclusion::{build_exclusion_set, ExclusionSet},
    export,
    extract::extract_rows,
    resolve::resolve_type,
};
pub use error::Error;
pub use interfaces::{
    CompilationUnit, ConsolidatedRow, ConsolidatedTable, ContractIdentity, ContractOutput,
    LayoutArgs, LayoutArgsBuilder, LayoutOptions, LibraryNamespace, Project, ReportedVariable,
    SlotEntry, SlotId, StorageLayout, TypeDescriptor,
};
