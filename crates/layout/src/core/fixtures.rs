//! Builders for compilation units used across the core tests.

use std::collections::BTreeMap;

use crate::interfaces::{
    CompilationUnit, ContractOutput, SlotEntry, SlotId, StorageLayout, TypeDescriptor,
};

/// A `uint256` state variable in its own slot.
pub(crate) fn entry(ast_id: u64, label: &str, slot: &str) -> SlotEntry {
    SlotEntry {
        ast_id: SlotId(ast_id),
        contract: String::new(),
        label: label.to_string(),
        offset: 0,
        slot: slot.to_string(),
        type_ref: "t_uint256".to_string(),
    }
}

/// A layout whose type dictionary describes `t_uint256` only.
pub(crate) fn layout(storage: Vec<SlotEntry>) -> StorageLayout {
    StorageLayout {
        storage,
        types: BTreeMap::from([(
            "t_uint256".to_string(),
            TypeDescriptor {
                number_of_bytes: "32".to_string(),
                label: "uint256".to_string(),
                encoding: "inplace".to_string(),
                other: BTreeMap::new(),
            },
        )]),
    }
}

/// Accumulates contracts into a [`CompilationUnit`].
#[derive(Debug, Default)]
pub(crate) struct UnitBuilder {
    contracts: BTreeMap<String, BTreeMap<String, ContractOutput>>,
}

impl UnitBuilder {
    /// Add a contract with the given layout, or none.
    pub(crate) fn contract(
        mut self,
        source: &str,
        name: &str,
        storage_layout: Option<StorageLayout>,
    ) -> Self {
        self.contracts
            .entry(source.to_string())
            .or_default()
            .insert(name.to_string(), ContractOutput { storage_layout });
        self
    }

    pub(crate) fn build(self, origin: &str) -> CompilationUnit {
        CompilationUnit::new(origin, self.contracts)
    }
}
