use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::Error, interfaces::ContractIdentity};

/// The compiler's identifier for a declared state variable (its `astId`).
///
/// Only meaningful inside the compilation unit that produced it; the same number in another
/// unit may refer to an unrelated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub u64);

/// One state variable in a contract's storage layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotEntry {
    /// Unit-local identifier of the declaration
    pub ast_id: SlotId,
    /// Fully qualified name of the declaring contract, as reported by solc
    #[serde(default)]
    pub contract: String,
    /// The variable's name
    pub label: String,
    /// Byte offset within the slot
    pub offset: u64,
    /// Decimal-encoded slot index
    pub slot: String,
    /// Key into [`StorageLayout::types`]
    #[serde(rename = "type")]
    pub type_ref: String,
}

/// Compiler metadata about a storage type. Only `number_of_bytes` is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Decimal-encoded storage width in bytes
    pub number_of_bytes: String,
    /// Human readable type, e.g. `uint256`
    #[serde(default)]
    pub label: String,
    /// `inplace`, `mapping`, `dynamic_array` or `bytes`
    #[serde(default)]
    pub encoding: String,
    /// Remaining compiler fields (`key`, `value`, `members`, `base`)
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// The storage layout of one contract within one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLayout {
    /// State variables in declaration order
    #[serde(default, deserialize_with = "default_for_null")]
    pub storage: Vec<SlotEntry>,
    /// Type dictionary, keyed by type reference. solc emits `null` when there is no storage.
    #[serde(default, deserialize_with = "default_for_null")]
    pub types: BTreeMap<String, TypeDescriptor>,
}

impl StorageLayout {
    /// Look up the storage width of `type_ref`, if the layout describes it.
    pub fn number_of_bytes(&self, type_ref: &str) -> Option<&str> {
        self.types.get(type_ref).map(|descriptor| descriptor.number_of_bytes.as_str())
    }
}

/// Compiler output for a single contract. Everything but the storage layout is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractOutput {
    /// Absent for interfaces, or when the layout was not requested from the compiler
    #[serde(default)]
    pub storage_layout: Option<StorageLayout>,
}

/// The `output` section of a build-info document.
#[derive(Debug, Clone, Default, Deserialize)]
struct CompilerOutput {
    #[serde(default, deserialize_with = "default_for_null")]
    contracts: BTreeMap<String, BTreeMap<String, ContractOutput>>,
}

/// A Hardhat build-info document. Only `output` is decoded; the compiler input is skipped.
#[derive(Debug, Clone, Default, Deserialize)]
struct BuildInfo {
    #[serde(default, deserialize_with = "default_for_null")]
    output: CompilerOutput,
}

/// The output of one compiler invocation, keyed by source origin and then contract name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    /// Where the unit came from, typically the build-info path relative to the artifacts
    /// directory
    pub origin: String,
    /// source origin -> declared name -> compiler output
    pub contracts: BTreeMap<String, BTreeMap<String, ContractOutput>>,
}

impl CompilationUnit {
    /// Creates a unit from already decoded contract outputs.
    pub fn new(
        origin: impl Into<String>,
        contracts: BTreeMap<String, BTreeMap<String, ContractOutput>>,
    ) -> Self {
        Self { origin: origin.into(), contracts }
    }

    /// Decode a build-info JSON document.
    ///
    /// A document without `output` or `output.contracts` decodes to an empty unit; any other
    /// schema mismatch is an [`Error::Decode`].
    pub fn from_build_info(origin: impl Into<String>, contents: &str) -> Result<Self, Error> {
        let origin = origin.into();
        match serde_json::from_str::<BuildInfo>(contents) {
            Ok(build_info) => Ok(Self::new(origin, build_info.output.contracts)),
            Err(source) => Err(Error::Decode { unit: origin, source }),
        }
    }

    /// Decode a build-info document that was already parsed into a [`serde_json::Value`].
    pub fn from_value(origin: impl Into<String>, value: serde_json::Value) -> Result<Self, Error> {
        let origin = origin.into();
        match serde_json::from_value::<BuildInfo>(value) {
            Ok(build_info) => Ok(Self::new(origin, build_info.output.contracts)),
            Err(source) => Err(Error::Decode { unit: origin, source }),
        }
    }

    /// The storage layout of `identity` in this unit, if the unit compiled it with one.
    pub fn storage_layout(&self, identity: &ContractIdentity) -> Option<&StorageLayout> {
        self.contracts
            .get(&identity.source_origin)?
            .get(&identity.declared_name)?
            .storage_layout
            .as_ref()
    }

    /// Every contract identity this unit has output for.
    pub fn identities(&self) -> impl Iterator<Item = ContractIdentity> + '_ {
        self.contracts.iter().flat_map(|(source, contracts)| {
            contracts.keys().map(move |name| ContractIdentity::new(source.clone(), name.clone()))
        })
    }
}

/// Deserialize `null` as the type's default value.
fn default_for_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
