use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Identifies a contract by its declaration site.
///
/// `declared_name` alone is not unique: two sources may declare contracts with the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractIdentity {
    /// The source unit the contract is declared in, e.g. `contracts/Vault.sol`
    pub source_origin: String,
    /// The contract's declared name, e.g. `Vault`
    pub declared_name: String,
}

impl ContractIdentity {
    /// Creates a new [`ContractIdentity`].
    pub fn new(source_origin: impl Into<String>, declared_name: impl Into<String>) -> Self {
        Self { source_origin: source_origin.into(), declared_name: declared_name.into() }
    }
}

/// Formats the identity as a fully qualified name, `source:Name`.
impl Display for ContractIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source_origin, self.declared_name)
    }
}
