use crate::interfaces::ContractIdentity;

/// Error type for the Layout module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A state variable references a type missing from its layout's type dictionary
    #[error("failed to resolve type `{type_ref}` of {contract} in compilation unit {unit}")]
    Resolution {
        /// The missing type reference
        type_ref: String,
        /// The contract declaring the state variable
        contract: ContractIdentity,
        /// Origin of the compilation unit
        unit: String,
    },
    /// An exclusion set was applied to a compilation unit other than the one it was built from
    #[error("exclusion set built for compilation unit {expected} was applied to {found}")]
    ExclusionScope {
        /// Origin the exclusion set was built from
        expected: String,
        /// Origin of the unit it was applied to
        found: String,
    },
    /// A build-info document did not match the expected schema
    #[error("failed to decode compilation unit {unit}: {source}")]
    Decode {
        /// Origin of the compilation unit
        unit: String,
        /// The underlying decoding error
        #[source]
        source: serde_json::Error,
    },
    /// The collator for the configured locale could not be built
    #[error("failed to build collator for locale '{locale}': {reason}")]
    Collation {
        /// The requested locale
        locale: String,
        /// Why it was rejected
        reason: String,
    },
    /// Generic internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
