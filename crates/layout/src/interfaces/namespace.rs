use eyre::eyre;
use stowage_config::{DEFAULT_LIBRARY_PREFIX, DEFAULT_VENDOR_PREFIX};

use crate::error::Error;

/// The source origins that belong to the shared upgradeable library.
///
/// Two prefixes are tracked. Slots are collected into exclusion sets from sources under
/// `library_prefix` only, while every source under either prefix is left out of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryNamespace {
    library_prefix: String,
    vendor_prefix: Option<String>,
}

impl LibraryNamespace {
    /// Creates a namespace for the given library prefix, with no vendor prefix.
    pub fn new(library_prefix: impl Into<String>) -> Result<Self, Error> {
        let library_prefix = library_prefix.into();

        // an empty prefix would match every source in the project
        if library_prefix.is_empty() {
            return Err(Error::Eyre(eyre!("the library prefix cannot be empty")));
        }

        Ok(Self { library_prefix, vendor_prefix: None })
    }

    /// Also leave every source under `vendor_prefix` out of the report. An empty prefix clears it.
    pub fn with_vendor_prefix(mut self, vendor_prefix: impl Into<String>) -> Self {
        let vendor_prefix = vendor_prefix.into();
        self.vendor_prefix = if vendor_prefix.is_empty() { None } else { Some(vendor_prefix) };
        self
    }

    /// The prefix of the library whose slots are excluded.
    pub fn library_prefix(&self) -> &str {
        &self.library_prefix
    }

    /// Whether the source belongs to the library itself.
    pub fn is_library(&self, source_origin: &str) -> bool {
        source_origin.starts_with(&self.library_prefix)
    }

    /// Whether the source must never be reported: it is library code, or falls under the vendor
    /// prefix.
    pub fn is_vendored(&self, source_origin: &str) -> bool {
        self.is_library(source_origin) ||
            self.vendor_prefix.as_deref().is_some_and(|prefix| source_origin.starts_with(prefix))
    }
}

impl Default for LibraryNamespace {
    fn default() -> Self {
        Self {
            library_prefix: DEFAULT_LIBRARY_PREFIX.to_string(),
            vendor_prefix: Some(DEFAULT_VENDOR_PREFIX.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_namespace() {
        let namespace = LibraryNamespace::default();
        assert!(namespace.is_library(
            "@openzeppelin/contracts-upgradeable/access/OwnableUpgradeable.sol"
        ));
        assert!(!namespace.is_library("@openzeppelin/contracts/token/ERC20/ERC20.sol"));
        assert!(namespace.is_vendored("@openzeppelin/contracts/token/ERC20/ERC20.sol"));
        assert!(!namespace.is_vendored("contracts/Vault.sol"));
    }

    #[test]
    fn test_library_only_namespace() {
        let namespace = LibraryNamespace::new("@lib/upgradeable").expect("valid prefix");
        assert!(namespace.is_vendored("@lib/upgradeable/Base.sol"));
        assert!(!namespace.is_vendored("@lib/other/Thing.sol"));
    }

    #[test]
    fn test_empty_vendor_prefix_is_cleared() {
        let namespace = LibraryNamespace::new("@lib/upgradeable")
            .expect("valid prefix")
            .with_vendor_prefix("");
        assert!(!namespace.is_vendored("contracts/Vault.sol"));
    }

    #[test]
    fn test_empty_library_prefix_is_rejected() {
        assert!(LibraryNamespace::new("").is_err());
    }
}
