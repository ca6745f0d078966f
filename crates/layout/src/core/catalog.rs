use std::{cmp::Ordering, fmt};

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use icu_provider::DataLocale;

use crate::{error::Error, interfaces::ContractIdentity};

/// Locale-aware string comparison, matching the ordering of JavaScript's `localeCompare`:
/// accents and case are secondary to the base letters, and lowercase sorts before uppercase.
pub struct NameCollator {
    locale: String,
    collator: Collator,
}

impl NameCollator {
    /// Build a collator for a BCP-47 locale such as `en` or `de-CH`.
    pub fn new(locale: &str) -> Result<Self, Error> {
        let parsed: Locale = locale.parse().map_err(|e| Error::Collation {
            locale: locale.to_string(),
            reason: format!("{e}"),
        })?;

        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(&DataLocale::from(&parsed), options).map_err(|e| {
            Error::Collation { locale: locale.to_string(), reason: format!("{e}") }
        })?;

        Ok(Self { locale: locale.to_string(), collator })
    }

    /// The locale this collator was built for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Compare two strings under the collation rules.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

impl fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameCollator").field("locale", &self.locale).finish_non_exhaustive()
    }
}

/// Every known contract identity, in processing order.
///
/// Ordered by declared name under a [`NameCollator`]. Identities that collate equal by name are
/// ordered by source origin, and byte order breaks any remaining tie, so the order does not
/// depend on the order identities were discovered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    identities: Vec<ContractIdentity>,
}

impl Catalog {
    /// Sort and deduplicate `identities` into a catalog.
    pub fn build(
        identities: impl IntoIterator<Item = ContractIdentity>,
        collator: &NameCollator,
    ) -> Self {
        let mut identities = identities.into_iter().collect::<Vec<_>>();
        identities.sort_by(|a, b| {
            collator
                .compare(&a.declared_name, &b.declared_name)
                .then_with(|| collator.compare(&a.source_origin, &b.source_origin))
                .then_with(|| a.declared_name.cmp(&b.declared_name))
                .then_with(|| a.source_origin.cmp(&b.source_origin))
        });
        identities.dedup();

        Self { identities }
    }

    /// Identities in processing order.
    pub fn iter(&self) -> impl Iterator<Item = &ContractIdentity> {
        self.identities.iter()
    }

    /// Number of identities.
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.iter().map(|identity| identity.declared_name.as_str()).collect()
    }

    #[test]
    fn test_sorts_by_locale_not_bytes() {
        let collator = NameCollator::new("en").expect("failed to build collator");
        let catalog = Catalog::build(
            ["Zeta", "alpha", "Beta", "Émile", "eagle", "Alpha"]
                .into_iter()
                .map(|name| ContractIdentity::new(format!("contracts/{name}.sol"), name)),
            &collator,
        );

        assert_eq!(names(&catalog), vec!["alpha", "Alpha", "Beta", "eagle", "Émile", "Zeta"]);
    }

    #[test]
    fn test_order_ignores_input_order() {
        let collator = NameCollator::new("en").expect("failed to build collator");
        let identities = vec![
            ContractIdentity::new("contracts/b/Token.sol", "Token"),
            ContractIdentity::new("contracts/a/Token.sol", "Token"),
            ContractIdentity::new("contracts/Vault.sol", "Vault"),
        ];

        let forward = Catalog::build(identities.clone(), &collator);
        let backward = Catalog::build(identities.into_iter().rev(), &collator);

        assert_eq!(forward, backward);
        let sources = forward.iter().map(|i| i.source_origin.as_str()).collect::<Vec<_>>();
        assert_eq!(
            sources,
            vec!["contracts/a/Token.sol", "contracts/b/Token.sol", "contracts/Vault.sol"]
        );
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let collator = NameCollator::new("en").expect("failed to build collator");
        let catalog = Catalog::build(
            vec![ContractIdentity::new("Foo.sol", "Foo"), ContractIdentity::new("Foo.sol", "Foo")],
            &collator,
        );

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_invalid_locale() {
        let err = NameCollator::new("not a locale!").expect_err("locale should be rejected");
        assert!(matches!(err, Error::Collation { .. }));
    }
}
