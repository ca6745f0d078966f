use crate::{
    error::Error,
    interfaces::{CompilationUnit, ContractIdentity, StorageLayout},
};

/// Resolve the storage width of `type_ref` in `layout`.
///
/// A missing descriptor means the compiler output is inconsistent, so it is reported as an
/// [`Error::Resolution`] naming the contract and unit rather than skipped.
pub fn resolve_type<'a>(
    layout: &'a StorageLayout,
    type_ref: &str,
    contract: &ContractIdentity,
    unit: &CompilationUnit,
) -> Result<&'a str, Error> {
    layout.number_of_bytes(type_ref).ok_or_else(|| Error::Resolution {
        type_ref: type_ref.to_string(),
        contract: contract.clone(),
        unit: unit.origin.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::interfaces::TypeDescriptor;

    fn layout() -> StorageLayout {
        StorageLayout {
            storage: vec![],
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

    #[test]
    fn test_resolve_known_type() {
        let unit = CompilationUnit::new("build-info/a.json", BTreeMap::new());
        let contract = ContractIdentity::new("Foo.sol", "Foo");
        let layout = layout();

        assert_eq!(resolve_type(&layout, "t_uint256", &contract, &unit).ok(), Some("32"));
    }

    #[test]
    fn test_resolve_missing_type() {
        let unit = CompilationUnit::new("build-info/a.json", BTreeMap::new());
        let contract = ContractIdentity::new("Foo.sol", "Foo");
        let layout = layout();

        let err = resolve_type(&layout, "t_address", &contract, &unit)
            .expect_err("missing type should not resolve");
        assert_eq!(
            err.to_string(),
            "failed to resolve type `t_address` of Foo.sol:Foo in compilation unit build-info/a.json"
        );
    }
}
