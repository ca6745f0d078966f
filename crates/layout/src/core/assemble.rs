use std::sync::Arc;

use stowage_common::utils::threading::task_pool;
use tracing::debug;

use crate::{
    core::{catalog::Catalog, exclusion::build_exclusion_set, extract::extract_rows},
    error::Error,
    interfaces::{CompilationUnit, ConsolidatedRow, ConsolidatedTable, LayoutOptions},
};

/// Run both passes over one compilation unit: build its exclusion set, then extract its rows.
pub fn process_unit(
    unit: &CompilationUnit,
    catalog: &Catalog,
    options: &LayoutOptions,
) -> Result<Vec<ConsolidatedRow>, Error> {
    let exclusion = build_exclusion_set(unit, catalog, &options.namespace);
    debug!("compilation unit {} excludes {} library slots", unit.origin, exclusion.len());

    extract_rows(unit, catalog, &exclusion, options)
}

/// Assemble the consolidated table from every compilation unit, in the order given.
///
/// Rows from different units are concatenated without merging, so a contract compiled in two
/// units appears twice. The first failing unit, in input order, aborts the whole table.
///
/// With `options.threads > 1` units are processed on a worker pool; the table is identical to
/// the sequential result.
pub fn assemble(
    units: Vec<CompilationUnit>,
    catalog: &Catalog,
    options: &LayoutOptions,
) -> Result<ConsolidatedTable, Error> {
    let results = if options.threads > 1 && units.len() > 1 {
        debug!("processing {} compilation units on {} threads", units.len(), options.threads);
        let catalog = Arc::new(catalog.clone());
        let shared_options = Arc::new(options.clone());
        let units = units.into_iter().map(Arc::new).collect::<Vec<_>>();

        task_pool(units, options.threads, move |unit: Arc<CompilationUnit>| {
            process_unit(&unit, &catalog, &shared_options)
        })
    } else {
        units.iter().map(|unit| process_unit(unit, catalog, options)).collect()
    };

    let mut rows = Vec::new();
    for unit_rows in results {
        rows.extend(unit_rows?);
    }

    Ok(ConsolidatedTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            catalog::NameCollator,
            fixtures::{entry, layout, UnitBuilder},
        },
        interfaces::{ContractIdentity, LibraryNamespace, SlotEntry},
    };

    fn options(threads: usize) -> LayoutOptions {
        LayoutOptions {
            namespace: LibraryNamespace::new("@lib/upgradeable").expect("valid prefix"),
            include_empty: false,
            threads,
        }
    }

    fn catalog(units: &[CompilationUnit]) -> Catalog {
        let collator = NameCollator::new("en").expect("failed to build collator");
        Catalog::build(units.iter().flat_map(|unit| unit.identities()), &collator)
    }

    fn identical_unit(origin: &str) -> CompilationUnit {
        UnitBuilder::default()
            .contract("Foo.sol", "Foo", Some(layout(vec![entry(1, "x", "0")])))
            .build(origin)
    }

    #[test]
    fn test_units_are_not_merged() {
        let units = vec![identical_unit("build-info/a.json"), identical_unit("build-info/b.json")];
        let catalog = catalog(&units);

        let table = assemble(units, &catalog, &options(1)).expect("assembly failed");

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0], table.rows()[1]);
    }

    #[test]
    fn test_slot_ids_are_unit_local() {
        // astId 2 is library storage in the first unit only; in the second it is Foo's own
        let first = UnitBuilder::default()
            .contract("@lib/upgradeable/Base.sol", "Base", Some(layout(vec![entry(2, "y", "0")])))
            .contract("Foo.sol", "Foo", Some(layout(vec![entry(2, "y", "0"), entry(1, "x", "1")])))
            .build("build-info/a.json");
        let second = UnitBuilder::default()
            .contract("Foo.sol", "Foo", Some(layout(vec![entry(2, "z", "0")])))
            .build("build-info/b.json");
        let units = vec![first, second];
        let catalog = catalog(&units);

        let table = assemble(units, &catalog, &options(1)).expect("assembly failed");

        let labels = table
            .rows()
            .iter()
            .map(|row| row.state_variables.iter().map(|v| v.name.as_str()).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec![vec!["x"], vec!["z"]]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let units = (0..9)
            .map(|i| {
                UnitBuilder::default()
                    .contract(
                        "@lib/upgradeable/Base.sol",
                        "Base",
                        Some(layout(vec![entry(100 + i, "gap", "0")])),
                    )
                    .contract(
                        &format!("contracts/C{i}.sol"),
                        &format!("C{i}"),
                        Some(layout(vec![entry(100 + i, "gap", "0"), entry(i, "value", "1")])),
                    )
                    .build(&format!("build-info/{i}.json"))
            })
            .collect::<Vec<_>>();
        let catalog = catalog(&units);

        let sequential =
            assemble(units.clone(), &catalog, &options(1)).expect("sequential assembly failed");
        let parallel = assemble(units, &catalog, &options(4)).expect("parallel assembly failed");

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 9);
        assert_eq!(sequential.rows()[0].name, "C0");
        assert_eq!(sequential.rows()[8].name, "C8");
    }

    #[test]
    fn test_first_failure_aborts_the_table() {
        let broken = SlotEntry { type_ref: "t_missing".to_string(), ..entry(1, "x", "0") };
        let units = vec![
            identical_unit("build-info/a.json"),
            UnitBuilder::default()
                .contract("Foo.sol", "Foo", Some(layout(vec![broken])))
                .build("build-info/b.json"),
        ];
        let catalog = catalog(&units);

        for threads in [1, 2] {
            let err = assemble(units.clone(), &catalog, &options(threads))
                .expect_err("missing type should abort assembly");
            assert!(matches!(err, Error::Resolution { ref unit, .. } if unit == "build-info/b.json"));
        }
    }

    #[test]
    fn test_empty_input() {
        let catalog = Catalog::build(
            vec![ContractIdentity::new("Foo.sol", "Foo")],
            &NameCollator::new("en").expect("failed to build collator"),
        );

        let table = assemble(Vec::new(), &catalog, &options(4)).expect("assembly failed");
        assert!(table.is_empty());
    }
}
