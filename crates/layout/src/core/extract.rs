use tracing::trace;

use crate::{
    core::{catalog::Catalog, exclusion::ExclusionSet, resolve::resolve_type},
    error::Error,
    interfaces::{CompilationUnit, ConsolidatedRow, LayoutOptions, ReportedVariable},
};

/// Extract the retained state variables of every non-library contract in `unit`.
///
/// Contracts under the library or vendor prefix are skipped entirely, as are contracts without
/// a storage layout. Entries whose slot identifier is in `exclusion` are dropped, which removes
/// library storage surfaced through inheritance. Every retained entry must resolve its byte
/// width; the first failure aborts the unit.
///
/// Contracts left with no retained entries produce no row unless `options.include_empty` is set.
pub fn extract_rows(
    unit: &CompilationUnit,
    catalog: &Catalog,
    exclusion: &ExclusionSet,
    options: &LayoutOptions,
) -> Result<Vec<ConsolidatedRow>, Error> {
    if exclusion.unit() != unit.origin {
        return Err(Error::ExclusionScope {
            expected: exclusion.unit().to_string(),
            found: unit.origin.clone(),
        });
    }

    let mut rows = Vec::new();
    for identity in catalog.iter() {
        if options.namespace.is_vendored(&identity.source_origin) {
            continue;
        }
        let Some(layout) = unit.storage_layout(identity) else {
            continue;
        };

        let mut state_variables = Vec::with_capacity(layout.storage.len());
        for entry in &layout.storage {
            if exclusion.contains(entry.ast_id) {
                trace!("dropping {}.{} (library slot {})", identity, entry.label, entry.ast_id.0);
                continue;
            }

            let number_of_bytes = resolve_type(layout, &entry.type_ref, identity, unit)?;
            state_variables.push(ReportedVariable {
                name: entry.label.clone(),
                slot: entry.slot.clone(),
                offset: entry.offset,
                type_ref: entry.type_ref.clone(),
                source: identity.source_origin.clone(),
                number_of_bytes: number_of_bytes.to_string(),
            });
        }

        if state_variables.is_empty() && !options.include_empty {
            continue;
        }
        rows.push(ConsolidatedRow { name: identity.declared_name.clone(), state_variables });
    }

    Ok(rows)
}
