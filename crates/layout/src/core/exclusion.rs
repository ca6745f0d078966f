use hashbrown::HashSet;
use tracing::trace;

use crate::{
    core::catalog::Catalog,
    interfaces::{CompilationUnit, LibraryNamespace, SlotId},
};

/// The slot identifiers declared by the shared library within one compilation unit.
///
/// Slot identifiers are unit-local, so the set remembers which unit it was built from and is
/// rejected by [`extract_rows`](crate::extract_rows) for any other unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    unit: String,
    ids: HashSet<SlotId>,
}

impl ExclusionSet {
    /// Origin of the compilation unit this set was built from.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Whether the slot identifier belongs to the library.
    pub fn contains(&self, id: SlotId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of excluded identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Collect the slot identifiers of every state variable declared by a library contract in
/// `unit`. Library contracts without a storage layout contribute nothing.
pub fn build_exclusion_set(
    unit: &CompilationUnit,
    catalog: &Catalog,
    namespace: &LibraryNamespace,
) -> ExclusionSet {
    let ids = catalog
        .iter()
        .filter(|identity| namespace.is_library(&identity.source_origin))
        .filter_map(|identity| unit.storage_layout(identity).map(|layout| (identity, layout)))
        .flat_map(|(identity, layout)| {
            trace!("excluding {} slots of {identity}", layout.storage.len());
            layout.storage.iter().map(|entry| entry.ast_id)
        })
        .collect::<HashSet<_>>();

    ExclusionSet { unit: unit.origin.clone(), ids }
}
