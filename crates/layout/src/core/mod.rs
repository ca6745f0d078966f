pub(crate) mod assemble;
pub(crate) mod catalog;
pub(crate) mod exclusion;
pub(crate) mod extract;
pub(crate) mod resolve;

#[cfg(test)]
mod fixtures;

use std::{path::Path, time::Instant};

use tracing::{debug, info};

use crate::{
    core::{
        assemble::assemble,
        catalog::{Catalog, NameCollator},
    },
    error::Error,
    interfaces::{ConsolidatedTable, LayoutArgs, Project},
};

/// Exports the consolidated storage layout of a Hardhat project
///
/// Loads every build-info file and contract artifact under the project's artifacts directory,
/// orders the known contracts, and assembles the table of state variables that belong to the
/// project itself. Nothing is written to disk; writing and display are left to the caller.
///
/// # Arguments
///
/// * `args` - Configuration parameters for the export operation
///
/// # Returns
///
/// The consolidated table, with rows in build-info discovery order and then catalog order
pub async fn export(args: LayoutArgs) -> Result<ConsolidatedTable, Error> {
    let start_time = Instant::now();
    let options = args.options()?;
    let collator = NameCollator::new(args.collation_locale())?;

    // load the compiled project
    let start_load_time = Instant::now();
    let artifacts = Path::new(&args.root).join(&args.artifacts);
    let project = Project::load(&artifacts).await?;
    debug!("loading project artifacts took {:?}", start_load_time.elapsed());

    let catalog = Catalog::build(project.identities, &collator);
    debug!("catalogued {} contracts using locale '{}'", catalog.len(), collator.locale());

    let unit_count = project.units.len();
    let start_assemble_time = Instant::now();
    let table = assemble(project.units, &catalog, &options)?;
    debug!("assembling the table took {:?}", start_assemble_time.elapsed());

    info!(
        "exported {} state variables across {} contracts from {} compilation units",
        table.variable_count(),
        table.len(),
        unit_count
    );
    debug!("export took {:?}", start_time.elapsed());
    Ok(table)
}
