use std::path::{Path, PathBuf};

use eyre::eyre;
use futures::future::try_join_all;
use serde::Deserialize;
use stowage_common::utils::{io::file::list_files_with_extension, path::strip_path_prefix};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::{
    error::Error,
    interfaces::{CompilationUnit, ContractIdentity},
};

/// The directory, inside the artifacts directory, holding build-info files.
const BUILD_INFO_DIR: &str = "build-info";

/// The fields of a Hardhat contract artifact that identify the contract.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactHeader {
    source_name: String,
    contract_name: String,
}

/// A compiled Hardhat project: every compilation unit and every known contract identity.
#[derive(Debug, Clone)]
pub struct Project {
    /// Path of the artifacts directory
    pub artifacts: PathBuf,
    /// Compilation units in discovery order (sorted by build-info path)
    pub units: Vec<CompilationUnit>,
    /// Every contract with an artifact, in no particular order
    pub identities: Vec<ContractIdentity>,
}

impl Project {
    /// Load every build-info file and contract artifact under `artifacts`.
    pub async fn load(artifacts: &Path) -> Result<Self, Error> {
        let units = load_units(artifacts).await?;
        let identities = load_identities(artifacts)?;
        debug!(
            "loaded {} compilation units and {} contract artifacts from {}",
            units.len(),
            identities.len(),
            artifacts.display()
        );

        Ok(Self { artifacts: artifacts.to_path_buf(), units, identities })
    }
}

/// Decode every `build-info/*.json` file concurrently, keeping discovery order.
async fn load_units(artifacts: &Path) -> Result<Vec<CompilationUnit>, Error> {
    let build_info_dir = artifacts.join(BUILD_INFO_DIR);
    if !build_info_dir.is_dir() {
        return Err(Error::Eyre(eyre!(
            "no build info found at {}, compile the project first",
            build_info_dir.display()
        )));
    }

    let paths = list_files_with_extension(&build_info_dir, "json")?;
    let handles = paths.into_iter().map(|path| async move {
        let origin = strip_path_prefix(&path, artifacts);
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| eyre!("failed to read build info {}: {e}", path.display()))?;
        trace!("decoding compilation unit {origin}");
        CompilationUnit::from_build_info(origin, &contents)
    });

    try_join_all(handles).await
}

/// Collect `(sourceName, contractName)` from every contract artifact, skipping the top-level
/// build-info directory and `.dbg.json` debug files.
fn load_identities(artifacts: &Path) -> Result<Vec<ContractIdentity>, Error> {
    let mut identities = Vec::new();

    let walker = WalkDir::new(artifacts)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() != 1 || entry.file_name() != BUILD_INFO_DIR);
    for entry in walker {
        let entry = entry.map_err(|e| eyre!("failed to walk {}: {e}", artifacts.display()))?;
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !entry.file_type().is_file() ||
            !file_name.ends_with(".json") ||
            file_name.ends_with(".dbg.json")
        {
            continue;
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre!("failed to read artifact {}: {e}", path.display()))?;
        match serde_json::from_str::<ArtifactHeader>(&contents) {
            Ok(header) => {
                identities.push(ContractIdentity::new(header.source_name, header.contract_name))
            }
            Err(e) => warn!("skipping {}: not a contract artifact ({e})", path.display()),
        }
    }

    Ok(identities)
}
