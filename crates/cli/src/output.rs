use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{eyre, Result};
use stowage_common::utils::path::{is_within, resolve};

/// The name of the file the consolidated table is written to.
pub const OUTPUT_FILENAME: &str = "output.json";

/// resolve the output directory for an export. follows the following cases:
/// - `output` is resolved against `root`, so both relative and absolute paths are accepted
/// - if the resolved directory is not inside `root`, fail
/// - otherwise, create the directory (and any missing parents) and return it
pub fn resolve_output_dir(root: &Path, output: &str) -> Result<PathBuf> {
    let directory = resolve(root, Path::new(output));
    if !is_within(root, &directory) {
        return Err(eyre!(
            "output directory should be inside the project directory (got {})",
            directory.display()
        ));
    }

    std::fs::create_dir_all(&directory)
        .map_err(|e| eyre!("failed to create output directory {}: {}", directory.display(), e))?;
    Ok(directory)
}

/// pass the input to the `less` command
pub async fn print_with_less(input: &str) -> Result<()> {
    let mut child =
        std::process::Command::new("less").stdin(std::process::Stdio::piped()).spawn()?;

    let stdin = child.stdin.as_mut().ok_or_else(|| eyre!("unable to get stdin for less"))?;
    stdin.write_all(input.as_bytes())?;

    child.wait()?;
    Ok(())
}
