use clap::Parser;
use derive_builder::Builder;
use stowage_config::{DEFAULT_LIBRARY_PREFIX, DEFAULT_VENDOR_PREFIX};

use crate::{error::Error, interfaces::LibraryNamespace};

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Export the consolidated storage layout of a Hardhat project",
    override_usage = "stowage export [ROOT] [OPTIONS]"
)]
/// Arguments for the export operation
///
/// Empty values fall back to the persisted configuration when run from the CLI, and to the
/// built-in defaults otherwise.
pub struct LayoutArgs {
    /// The root directory of the Hardhat project.
    #[clap(default_value = ".", hide_default_value = true)]
    pub root: String,

    /// The artifacts directory, relative to the project root.
    #[clap(long, default_value = "artifacts")]
    pub artifacts: String,

    /// The output directory, relative to the project root, or 'print' to print the JSON to the
    /// console.
    #[clap(long = "output", short, default_value = "", hide_default_value = true)]
    pub output: String,

    /// Source prefix of the upgradeable library whose storage slots are excluded.
    #[clap(long, default_value = "", hide_default_value = true)]
    pub library: String,

    /// Source prefix that is never reported, in addition to the library itself. Defaults to
    /// `@openzeppelin`, so non-upgradeable OpenZeppelin contracts are left out of the table too.
    /// Pass an empty string to report them.
    #[clap(long)]
    pub vendor: Option<String>,

    /// The locale used to order contracts by name.
    #[clap(long, default_value = "", hide_default_value = true)]
    pub locale: String,

    /// The number of threads used to process compilation units.
    #[clap(long, default_value = "0", hide_default_value = true)]
    pub threads: usize,

    /// Also report contracts whose every slot was excluded, as rows without state variables.
    #[clap(long = "include-empty")]
    pub include_empty: bool,

    /// Do not print the table after exporting.
    #[clap(long = "no-table")]
    pub no_table: bool,
}

impl LayoutArgsBuilder {
    /// Creates a new LayoutArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            root: Some(String::from(".")),
            artifacts: Some(String::from("artifacts")),
            output: Some(String::new()),
            library: Some(String::new()),
            vendor: Some(None),
            locale: Some(String::new()),
            threads: Some(1),
            include_empty: Some(false),
            no_table: Some(false),
        }
    }
}

impl LayoutArgs {
    /// The options the core algorithm runs with, after applying defaults.
    pub fn options(&self) -> Result<LayoutOptions, Error> {
        let library =
            if self.library.is_empty() { DEFAULT_LIBRARY_PREFIX } else { self.library.as_str() };
        let vendor = self.vendor.as_deref().unwrap_or(DEFAULT_VENDOR_PREFIX);

        Ok(LayoutOptions {
            namespace: LibraryNamespace::new(library)?.with_vendor_prefix(vendor),
            include_empty: self.include_empty,
            threads: self.threads.max(1),
        })
    }

    /// The collation locale, defaulting to `en`.
    pub fn collation_locale(&self) -> &str {
        if self.locale.is_empty() {
            "en"
        } else {
            &self.locale
        }
    }
}

/// Options for extracting and assembling the consolidated table.
#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    /// Which sources belong to the shared library
    pub namespace: LibraryNamespace,
    /// Emit rows for contracts with a layout but no retained variables
    pub include_empty: bool,
    /// Worker threads for processing compilation units; `0` and `1` run sequentially
    pub threads: usize,
}
