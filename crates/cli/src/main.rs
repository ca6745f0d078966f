pub(crate) mod args;
pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;
pub(crate) mod table;

use std::path::Path;

use args::{Arguments, Subcommands};
use clap::Parser;
use error::Error;
use output::{print_with_less, resolve_output_dir, OUTPUT_FILENAME};
use table::render_table;
use tracing::info;

use stowage_common::utils::{
    io::file::{short_path, write_file},
    path::resolve,
};
use stowage_config::{config, Configuration};
use stowage_core::stowage_layout::{export, LayoutArgs};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging
    let _guard = args.logs.init_tracing();

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {}", e)))?;
    match args.sub {
        Subcommands::Export(mut cmd) => {
            apply_configuration(&mut cmd, &configuration);

            let cwd = std::env::current_dir()
                .map_err(|e| Error::Generic(format!("failed to get current directory: {}", e)))?;
            let root = resolve(&cwd, Path::new(&cmd.root));
            cmd.root = root.to_string_lossy().into_owned();

            // validate the output location before doing any work
            let output_dir = if cmd.output == "print" {
                None
            } else {
                Some(resolve_output_dir(&root, &cmd.output).map_err(|e| {
                    Error::Generic(format!("failed to build output path: {}", e))
                })?)
            };

            let result = export(cmd.clone())
                .await
                .map_err(|e| Error::Generic(format!("failed to export storage layout: {}", e)))?;
            let json = result.to_json_pretty()?;

            match output_dir {
                None => {
                    print_with_less(&json)
                        .await
                        .map_err(|e| Error::Generic(format!("failed to print layout: {}", e)))?;
                }
                Some(directory) => {
                    let output_path = directory.join(OUTPUT_FILENAME);
                    let output_path = output_path.to_string_lossy();
                    write_file(&output_path, &json)
                        .map_err(|e| Error::Generic(format!("failed to write layout: {}", e)))?;
                    info!("wrote consolidated storage layout to {}", short_path(&output_path));
                }
            }

            if !cmd.no_table {
                println!("{}", render_table(&result));
            }
        }

        Subcommands::Config(cmd) => {
            config(cmd)
                .map_err(|e| Error::Generic(format!("failed to configure stowage: {}", e)))?;
        }
    }

    Ok(())
}

/// Fill every export option left at its empty default from the persisted configuration.
fn apply_configuration(cmd: &mut LayoutArgs, configuration: &Configuration) {
    if cmd.output.is_empty() {
        cmd.output = configuration.output_directory.clone();
    }
    if cmd.library.is_empty() {
        cmd.library = configuration.library_prefix.clone();
    }
    if cmd.vendor.is_none() {
        cmd.vendor = Some(configuration.vendor_prefix.clone());
    }
    if cmd.locale.is_empty() {
        cmd.locale = configuration.collation_locale.clone();
    }
    if cmd.threads == 0 {
        cmd.threads = configuration.threads;
    }
}
