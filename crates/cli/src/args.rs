use clap::{Parser, Subcommand};

use stowage_config::ConfigArgs;
use stowage_core::stowage_layout::LayoutArgs;

use crate::log_args::LogArgs;

#[derive(Debug, Parser)]
#[clap(name = "stowage", version)]
pub struct Arguments {
    #[clap(subcommand)]
    pub sub: Subcommands,

    #[clap(flatten)]
    pub logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(
    about = "stowage exports the storage layout of every contract in a Hardhat project as one table, without the slots of the upgradeable library it builds on."
)]
#[allow(clippy::large_enum_variant)]
pub enum Subcommands {
    #[clap(name = "export", about = "Export the consolidated storage layout of a Hardhat project")]
    Export(LayoutArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export() {
        let args = Arguments::try_parse_from([
            "stowage",
            "export",
            "./project",
            "--library",
            "@lib/upgradeable",
            "--vendor",
            "",
            "-o",
            "print",
            "--no-table",
            "-vvv",
        ])
        .expect("failed to parse arguments");

        match args.sub {
            Subcommands::Export(cmd) => {
                assert_eq!(cmd.root, "./project");
                assert_eq!(cmd.library, "@lib/upgradeable");
                assert_eq!(cmd.vendor.as_deref(), Some(""));
                assert_eq!(cmd.output, "print");
                assert!(cmd.no_table);
                assert!(!cmd.include_empty);
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config() {
        let args = Arguments::try_parse_from(["stowage", "config", "threads", "4"])
            .expect("failed to parse arguments");
        assert!(matches!(args.sub, Subcommands::Config(_)));
    }
}
