//! Configuration management for stowage
//!
//! This crate provides functionality for managing the stowage configuration,
//! including loading, saving, updating, and deleting configuration settings.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
use clap::Parser;
use icu_locid::Locale;
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use std::path::PathBuf;
use stowage_common::utils::io::file::{delete_path, read_file, write_file};
use tracing::{debug, error, info};

/// The library whose storage slots are excluded unless configured otherwise.
pub const DEFAULT_LIBRARY_PREFIX: &str = "@openzeppelin/contracts-upgradeable";

/// Sources under this prefix are never reported unless configured otherwise.
pub const DEFAULT_VENDOR_PREFIX: &str = "@openzeppelin";

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "stowage config [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the persisted configuration of the CLI. Command line
/// flags left at their defaults fall back to these values.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    /// Source prefix of the shared upgradeable library whose slots are excluded
    pub library_prefix: String,

    /// Wider source prefix that is never reported (may be empty)
    pub vendor_prefix: String,

    /// Locale used to order contracts by name
    pub collation_locale: String,

    /// Output directory, relative to the project root
    pub output_directory: String,

    /// Number of threads used to process compilation units
    pub threads: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            library_prefix: DEFAULT_LIBRARY_PREFIX.to_string(),
            vendor_prefix: DEFAULT_VENDOR_PREFIX.to_string(),
            collation_locale: "en".to_string(),
            output_directory: "storage_layout".to_string(),
            threads: 1,
        }
    }
}

/// The location of the configuration file, `$HOME/.stowage/config.toml`.
#[allow(deprecated)]
fn config_path() -> Result<String, Error> {
    let mut home: PathBuf = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    home.push(".stowage");
    home.push("config.toml");

    home.to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))
}

impl Configuration {
    /// Returns the current configuration, creating the file with defaults if it is missing.
    pub fn load() -> Result<Self, Error> {
        let path = config_path()?;

        // if the config file doesn't exist, create it
        if !std::path::Path::new(&path).exists() {
            debug!("no configuration found at {path}, writing defaults");
            let config = Configuration::default();
            config.save()?;
        }

        // read the config file
        let contents = read_file(&path)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        // parse the config file
        let config: Configuration = toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))?;

        Ok(config)
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        write_file(
            &config_path()?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file at `$HOME/.stowage/config.toml`.
    pub fn delete() -> Result<(), Error> {
        if !delete_path(&config_path()?) {
            return Err(Error::Generic("failed to delete config file".to_string()));
        }

        Ok(())
    }

    /// Update a single key/value pair in the configuration and persist it.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.set(key, value)?;

        // write the updated config to disk
        self.save()?;

        Ok(())
    }

    /// Update a single key/value pair in memory, checking that the value has the right type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        match key {
            "library_prefix" => {
                if value.is_empty() {
                    return Err(Error::Generic("library_prefix cannot be empty".to_string()));
                }
                self.library_prefix = value.to_string();
            }
            "vendor_prefix" => {
                self.vendor_prefix = value.to_string();
            }
            "collation_locale" => {
                value.parse::<Locale>().map_err(|e| {
                    Error::ParseError(format!("invalid value for 'collation_locale': {value} ({e})"))
                })?;
                self.collation_locale = value.to_string();
            }
            "output_directory" => {
                self.output_directory = value.to_string();
            }
            "threads" => {
                let threads = value.parse::<usize>().map_err(|e| {
                    Error::ParseError(format!("invalid value for 'threads': {value} ({e})"))
                })?;
                if threads == 0 {
                    return Err(Error::Generic("threads must be at least 1".to_string()));
                }
                self.threads = threads;
            }
            _ => {
                return Err(Error::Generic(format!(
                    "invalid key: \'{key}\' is not a valid configuration key."
                )))
            }
        }

        Ok(())
    }
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            // read the config file and update the key/value pair
            let mut config = Configuration::load()?;
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            // key is set, but no value is set
            error!("found key but no value to set. Please specify a value to set, use `stowage config --help` for more information.");
        }
    } else {
        // no key is set, print the config file
        println!("{:#?}", Configuration::load()?);
        info!("use `stowage config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}
