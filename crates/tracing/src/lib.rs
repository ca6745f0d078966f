//! Tracing setup for stowage.
//!
//! Assembles a [`tracing_subscriber`] registry out of one stdout layer and an optional log file
//! layer, each with its own format and filter.

mod formatter;

use std::path::PathBuf;

pub use formatter::LogFormat;
pub use tracing_appender::non_blocking::WorkerGuard as FileWorkerGuard;
pub use tracing_subscriber;

use formatter::BoxedLayer;
use tracing_subscriber::{
    filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Something that can install itself as the global tracing subscriber.
pub trait Tracer {
    /// Install the subscriber. The returned guard, if any, must be held for the lifetime of the
    /// program or buffered file output is lost.
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>>;
}

/// Configuration of a single log layer.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Creates a new [`LayerInfo`].
    ///
    /// `default_directive` applies when `RUST_LOG` is unset; `filters` is a comma separated list
    /// of extra directives such as `stowage_layout=trace`.
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

/// Where and under which name a log file is written.
#[derive(Debug, Clone)]
pub struct FileInfo {
    dir: PathBuf,
    file_name: String,
}

impl FileInfo {
    /// Creates a new [`FileInfo`].
    pub fn new(dir: PathBuf, file_name: String) -> Self {
        Self { dir, file_name }
    }
}

/// The stowage tracer. Starts empty; layers are added with the `with_*` builders.
#[derive(Debug, Clone, Default)]
pub struct StowageTracer {
    stdout: Option<LayerInfo>,
    file: Option<(LayerInfo, FileInfo)>,
}

impl StowageTracer {
    /// Creates a tracer with no layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log to stdout with the given layer configuration.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = Some(config);
        self
    }

    /// Additionally log to a file, without colors.
    pub fn with_file(mut self, config: LayerInfo, file: FileInfo) -> Self {
        self.file = Some((config, file));
        self
    }
}

impl Tracer for StowageTracer {
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut layers: Vec<BoxedLayer<Registry>> = Vec::new();

        if let Some(config) = self.stdout {
            let filter = build_env_filter(&config.default_directive, &config.filters)?;
            layers.push(config.format.apply(filter, config.color, None));
        }

        let mut guard = None;
        if let Some((config, file)) = self.file {
            std::fs::create_dir_all(&file.dir)?;
            let appender = tracing_appender::rolling::never(&file.dir, &file.file_name);
            let (writer, file_guard) = tracing_appender::non_blocking(appender);
            let filter = build_env_filter(&config.default_directive, &config.filters)?;
            layers.push(config.format.apply(filter, None, Some(writer)));
            guard = Some(file_guard);
        }

        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))?;

        Ok(guard)
    }
}

/// Build an [`EnvFilter`] from a default directive and a comma separated list of extra
/// directives. `RUST_LOG`, when set, takes the place of the default directive.
fn build_env_filter(default_directive: &str, filters: &str) -> eyre::Result<EnvFilter> {
    let default_directive: Directive = default_directive
        .parse()
        .map_err(|e| eyre::eyre!("invalid log directive '{default_directive}': {e}"))?;
    let env_filter = EnvFilter::builder().with_default_directive(default_directive).from_env_lossy();

    filters.split(',').map(str::trim).filter(|directive| !directive.is_empty()).try_fold(
        env_filter,
        |env_filter, directive| -> eyre::Result<EnvFilter> {
            let directive: Directive = directive
                .parse()
                .map_err(|e| eyre::eyre!("invalid log filter '{directive}': {e}"))?;
            Ok(env_filter.add_directive(directive))
        },
    )
}
